//! Configuration: `~/.respondent/config.toml`, created with defaults on first
//! run, with environment overrides applied after loading.

use std::fs;
use std::path::Path;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

use crate::driver::RetrySettings;
use crate::error::ConfigError;
use crate::sampler::Policy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the forms backend. Unset means fixture-only operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Default form identifier when `--form` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,

    #[serde(default = "default_target_count")]
    pub target_count: u64,

    #[serde(default)]
    pub policy: Policy,

    #[serde(default)]
    pub retry: RetrySettings,
}

fn default_target_count() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            form_id: None,
            target_count: default_target_count(),
            policy: Policy::default(),
            retry: RetrySettings::default(),
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        let config_dir = home.join(".respondent");
        let config_path = config_dir.join("config.toml");

        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        let config = Self::default();
        let contents = toml::to_string_pretty(&config)
            .map_err(|e| ConfigError::Load(format!("serialize defaults: {e}")))?;
        fs::write(&config_path, contents)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to config.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("RESPONDENT_BASE_URL") {
            if !url.is_empty() {
                self.base_url = Some(url);
            }
        }

        if let Ok(form) = std::env::var("RESPONDENT_FORM_ID") {
            if !form.is_empty() {
                self.form_id = Some(form);
            }
        }

        if let Ok(count_str) = std::env::var("RESPONDENT_TARGET_COUNT") {
            if let Ok(count) = count_str.parse::<u64>() {
                self.target_count = count;
            }
        }

        if let Ok(policy_str) = std::env::var("RESPONDENT_POLICY") {
            if let Ok(policy) = policy_str.parse::<Policy>() {
                self.policy = policy;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_count == 0 {
            return Err(ConfigError::Validation("target_count must be at least 1".into()));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "retry.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_parses_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.target_count, 50);
        assert_eq!(config.policy, Policy::Uniform);
        assert_eq!(config.retry.max_attempts, 10);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "base_url = \"https://forms.example.com\"\npolicy = \"biased\"\n\n[retry]\nmax_attempts = 3\n"
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.base_url.as_deref(), Some("https://forms.example.com"));
        assert_eq!(config.policy, Policy::Biased);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_backoff_ms, 500);
        assert_eq!(config.target_count, 50);
    }

    #[test]
    fn zero_target_count_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "target_count = 0\n").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn env_overrides_replace_config_values() {
        // Single test so the process-global env is touched from one place.
        unsafe {
            std::env::set_var("RESPONDENT_BASE_URL", "https://env.example.com");
            std::env::set_var("RESPONDENT_FORM_ID", "env-form");
            std::env::set_var("RESPONDENT_TARGET_COUNT", "7");
            std::env::set_var("RESPONDENT_POLICY", "biased");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.base_url.as_deref(), Some("https://env.example.com"));
        assert_eq!(config.form_id.as_deref(), Some("env-form"));
        assert_eq!(config.target_count, 7);
        assert_eq!(config.policy, Policy::Biased);

        // Unparsable values are ignored, keeping the previous settings.
        unsafe {
            std::env::set_var("RESPONDENT_TARGET_COUNT", "not-a-number");
            std::env::set_var("RESPONDENT_POLICY", "chaotic");
        }
        config.apply_env_overrides();
        assert_eq!(config.target_count, 7);
        assert_eq!(config.policy, Policy::Biased);

        unsafe {
            std::env::remove_var("RESPONDENT_BASE_URL");
            std::env::remove_var("RESPONDENT_FORM_ID");
            std::env::remove_var("RESPONDENT_TARGET_COUNT");
            std::env::remove_var("RESPONDENT_POLICY");
        }
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.target_count, config.target_count);
        assert_eq!(parsed.policy, config.policy);
        assert_eq!(parsed.retry.max_backoff_ms, config.retry.max_backoff_ms);
    }
}
