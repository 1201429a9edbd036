//! Command dispatch: resolves a provider and form id from CLI flags and
//! config, then runs the requested command.

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::driver::Driver;
use crate::form::QuestionKind;
use crate::providers::{FixtureProvider, FormsProvider, HttpFormsProvider};
use crate::sampler::Policy;

pub async fn dispatch(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run {
            form,
            count,
            policy,
            base_url,
            fixture,
        } => {
            let count = count.unwrap_or(config.target_count);
            let policy = policy.unwrap_or(config.policy);
            anyhow::ensure!(count > 0, "--count must be at least 1");

            match resolve_provider(base_url, fixture, &config)? {
                Backend::Http(provider) => {
                    let form_id = form
                        .or_else(|| config.form_id.clone())
                        .context("no form id: pass --form or set form_id in config")?;
                    run(provider, &form_id, count, policy, &config).await
                }
                Backend::Fixture(provider) => {
                    let form_id = form
                        .or_else(|| config.form_id.clone())
                        .unwrap_or_else(|| provider.form_id().to_string());
                    run(provider, &form_id, count, policy, &config).await
                }
            }
        }

        Commands::Inspect {
            form,
            base_url,
            fixture,
        } => match resolve_provider(base_url, fixture, &config)? {
            Backend::Http(provider) => {
                let form_id = form
                    .or_else(|| config.form_id.clone())
                    .context("no form id: pass --form or set form_id in config")?;
                inspect(&provider, &form_id).await
            }
            Backend::Fixture(provider) => {
                let form_id = form
                    .or_else(|| config.form_id.clone())
                    .unwrap_or_else(|| provider.form_id().to_string());
                inspect(&provider, &form_id).await
            }
        },
    }
}

enum Backend {
    Http(HttpFormsProvider),
    Fixture(FixtureProvider),
}

/// Flag > config > built-in sample fixture.
fn resolve_provider(
    base_url: Option<String>,
    fixture: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<Backend> {
    if let Some(path) = fixture {
        let provider = FixtureProvider::from_path(&path)
            .with_context(|| format!("loading fixture {}", path.display()))?;
        return Ok(Backend::Fixture(provider));
    }
    if let Some(url) = base_url.or_else(|| config.base_url.clone()) {
        return Ok(Backend::Http(HttpFormsProvider::new(&url)));
    }
    tracing::info!("No backend configured, using the built-in sample form");
    Ok(Backend::Fixture(FixtureProvider::sample()))
}

async fn run<P: FormsProvider>(
    provider: P,
    form_id: &str,
    count: u64,
    policy: Policy,
    config: &Config,
) -> anyhow::Result<()> {
    let driver = Driver::new(provider).with_retry(config.retry.clone());
    let report = driver.run(form_id, count, policy).await?;
    println!(
        "Submitted {}/{} responses in {} attempts ({} failed).",
        report.submitted, count, report.attempts, report.failed_attempts
    );
    Ok(())
}

async fn inspect<P: FormsProvider>(provider: &P, form_id: &str) -> anyhow::Result<()> {
    let form = provider.open_form(form_id).await?;
    let questions = provider.list_questions(&form).await?;

    println!("{} ({})", form.title().unwrap_or("<untitled>"), form.id());
    for question in &questions {
        let domain = match &question.kind {
            QuestionKind::ChoiceSet { choices } => format!("choice: [{}]", choices.join(", ")),
            QuestionKind::NumericScale { lower, upper } => format!("scale: {lower}..={upper}"),
            QuestionKind::Unsupported { type_name } => format!("unsupported ({type_name})"),
        };
        println!("  {} — {} — {}", question.id, question.title, domain);
    }
    Ok(())
}
