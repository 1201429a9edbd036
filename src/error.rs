use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `respondent`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum RespondentError {
    // ── Sampler ─────────────────────────────────────────────────────────
    #[error("sampler: {0}")]
    Sampler(#[from] SamplerError),

    // ── Forms provider ──────────────────────────────────────────────────
    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Driver retry budget ─────────────────────────────────────────────
    #[error("gave up after {attempts} consecutive failed attempts")]
    RetriesExhausted { attempts: u32 },

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Sampler errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SamplerError {
    /// The question exposes no valid answers (no choices, or inverted scale
    /// bounds). A data/programmer error, never answered with a null.
    #[error("empty answer domain")]
    EmptyDomain,

    #[error("unsupported question kind: {kind}")]
    UnsupportedKind { kind: String },
}

// ─── Forms provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Bad form identifier. Fatal: the driver surfaces this immediately
    /// instead of retrying.
    #[error("form not found: {form_id}")]
    NotFound { form_id: String },

    /// Transport or validation failure on submit. Recoverable: the attempt
    /// is discarded and the driver tries again.
    #[error("submission rejected: {message}")]
    Submission { message: String },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed form descriptor: {message}")]
    Decode { message: String },
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, RespondentError>;
