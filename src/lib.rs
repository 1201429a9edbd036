#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod form;
pub mod providers;
pub mod sampler;

pub use config::Config;
pub use driver::{Driver, RetrySettings, RunReport};
pub use error::{ConfigError, ProviderError, RespondentError, Result, SamplerError};
pub use sampler::Policy;
