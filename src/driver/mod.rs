//! Submission driver: loops until the target number of responses has been
//! accepted, isolating failures per question and per attempt.
//!
//! The original behavior this replaces retried forever on persistent failure;
//! here the retry budget is explicit. [`RetrySettings`] bounds *consecutive*
//! failed attempts and applies exponential backoff between them, both reset by
//! any successful submission.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RespondentError, Result};
use crate::form::{FormHandle, QuestionKind, ResponseDraft};
use crate::providers::FormsProvider;
use crate::sampler::{self, Policy};

// ─── Retry policy ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Consecutive failed attempts tolerated before the run aborts with
    /// `RetriesExhausted`.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_base_backoff_ms")]
    pub base_backoff_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
    10
}

fn default_base_backoff_ms() -> u64 {
    500
}

fn default_max_backoff_ms() -> u64 {
    10_000
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_backoff_ms: default_base_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

// ─── Run report ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub submitted: u64,
    pub attempts: u64,
    pub failed_attempts: u64,
}

// ─── Driver ─────────────────────────────────────────────────────────────────

pub struct Driver<P> {
    provider: P,
    retry: RetrySettings,
}

impl<P: FormsProvider> Driver<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            retry: RetrySettings::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetrySettings) -> Self {
        self.retry = retry;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs submission attempts until `target_count` responses have been
    /// accepted. A bad form identifier is fatal; everything else is logged,
    /// counted against the retry budget, and retried.
    pub async fn run(&self, form_id: &str, target_count: u64, policy: Policy) -> Result<RunReport> {
        let form = self.provider.open_form(form_id).await?;
        tracing::info!(
            form = form.id(),
            title = form.title().unwrap_or("<untitled>"),
            target = target_count,
            %policy,
            "Starting submission run"
        );

        let mut report = RunReport::default();
        let mut consecutive_failures = 0u32;
        let mut backoff_ms = self.retry.base_backoff_ms;

        while report.submitted < target_count {
            report.attempts += 1;
            match self.attempt(&form, policy).await {
                Ok(answered) => {
                    report.submitted += 1;
                    consecutive_failures = 0;
                    backoff_ms = self.retry.base_backoff_ms;
                    tracing::info!(
                        submitted = report.submitted,
                        target = target_count,
                        answered,
                        "Response submitted"
                    );
                }
                Err(e) => {
                    report.failed_attempts += 1;
                    consecutive_failures += 1;
                    tracing::warn!(
                        attempt = report.attempts,
                        consecutive_failures,
                        error = %e,
                        "Submission attempt failed"
                    );
                    if consecutive_failures >= self.retry.max_attempts {
                        return Err(RespondentError::RetriesExhausted {
                            attempts: consecutive_failures,
                        });
                    }
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms = backoff_ms.saturating_mul(2).min(self.retry.max_backoff_ms);
                }
            }
        }

        Ok(report)
    }

    /// One submission attempt. Returns the number of questions answered.
    ///
    /// Unsupported questions are skipped outright. A question whose sampling
    /// fails is logged and omitted; the remaining partial response is still
    /// submitted as-is.
    async fn attempt(
        &self,
        form: &FormHandle,
        policy: Policy,
    ) -> std::result::Result<usize, crate::error::ProviderError> {
        let questions = self.provider.list_questions(form).await?;
        let mut draft = ResponseDraft::new();

        for question in &questions {
            if let QuestionKind::Unsupported { type_name } = &question.kind {
                tracing::debug!(
                    question = question.id.as_str(),
                    kind = type_name.as_str(),
                    "Skipping unsupported question"
                );
                continue;
            }
            match sampler::sample_answer(&question.kind, policy) {
                Ok(answer) => draft.set_answer(question.id.clone(), answer),
                Err(e) => tracing::warn!(
                    question = question.id.as_str(),
                    error = %e,
                    "Skipping unanswerable question"
                ),
            }
        }

        let answered = draft.len();
        self.provider.submit(form, &draft).await?;
        Ok(answered)
    }
}
