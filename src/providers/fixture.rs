//! Local forms provider backed by a JSON descriptor. Powers `--fixture` runs
//! and tests; submissions are recorded in memory instead of leaving the
//! process.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use super::descriptor::FormDescriptor;
use super::traits::FormsProvider;
use crate::error::ProviderError;
use crate::form::{FormHandle, Question, ResponseDraft};

pub struct FixtureProvider {
    descriptor: FormDescriptor,
    submissions: Mutex<Vec<ResponseDraft>>,
}

impl FixtureProvider {
    pub fn new(descriptor: FormDescriptor) -> Self {
        Self {
            descriptor,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ProviderError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ProviderError::Decode {
            message: format!("{}: {e}", path.display()),
        })?;
        let descriptor: FormDescriptor =
            serde_json::from_str(&contents).map_err(|e| ProviderError::Decode {
                message: format!("{}: {e}", path.display()),
            })?;
        Ok(Self::new(descriptor))
    }

    /// Built-in product-feedback form used when no target is configured.
    /// Covers both supported kinds plus an unsupported one, so a dry run
    /// exercises the skip path too.
    pub fn sample() -> Self {
        let descriptor: FormDescriptor = serde_json::from_value(serde_json::json!({
            "id": "sample-form",
            "title": "Product feedback",
            "questions": [
                {
                    "id": "q-setup",
                    "title": "How easy was setup?",
                    "kind": "choice",
                    "choices": ["Very easy", "Easy", "Neutral", "Difficult", "Very difficult"],
                },
                {
                    "id": "q-recommend",
                    "title": "Would you recommend us?",
                    "kind": "choice",
                    "choices": ["Definitely", "Probably", "Not sure", "Probably not", "Definitely not"],
                },
                {
                    "id": "q-satisfaction",
                    "title": "Overall satisfaction",
                    "kind": "scale",
                    "lower": 1,
                    "upper": 5,
                },
                {
                    "id": "q-comments",
                    "title": "Anything else?",
                    "kind": "free_text",
                },
            ],
        }))
        .expect("built-in sample form is valid");
        Self::new(descriptor)
    }

    pub fn form_id(&self) -> &str {
        &self.descriptor.id
    }

    /// Responses submitted so far, in order.
    pub fn submissions(&self) -> Vec<ResponseDraft> {
        self.submissions.lock().expect("submissions lock").clone()
    }
}

#[async_trait]
impl FormsProvider for FixtureProvider {
    async fn open_form(&self, id: &str) -> Result<FormHandle, ProviderError> {
        if id != self.descriptor.id {
            return Err(ProviderError::NotFound {
                form_id: id.to_string(),
            });
        }
        Ok(FormHandle::new(
            self.descriptor.id.clone(),
            self.descriptor.title.clone(),
        ))
    }

    async fn list_questions(&self, _form: &FormHandle) -> Result<Vec<Question>, ProviderError> {
        Ok(self
            .descriptor
            .questions
            .iter()
            .cloned()
            .map(super::descriptor::QuestionDescriptor::into_question)
            .collect())
    }

    async fn submit(&self, _form: &FormHandle, draft: &ResponseDraft) -> Result<(), ProviderError> {
        self.submissions
            .lock()
            .expect("submissions lock")
            .push(draft.clone());
        Ok(())
    }
}
