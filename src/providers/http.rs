//! Forms provider speaking a small JSON protocol over HTTP.
//!
//! `GET {base}/forms/{id}` returns a [`FormDescriptor`];
//! `POST {base}/forms/{id}/responses` accepts the serialized answers.

use reqwest::{Client, StatusCode};
use serde::Serialize;

use super::descriptor::FormDescriptor;
use super::traits::FormsProvider;
use crate::error::ProviderError;
use crate::form::{Answer, FormHandle, Question, ResponseDraft};
use async_trait::async_trait;

pub struct HttpFormsProvider {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    answers: Vec<SubmitAnswer<'a>>,
}

#[derive(Debug, Serialize)]
struct SubmitAnswer<'a> {
    question: &'a str,
    value: serde_json::Value,
}

impl HttpFormsProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    async fn fetch_descriptor(&self, id: &str) -> Result<FormDescriptor, ProviderError> {
        let url = format!("{}/forms/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound {
                form_id: id.to_string(),
            });
        }
        let response = response.error_for_status()?;
        response
            .json::<FormDescriptor>()
            .await
            .map_err(|e| ProviderError::Decode {
                message: e.to_string(),
            })
    }

    fn build_request(draft: &ResponseDraft) -> SubmitRequest<'_> {
        let answers = draft
            .answers()
            .iter()
            .map(|(question_id, answer)| SubmitAnswer {
                question: question_id,
                value: match answer {
                    Answer::Choice(label) => serde_json::Value::String(label.clone()),
                    Answer::Scale(value) => serde_json::Value::from(*value),
                },
            })
            .collect();
        SubmitRequest { answers }
    }
}

#[async_trait]
impl FormsProvider for HttpFormsProvider {
    async fn open_form(&self, id: &str) -> Result<FormHandle, ProviderError> {
        let descriptor = self.fetch_descriptor(id).await?;
        Ok(FormHandle::new(descriptor.id, descriptor.title))
    }

    async fn list_questions(&self, form: &FormHandle) -> Result<Vec<Question>, ProviderError> {
        let descriptor = self.fetch_descriptor(form.id()).await?;
        Ok(descriptor
            .questions
            .into_iter()
            .map(super::descriptor::QuestionDescriptor::into_question)
            .collect())
    }

    async fn submit(&self, form: &FormHandle, draft: &ResponseDraft) -> Result<(), ProviderError> {
        let url = format!("{}/forms/{}/responses", self.base_url, form.id());
        let request = Self::build_request(draft);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let mut message = format!("{status}");
            if !body.is_empty() {
                let snippet: String = body.chars().take(200).collect();
                message = format!("{status}: {snippet}");
            }
            return Err(ProviderError::Submission { message });
        }
        Ok(())
    }
}
