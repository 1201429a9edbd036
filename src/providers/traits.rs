use async_trait::async_trait;

use crate::error::ProviderError;
use crate::form::{FormHandle, Question, ResponseDraft};

/// Abstract seam to a forms backend. The driver only ever talks to this
/// trait; backends decide what a form identifier means and how a response
/// travels.
#[async_trait]
pub trait FormsProvider: Send + Sync {
    /// Resolves a form identifier. Fails with [`ProviderError::NotFound`] for
    /// an unknown id; the driver treats that as fatal.
    async fn open_form(&self, id: &str) -> Result<FormHandle, ProviderError>;

    /// Enumerates the form's questions. Called once per submission attempt so
    /// a form edited mid-run is picked up on the next attempt.
    async fn list_questions(&self, form: &FormHandle) -> Result<Vec<Question>, ProviderError>;

    /// Submits one assembled response atomically. Fails with
    /// [`ProviderError::Submission`] on transport or validation failure; the
    /// whole attempt is then discarded.
    async fn submit(&self, form: &FormHandle, draft: &ResponseDraft) -> Result<(), ProviderError>;
}
