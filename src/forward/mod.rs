pub mod sheets;

use async_trait::async_trait;

use crate::form::Submission;

/// The submission could not be handed to the endpoint.
#[derive(Debug)]
pub struct ForwardError {
    pub message: String,
}

impl std::fmt::Display for ForwardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ForwardError {}

impl From<String> for ForwardError {
    fn from(s: String) -> Self {
        ForwardError { message: s }
    }
}

impl From<&str> for ForwardError {
    fn from(s: &str) -> Self {
        ForwardError {
            message: s.to_string(),
        }
    }
}

/// Outbound delivery of a submission.
///
/// `Ok(())` only means nothing failed on the way out. Implementations do not
/// report whether the receiver accepted the data.
#[async_trait]
pub trait Forwarder: Send + Sync {
    fn name(&self) -> &str;
    async fn forward(&self, submission: &Submission) -> Result<(), ForwardError>;
}
