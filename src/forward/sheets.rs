use std::time::Duration;

use async_trait::async_trait;

use super::{ForwardError, Forwarder};
use crate::form::Submission;

/// Posts submissions to a spreadsheet-backed web app (Google Apps Script).
///
/// The response is treated as opaque: any completed HTTP exchange counts as
/// delivered, whatever the status. Only transport failures are errors.
pub struct SheetsForwarder {
    client: reqwest::Client,
    url: String,
}

impl SheetsForwarder {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForwardError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Forwarder for SheetsForwarder {
    fn name(&self) -> &str {
        "sheets"
    }

    async fn forward(&self, submission: &Submission) -> Result<(), ForwardError> {
        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| ForwardError::from(format!("Submission request failed: {e}")))?;

        // Body is never read.
        tracing::debug!(status = resp.status().as_u16(), "Endpoint responded");
        Ok(())
    }
}
