use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::ComplaintType;
use crate::i18n::Language;

/// Payload forwarded to the spreadsheet endpoint. Built fresh on every submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub timestamp: String,
    pub language: Language,
    pub customer_name: String,
    pub complaint_type: ComplaintType,
    pub notes: String,
}

impl Submission {
    /// Build from validated values. The name is sent as entered.
    pub fn new(
        customer_name: &str,
        complaint_type: ComplaintType,
        notes: &str,
        language: Language,
        now: DateTime<Utc>,
    ) -> Self {
        Submission {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            language,
            customer_name: customer_name.to_string(),
            complaint_type,
            notes: notes.to_string(),
        }
    }
}
