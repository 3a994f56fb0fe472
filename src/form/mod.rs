pub mod session;
pub mod submission;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use session::{FormSession, Notice, Phase, SubmitRejected};
pub use submission::Submission;
pub use validate::{ValidationError, validate};

/// Category of a complaint. Serialized as its snake_case tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintType {
    ServiceQuality,
    TechnicalIssue,
    BillingIssue,
    DelayIssue,
    Other,
}

impl ComplaintType {
    /// Display order of the select options.
    pub const ALL: [ComplaintType; 5] = [
        ComplaintType::ServiceQuality,
        ComplaintType::TechnicalIssue,
        ComplaintType::BillingIssue,
        ComplaintType::DelayIssue,
        ComplaintType::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ComplaintType::ServiceQuality => "service_quality",
            ComplaintType::TechnicalIssue => "technical_issue",
            ComplaintType::BillingIssue => "billing_issue",
            ComplaintType::DelayIssue => "delay_issue",
            ComplaintType::Other => "other",
        }
    }

    /// Parse a form value. Empty or unknown values mean "not selected".
    pub fn from_value(value: &str) -> Option<ComplaintType> {
        Self::ALL.into_iter().find(|kind| kind.value() == value.trim())
    }
}

/// Current field values of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub customer_name: String,
    pub complaint_type: Option<ComplaintType>,
    pub notes: String,
}

/// Raw field values as posted by the browser. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    pub customer_name: Option<String>,
    pub complaint_type: Option<String>,
    pub notes: Option<String>,
}

impl FieldInput {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none() && self.complaint_type.is_none() && self.notes.is_none()
    }
}

impl FormFields {
    /// Fields after applying `input`.
    pub fn merged(&self, input: &FieldInput) -> FormFields {
        FormFields {
            customer_name: input
                .customer_name
                .clone()
                .unwrap_or_else(|| self.customer_name.clone()),
            complaint_type: match &input.complaint_type {
                Some(raw) => ComplaintType::from_value(raw),
                None => self.complaint_type,
            },
            notes: input.notes.clone().unwrap_or_else(|| self.notes.clone()),
        }
    }

    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}
