use chrono::{DateTime, Utc};

use super::{FieldInput, FormFields, Submission, validate};
use crate::forward::ForwardError;
use crate::i18n::{Language, UiStrings};

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Success,
    Error,
}

/// The one message the error banner can show. Localized at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Required,
    Transport,
}

impl Notice {
    pub fn message(&self, strings: &UiStrings) -> &'static str {
        match self {
            Notice::Required => strings.required,
            Notice::Transport => strings.error,
        }
    }
}

/// Why `begin_submit` did not hand out a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight.
    InFlight,
    /// The form is showing the success screen.
    NotEditable,
    /// Validation failed; the required-field notice is now set.
    Invalid,
}

impl std::fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitRejected::InFlight => write!(f, "submission already in flight"),
            SubmitRejected::NotEditable => write!(f, "form is not editable"),
            SubmitRejected::Invalid => write!(f, "required field missing"),
        }
    }
}

/// Form state owned by a single browser session.
#[derive(Debug, Clone)]
pub struct FormSession {
    language: Language,
    fields: FormFields,
    phase: Phase,
    notice: Option<Notice>,
}

impl FormSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            fields: FormFields::default(),
            phase: Phase::Editing,
            notice: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Apply field edits. Any change clears the notice and leaves the error phase.
    /// Returns whether the fields changed.
    pub fn edit(&mut self, input: &FieldInput) -> bool {
        if !matches!(self.phase, Phase::Editing | Phase::Error) {
            return false;
        }

        let next = self.fields.merged(input);
        if next == self.fields {
            return false;
        }

        self.fields = next;
        self.notice = None;
        self.phase = Phase::Editing;
        true
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Validate and move to `Submitting`, returning the payload to forward.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<Submission, SubmitRejected> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRejected::InFlight),
            Phase::Success => return Err(SubmitRejected::NotEditable),
            Phase::Editing | Phase::Error => {}
        }

        let complaint_type = match validate(&self.fields) {
            Ok(kind) => kind,
            Err(_) => {
                self.notice = Some(Notice::Required);
                self.phase = Phase::Editing;
                return Err(SubmitRejected::Invalid);
            }
        };

        self.notice = None;
        self.phase = Phase::Submitting;
        Ok(Submission::new(
            &self.fields.customer_name,
            complaint_type,
            &self.fields.notes,
            self.language,
            now,
        ))
    }

    /// Record the outcome of the outbound call. No-op unless submitting.
    pub fn finish_submit(&mut self, outcome: &Result<(), ForwardError>) {
        if self.phase != Phase::Submitting {
            return;
        }

        match outcome {
            Ok(()) => {
                self.phase = Phase::Success;
                self.fields.clear();
                self.notice = None;
            }
            Err(_) => {
                self.phase = Phase::Error;
                self.notice = Some(Notice::Transport);
            }
        }
    }

    /// "Send another": back to an empty form. Ignored while submitting.
    pub fn send_another(&mut self) {
        if self.phase == Phase::Submitting {
            return;
        }
        self.phase = Phase::Editing;
        self.fields.clear();
        self.notice = None;
    }
}
