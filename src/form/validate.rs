use super::{ComplaintType, FormFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is blank or no complaint type is selected.
    RequiredFieldMissing,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::RequiredFieldMissing => write!(f, "Required field missing"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Gate in front of every submission. Notes are optional.
/// Returns the selected complaint type once both required fields are present.
pub fn validate(fields: &FormFields) -> Result<ComplaintType, ValidationError> {
    match fields.complaint_type {
        Some(kind) if !fields.customer_name.trim().is_empty() => Ok(kind),
        _ => Err(ValidationError::RequiredFieldMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, kind: Option<ComplaintType>) -> FormFields {
        FormFields {
            customer_name: name.to_string(),
            complaint_type: kind,
            notes: String::new(),
        }
    }

    #[test]
    fn accepts_name_and_type_without_notes() {
        assert_eq!(
            validate(&fields("Ali", Some(ComplaintType::TechnicalIssue))),
            Ok(ComplaintType::TechnicalIssue)
        );
    }

    #[test]
    fn rejects_blank_names() {
        for name in ["", " ", "\t\n", "\u{3000}"] {
            assert_eq!(
                validate(&fields(name, Some(ComplaintType::Other))),
                Err(ValidationError::RequiredFieldMissing),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_missing_type() {
        assert_eq!(
            validate(&fields("Ali", None)),
            Err(ValidationError::RequiredFieldMissing)
        );
    }
}
