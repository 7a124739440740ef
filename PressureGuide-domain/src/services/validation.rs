use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Raw values to check before a reading is accepted
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReadingInput {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 60, max = 300, message = "Systolic must be between 60 and 300"))]
    pub systolic: Option<i32>,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 40, max = 200, message = "Diastolic must be between 40 and 200"))]
    pub diastolic: Option<i32>,

    /// Optional pulse rate in beats per minute
    #[validate(range(min = 30, max = 250, message = "Pulse must be between 30 and 250"))]
    pub pulse: Option<i32>,
}

/// Machine-readable identifier of a violated rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    SystolicRequired,
    SystolicOutOfRange,
    DiastolicRequired,
    DiastolicOutOfRange,
    PulseOutOfRange,
    SystolicNotAboveDiastolic,
}

/// A single violated rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ValidationIssue {
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationIssue {
    fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Every violated rule for one set of values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ReadingInput {
    /// Check every rule independently and collect all violations.
    ///
    /// Issues are reported in field order (systolic, diastolic, pulse) followed
    /// by the cross-field check.
    pub fn check(&self) -> ValidationResult {
        let range_errors = self.validate().err();
        let mut errors = Vec::new();

        match self.systolic {
            None => errors.push(ValidationIssue::new(ValidationCode::SystolicRequired, "Systolic is required")),
            Some(_) => {
                if let Some(message) = range_message(range_errors.as_ref(), "systolic") {
                    errors.push(ValidationIssue::new(ValidationCode::SystolicOutOfRange, message));
                }
            }
        }

        match self.diastolic {
            None => errors.push(ValidationIssue::new(ValidationCode::DiastolicRequired, "Diastolic is required")),
            Some(_) => {
                if let Some(message) = range_message(range_errors.as_ref(), "diastolic") {
                    errors.push(ValidationIssue::new(ValidationCode::DiastolicOutOfRange, message));
                }
            }
        }

        if let Some(message) = range_message(range_errors.as_ref(), "pulse") {
            errors.push(ValidationIssue::new(ValidationCode::PulseOutOfRange, message));
        }

        if let (Some(systolic), Some(diastolic)) = (self.systolic, self.diastolic) {
            if systolic <= diastolic {
                errors.push(ValidationIssue::new(
                    ValidationCode::SystolicNotAboveDiastolic,
                    "Systolic pressure must be greater than diastolic pressure",
                ));
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate raw reading values; never fails, invalid input is reported in the result
pub fn validate_reading(systolic: Option<i32>, diastolic: Option<i32>, pulse: Option<i32>) -> ValidationResult {
    ReadingInput { systolic, diastolic, pulse }.check()
}

fn range_message(errors: Option<&ValidationErrors>, field: &str) -> Option<String> {
    let field_errors = errors?.field_errors();
    let error = field_errors.get(field)?.first()?;
    Some(
        error
            .message
            .as_ref()
            .map(|message| message.to_string())
            .unwrap_or_else(|| format!("Invalid {}", field)),
    )
}
