use crate::models::FieldError;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The verdict for a single field.
///
/// A result is valid exactly when it carries no error; the two can never disagree because
/// validity is derived from the error rather than stored next to it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ValidationResult {
    error: Option<FieldError>
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { error: None }
    }

    pub fn invalid(error: FieldError) -> Self {
        Self { error: Some(error) }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// The human-readable reason, `None` when valid.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("error", &self.message())?;
        state.end()
    }
}
