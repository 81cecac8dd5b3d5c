use crate::models::Field;
use rust_decimal::Decimal;
use thiserror::Error;

/// A field-level validation failure.
///
/// These are reported inside a [`crate::models::ValidationResult`], never raised. The
/// `Display` output is the human-readable message shown next to the form field.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("{reason}")]
    MissingField {
        field: Field,
        reason: String
    },
    #[error("{reason}")]
    InvalidLength {
        field: Field,
        reason: String,
        actual: usize
    },
    #[error("{reason}")]
    InvalidFormat {
        field: Field,
        reason: String
    },
    #[error("{reason}")]
    InvalidAmount {
        field: Field,
        reason: String
    },
    #[error("Amount exceeds maximum transfer limit")]
    ExceedsLimit {
        field: Field,
        limit: Decimal
    }
}

impl FieldError {
    //NOTE: All user-facing wording lives in these factories, validators only pick which one applies.

    pub fn routing_number_missing() -> Self {
        Self::MissingField {
            field: Field::RoutingNumber,
            reason: "Routing number is required".to_string()
        }
    }

    pub fn routing_number_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            field: Field::RoutingNumber,
            reason: format!("US routing number must be exactly {expected} digits (you entered {actual})"),
            actual
        }
    }

    pub fn routing_number_format() -> Self {
        Self::InvalidFormat {
            field: Field::RoutingNumber,
            reason: "Routing number must contain only digits".to_string()
        }
    }

    pub fn account_number_missing() -> Self {
        Self::MissingField {
            field: Field::AccountNumber,
            reason: "Account number is required".to_string()
        }
    }

    pub fn account_number_length(min: usize, max: usize, actual: usize) -> Self {
        Self::InvalidLength {
            field: Field::AccountNumber,
            reason: format!("Account number must be between {min} and {max} characters (you entered {actual})"),
            actual
        }
    }

    pub fn account_number_format() -> Self {
        Self::InvalidFormat {
            field: Field::AccountNumber,
            reason: "Account number must contain only letters and numbers".to_string()
        }
    }

    pub fn swift_code_format() -> Self {
        Self::InvalidFormat {
            field: Field::SwiftCode,
            reason: "Invalid SWIFT code format (e.g., CHASUS33)".to_string()
        }
    }

    pub fn amount_unparseable() -> Self {
        Self::InvalidAmount {
            field: Field::Amount,
            reason: "Please enter a valid amount".to_string()
        }
    }

    pub fn amount_not_positive() -> Self {
        Self::InvalidAmount {
            field: Field::Amount,
            reason: "Amount must be greater than 0".to_string()
        }
    }

    pub fn amount_exceeds_limit(limit: Decimal) -> Self {
        Self::ExceedsLimit {
            field: Field::Amount,
            limit
        }
    }

    /// The field this failure belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidLength { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidAmount { field, .. }
            | Self::ExceedsLimit { field, .. } => *field
        }
    }
}
