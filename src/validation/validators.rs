use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{FieldError, TransferInstruction, ValidationResult};
use crate::types::{AmountError, AmountInput, TransferType};

pub const ROUTING_NUMBER_LENGTH: usize = 9;
pub const ACCOUNT_NUMBER_MIN_LENGTH: usize = 8;
pub const ACCOUNT_NUMBER_MAX_LENGTH: usize = 17;

/// Institution (4 letters), country (2 letters), location (2) and an optional branch (3).
static SWIFT_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("Invalid SWIFT code regex pattern")
});

/// The largest amount a single instruction may move, inclusive.
pub fn max_transfer_amount() -> Decimal {
    Decimal::new(99_999_999_999, 2)
}

/// Removes every whitespace character, including the ones between digit groups.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|character| !character.is_whitespace()).collect()
}

/// Validates a routing number for the given transfer type.
///
/// Only domestic transfers are checked: the sanitized value must be exactly nine ASCII digits.
/// International instructions are always reported valid here, their bank is identified by the
/// SWIFT code instead. `country` does not select rules yet.
pub fn validate_routing_number(routing: &str, transfer_type: TransferType, country: &str) -> ValidationResult {
    if transfer_type != TransferType::Domestic {
        trace!("Skipping routing number checks for [{transfer_type}] transfer to [{country}]");
        return ValidationResult::valid();
    }

    let sanitized = strip_whitespace(routing);

    if sanitized.is_empty() {
        return ValidationResult::invalid(FieldError::routing_number_missing());
    }

    let length = sanitized.chars().count();

    if length != ROUTING_NUMBER_LENGTH {
        return ValidationResult::invalid(FieldError::routing_number_length(ROUTING_NUMBER_LENGTH, length));
    }

    if !sanitized.chars().all(|character| character.is_ascii_digit()) {
        return ValidationResult::invalid(FieldError::routing_number_format());
    }

    ValidationResult::valid()
}

/// Validates an account number: 8 to 17 ASCII letters or digits once whitespace is stripped.
///
/// `transfer_type` is accepted for per-type rules (IBAN lengths for instance) but does not
/// change anything today.
pub fn validate_account_number(account_number: &str, transfer_type: TransferType) -> ValidationResult {
    let sanitized = strip_whitespace(account_number);

    if sanitized.is_empty() {
        return ValidationResult::invalid(FieldError::account_number_missing());
    }

    let length = sanitized.chars().count();

    if !(ACCOUNT_NUMBER_MIN_LENGTH..=ACCOUNT_NUMBER_MAX_LENGTH).contains(&length) {
        trace!("Account number length {length} rejected for [{transfer_type}] transfer");
        return ValidationResult::invalid(FieldError::account_number_length(
            ACCOUNT_NUMBER_MIN_LENGTH,
            ACCOUNT_NUMBER_MAX_LENGTH,
            length
        ));
    }

    if !sanitized.chars().all(|character| character.is_ascii_alphanumeric()) {
        return ValidationResult::invalid(FieldError::account_number_format());
    }

    ValidationResult::valid()
}

/// Validates the shape of a SWIFT/BIC code.
///
/// The field is optional: `None` or blank input is valid, whether it is required is up to the
/// caller. Present codes are trimmed and must be upper case.
pub fn validate_swift_code(swift_code: Option<&str>) -> ValidationResult {
    let Some(code) = swift_code.map(str::trim).filter(|code| !code.is_empty()) else {
        return ValidationResult::valid();
    };

    if !SWIFT_CODE_PATTERN.is_match(code) {
        return ValidationResult::invalid(FieldError::swift_code_format());
    }

    ValidationResult::valid()
}

/// Validates that an amount is a positive decimal no larger than [`max_transfer_amount`].
pub fn validate_amount(amount: &AmountInput) -> ValidationResult {
    if amount.is_blank() {
        return ValidationResult::invalid(FieldError::amount_unparseable());
    }

    let value = match amount.to_decimal() {
        Ok(value) => value,
        Err(AmountError::Overflow { negative: false }) => {
            return ValidationResult::invalid(FieldError::amount_exceeds_limit(max_transfer_amount()));
        }
        Err(AmountError::Overflow { negative: true }) => {
            return ValidationResult::invalid(FieldError::amount_not_positive());
        }
        Err(error) => {
            trace!("Amount [{amount}] could not be parsed: {error}");
            return ValidationResult::invalid(FieldError::amount_unparseable());
        }
    };

    if value.is_zero() || value.is_sign_negative() {
        return ValidationResult::invalid(FieldError::amount_not_positive());
    }

    if value > max_transfer_amount() {
        return ValidationResult::invalid(FieldError::amount_exceeds_limit(max_transfer_amount()));
    }

    ValidationResult::valid()
}

/// Returns a normalized copy of the instruction, leaving the original untouched.
///
/// Routing and account numbers lose all whitespace and the SWIFT code is trimmed, with a blank
/// code becoming `None`. Amount and country are passed through as given.
pub fn sanitize_instruction(instruction: &TransferInstruction) -> TransferInstruction {
    TransferInstruction {
        transfer_type: instruction.transfer_type,
        routing_number: strip_whitespace(&instruction.routing_number),
        account_number: strip_whitespace(&instruction.account_number),
        swift_code: instruction.swift_code.as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string),
        amount: instruction.amount.clone(),
        country: instruction.country.clone()
    }
}
