//! Field-level validation for transfer instructions.
//!
//! Every validator is a pure function returning a [`crate::models::ValidationResult`]; nothing here raises,
//! logs above `trace` or mutates its input, so results can be recomputed on every keystroke.

mod report;
#[cfg(test)]
mod tests;
mod validators;

pub use report::{validate_instruction, InstructionReport};
pub use validators::{
    max_transfer_amount, sanitize_instruction, strip_whitespace, validate_account_number, validate_amount,
    validate_routing_number, validate_swift_code, ACCOUNT_NUMBER_MAX_LENGTH, ACCOUNT_NUMBER_MIN_LENGTH,
    ROUTING_NUMBER_LENGTH,
};
