use serde::Serialize;
use tracing::trace;

use crate::models::{Field, FieldError, TransferInstruction, ValidationResult};
use crate::validation::validators::{
    validate_account_number, validate_amount, validate_routing_number, validate_swift_code,
};

/// The aggregated verdicts for a whole instruction, one per field.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct InstructionReport {
    pub routing_number: ValidationResult,
    pub account_number: ValidationResult,
    pub swift_code: ValidationResult,
    pub amount: ValidationResult
}

impl InstructionReport {
    /// True only when every field passed.
    pub fn is_valid(&self) -> bool {
        self.results().all(|(_, result)| result.is_valid())
    }

    pub fn get(&self, field: Field) -> &ValidationResult {
        match field {
            Field::RoutingNumber => &self.routing_number,
            Field::AccountNumber => &self.account_number,
            Field::SwiftCode => &self.swift_code,
            Field::Amount => &self.amount
        }
    }

    /// Every field with its result, in [`Field::ALL`] order.
    pub fn results(&self) -> impl Iterator<Item = (Field, &ValidationResult)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// The failures only, in [`Field::ALL`] order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.results().filter_map(|(_, result)| result.error())
    }
}

/// Runs all four field validators against an instruction.
///
/// Which fields are mandatory for a transfer type beyond these rules (a SWIFT code on a given
/// international corridor, say) stays the caller's decision.
pub fn validate_instruction(instruction: &TransferInstruction) -> InstructionReport {
    let report = InstructionReport {
        routing_number: validate_routing_number(&instruction.routing_number, instruction.transfer_type, &instruction.country),
        account_number: validate_account_number(&instruction.account_number, instruction.transfer_type),
        swift_code: validate_swift_code(instruction.swift_code.as_deref()),
        amount: validate_amount(&instruction.amount)
    };

    trace!("Validated [{}] instruction: {} error(s)", instruction.transfer_type, report.errors().count());

    report
}
