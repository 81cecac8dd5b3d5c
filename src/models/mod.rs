mod errors;
mod instruction;
mod result;

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

pub use errors::FieldError;
pub use instruction::{InstructionRecord, TransferInstruction};
pub use result::ValidationResult;

/// The instruction fields that carry their own validation verdict.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RoutingNumber,
    AccountNumber,
    SwiftCode,
    Amount
}

impl Field {
    pub const ALL: [Field; 4] = [Field::RoutingNumber, Field::AccountNumber, Field::SwiftCode, Field::Amount];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::RoutingNumber => "routing_number",
            Field::AccountNumber => "account_number",
            Field::SwiftCode => "swift_code",
            Field::Amount => "amount"
        }
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
