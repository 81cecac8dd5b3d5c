use serde::Deserialize;

use crate::types::{AmountInput, TransferType};

fn default_country() -> String {
    "US".to_string()
}

/// A proposed money-movement instruction as collected from a form or API payload.
///
/// Nothing here is sanitized; see [`crate::validation::sanitize_instruction`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferInstruction {
    /// Governs which rules apply to the routing number.
    pub transfer_type: TransferType,
    /// Required for domestic transfers.
    #[serde(default)]
    pub routing_number: String,
    #[serde(default)]
    pub account_number: String,
    /// Only some international paths need it, the caller decides when it is mandatory.
    #[serde(default)]
    pub swift_code: Option<String>,
    #[serde(default)]
    pub amount: AmountInput,
    /// Reserved for country-specific rule selection.
    #[serde(default = "default_country")]
    pub country: String
}

impl TransferInstruction {
    pub fn domestic(routing_number: &str, account_number: &str, amount: impl Into<AmountInput>) -> Self {
        Self {
            transfer_type: TransferType::Domestic,
            routing_number: routing_number.to_string(),
            account_number: account_number.to_string(),
            swift_code: None,
            amount: amount.into(),
            country: default_country()
        }
    }

    pub fn international(swift_code: &str, account_number: &str, amount: impl Into<AmountInput>, country: &str) -> Self {
        Self {
            transfer_type: TransferType::International,
            routing_number: String::new(),
            account_number: account_number.to_string(),
            swift_code: Some(swift_code.to_string()),
            amount: amount.into(),
            country: country.to_string()
        }
    }
}

/// Represents a single row from an input CSV file.
///
/// Every cell stays text so the amount reaches the validator exactly as typed. Empty SWIFT
/// and country cells fall back to "absent" and the default country respectively.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructionRecord {
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
    #[serde(rename = "routing", default)]
    pub routing_number: String,
    #[serde(rename = "account", default)]
    pub account_number: String,
    #[serde(rename = "swift", default)]
    pub swift_code: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub country: String
}

impl From<InstructionRecord> for TransferInstruction {
    fn from(record: InstructionRecord) -> Self {
        Self {
            transfer_type: record.transfer_type,
            routing_number: record.routing_number,
            account_number: record.account_number,
            swift_code: Some(record.swift_code).filter(|code| !code.trim().is_empty()),
            amount: AmountInput::Text(record.amount),
            country: Some(record.country).filter(|country| !country.trim().is_empty()).unwrap_or_else(default_country)
        }
    }
}
