mod amount;
mod errors;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

pub use amount::AmountInput;
pub use errors::{AmountError, TransferTypeError};

/// Classification of a money-movement instruction, governing which field rules apply.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    Domestic,
    International
}

impl Display for TransferType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransferType::Domestic => write!(formatter, "domestic"),
            TransferType::International => write!(formatter, "international")
        }
    }
}

impl FromStr for TransferType {
    type Err = TransferTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "domestic" => Ok(TransferType::Domestic),
            "international" => Ok(TransferType::International),
            _ => Err(TransferTypeError(value.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for TransferType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TransferType::from_str(&value).map_err(de::Error::custom)
    }
}
