use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

//NOTE: Any 28 digit value fits the 96-bit mantissa. Longer integer parts are reported as overflow since they
//      are far past any transfer limit.
const MAX_INTEGER_DIGITS: usize = 10;
const MAX_DIGITS: usize = 28;

/// An amount as it arrives at the boundary, before it is normalized into a [`Decimal`].
///
/// Form fields hand over text while JSON clients may send a number, so both shapes are
/// accepted and converted the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Text(String),
    Integer(i64),
    Float(f64),
    Decimal(Decimal)
}

impl AmountInput {
    /// Normalizes the input into a single decimal representation.
    ///
    /// Floats go through their shortest round-trip text so that `0.1` becomes exactly `0.1`
    /// rather than the nearest binary fraction.
    ///
    /// # Errors
    /// Returns `AmountError` if:
    /// - The text is empty or whitespace only.
    /// - The text is not a plain signed decimal (no separators, symbols or exponents).
    /// - The float is NaN or infinite.
    /// - The integer part is too large to represent.
    ///
    /// Fractions longer than the representable precision are cut, and when the cut drops nonzero
    /// digits the value moves one unit in the last place away from zero. A tiny positive amount
    /// therefore stays positive and anything just past a two-decimal limit stays past it.
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        match self {
            AmountInput::Text(text) => parse_decimal_text(text),
            AmountInput::Integer(value) => Ok(Decimal::from(*value)),
            AmountInput::Float(value) => {
                if !value.is_finite() {
                    return Err(AmountError::NotFinite);
                }

                parse_decimal_text(&value.to_string())
            }
            AmountInput::Decimal(value) => Ok(*value)
        }
    }

    /// True for text that is empty once trimmed, the shape of an untouched form field.
    pub fn is_blank(&self) -> bool {
        matches!(self, AmountInput::Text(text) if text.trim().is_empty())
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        AmountInput::Text(String::new())
    }
}

impl Display for AmountInput {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Text(text) => write!(formatter, "{text}"),
            AmountInput::Integer(value) => write!(formatter, "{value}"),
            AmountInput::Float(value) => write!(formatter, "{value}"),
            AmountInput::Decimal(value) => write!(formatter, "{value}")
        }
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Integer(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Float(value)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Decimal(value)
    }
}

fn parse_decimal_text(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value))
    };

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::InvalidFormat("Value has no digits".to_string()));
    }

    if !integer.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat("Value has an invalid integer part".to_string()));
    }

    if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat("Value has an invalid fraction part".to_string()));
    }

    let integer = integer.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');

    if integer.len() > MAX_INTEGER_DIGITS {
        return Err(AmountError::Overflow { negative });
    }

    let scale = fraction.len().min(MAX_DIGITS - integer.len());
    let (kept, dropped) = fraction.split_at(scale);
    let truncated = dropped.bytes().any(|byte| byte != b'0');

    let canonical = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if integer.is_empty() { "0" } else { integer },
        if kept.is_empty() { "0" } else { kept }
    );

    let value = Decimal::from_str(&canonical).map_err(|error| AmountError::InvalidFormat(error.to_string()))?;

    if !truncated {
        return Ok(value);
    }

    let mut last_place = Decimal::new(1, scale as u32);
    last_place.set_sign_negative(negative);

    value.checked_add(last_place).ok_or(AmountError::Overflow { negative })
}

struct AmountInputVisitor;

impl<'de> Visitor<'de> for AmountInputVisitor {
    type Value = AmountInput;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("an amount as a string or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(AmountInput::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(AmountInput::Text(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(AmountInput::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(AmountInput::Decimal(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(AmountInput::Float(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AmountInput::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AmountInput::default())
    }
}

impl<'de> Deserialize<'de> for AmountInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountInputVisitor)
    }
}
