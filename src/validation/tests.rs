use super::{
    max_transfer_amount, sanitize_instruction, strip_whitespace, validate_account_number, validate_amount,
    validate_instruction, validate_routing_number, validate_swift_code,
};

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

use crate::models::{Field, FieldError, TransferInstruction, ValidationResult};
use crate::types::{AmountInput, TransferType};

fn amount(value: &str) -> AmountInput {
    AmountInput::from(value)
}

#[test]
fn test_domestic_routing_number_of_nine_digits_is_valid() {
    let result = validate_routing_number("123456789", TransferType::Domestic, "US");

    assert_eq!(result, ValidationResult::valid());
}

#[test]
fn test_short_routing_number_reports_entered_length() {
    let result = validate_routing_number("12345", TransferType::Domestic, "US");

    assert!(!result.is_valid());
    assert_eq!(result.message().as_deref(), Some("US routing number must be exactly 9 digits (you entered 5)"));
    assert!(matches!(result.error(), Some(FieldError::InvalidLength { actual: 5, .. })));
}

#[test]
fn test_routing_number_whitespace_is_stripped_before_checks() {
    assert!(validate_routing_number(" 123 456 789 ", TransferType::Domestic, "US").is_valid());
    assert!(validate_routing_number("123\t456\n789", TransferType::Domestic, "US").is_valid());
}

#[test]
fn test_missing_routing_number_fails_for_domestic_transfers() {
    for input in ["", "   "] {
        let result = validate_routing_number(input, TransferType::Domestic, "US");

        assert!(matches!(result.error(), Some(FieldError::MissingField { field: Field::RoutingNumber, .. })));
        assert_eq!(result.message().as_deref(), Some("Routing number is required"));
    }
}

#[test]
fn test_routing_number_with_non_digits_fails_format_check() {
    for input in ["12345678A", "1234-5678", "١٢٣٤٥٦٧٨٩"] {
        let result = validate_routing_number(input, TransferType::Domestic, "US");

        assert!(
            matches!(result.error(), Some(FieldError::InvalidFormat { .. })),
            "input {input:?} should fail the digit check, got {result:?}"
        );
    }
}

#[test]
fn test_routing_length_is_checked_before_format() {
    let result = validate_routing_number("12a", TransferType::Domestic, "US");

    assert!(matches!(result.error(), Some(FieldError::InvalidLength { actual: 3, .. })));
}

#[test]
fn test_international_routing_number_is_not_checked() {
    for input in ["", "12345", "not a routing number"] {
        assert!(validate_routing_number(input, TransferType::International, "DE").is_valid());
    }
}

#[test]
fn test_account_number_is_sanitized_before_validation() {
    assert_eq!(strip_whitespace("AB12 34CD"), "AB1234CD");
    assert!(validate_account_number("AB12 34CD", TransferType::Domestic).is_valid());
}

#[test]
fn test_account_number_length_bounds_are_inclusive() {
    let cases = vec![
        ("1234567", false),
        ("12345678", true),
        ("12345678901234567", true),
        ("123456789012345678", false),
    ];

    for (input, expected) in cases {
        let result = validate_account_number(input, TransferType::Domestic);

        assert_eq!(result.is_valid(), expected, "input {input:?}");

        if !expected {
            assert!(matches!(result.error(), Some(FieldError::InvalidLength { .. })));
        }
    }
}

#[test]
fn test_account_number_length_message_reports_sanitized_length() {
    let result = validate_account_number("12 34", TransferType::International);

    assert_eq!(
        result.message().as_deref(),
        Some("Account number must be between 8 and 17 characters (you entered 4)")
    );
}

#[test]
fn test_account_number_rejects_symbols() {
    for input in ["1234-5678", "ACCT#12345", "12345678é"] {
        let result = validate_account_number(input, TransferType::Domestic);

        assert!(matches!(result.error(), Some(FieldError::InvalidFormat { field: Field::AccountNumber, .. })), "input {input:?}");
    }
}

#[test]
fn test_missing_account_number_fails_for_every_transfer_type() {
    for transfer_type in [TransferType::Domestic, TransferType::International] {
        let result = validate_account_number(" ", transfer_type);

        assert_eq!(result.message().as_deref(), Some("Account number is required"));
    }
}

#[test]
fn test_swift_codes_of_eight_or_eleven_characters_are_valid() {
    for input in ["CHASUS33", "DEUTDEFF500", "  BOFAUS3N  ", "NWBKGB2L"] {
        assert!(validate_swift_code(Some(input)).is_valid(), "input {input:?}");
    }
}

#[test]
fn test_absent_swift_code_is_valid() {
    assert!(validate_swift_code(None).is_valid());
    assert!(validate_swift_code(Some("")).is_valid());
    assert!(validate_swift_code(Some("   ")).is_valid());
}

#[test]
fn test_malformed_swift_codes_are_rejected() {
    for input in ["bad-code", "chasus33", "CHASUS3", "CHASUS3312", "CHAS1S33", "1HASUS33", "CHASUS33XXXX"] {
        let result = validate_swift_code(Some(input));

        assert_eq!(result.message().as_deref(), Some("Invalid SWIFT code format (e.g., CHASUS33)"), "input {input:?}");
    }
}

#[test]
fn test_amount_above_limit_is_rejected() {
    let result = validate_amount(&amount("1000000000"));

    assert_eq!(result.message().as_deref(), Some("Amount exceeds maximum transfer limit"));
    assert!(matches!(result.error(), Some(FieldError::ExceedsLimit { .. })));
}

#[test]
fn test_amount_limit_is_inclusive() {
    assert!(validate_amount(&amount("999999999.99")).is_valid());
    assert!(validate_amount(&AmountInput::Decimal(max_transfer_amount())).is_valid());
    assert!(!validate_amount(&amount("999999999.991")).is_valid());
}

#[test]
fn test_zero_and_negative_amounts_are_rejected() {
    for input in ["0", "0.00", "-0", "-5", "-123456789012345678901234567890"] {
        let result = validate_amount(&amount(input));

        assert_eq!(result.message().as_deref(), Some("Amount must be greater than 0"), "input {input:?}");
    }
}

#[test]
fn test_unparseable_amounts_are_rejected() {
    for input in ["", "  ", "abc", "12abc", "1,000.00"] {
        let result = validate_amount(&amount(input));

        assert!(matches!(result.error(), Some(FieldError::InvalidAmount { .. })));
        assert_eq!(result.message().as_deref(), Some("Please enter a valid amount"), "input {input:?}");
    }

    assert!(!validate_amount(&AmountInput::Float(f64::NAN)).is_valid());
}

#[test]
fn test_huge_positive_amounts_exceed_the_limit() {
    assert!(matches!(
        validate_amount(&amount("123456789012345678901234567890")).error(),
        Some(FieldError::ExceedsLimit { .. })
    ));
    assert!(matches!(validate_amount(&AmountInput::Float(1e300)).error(), Some(FieldError::ExceedsLimit { .. })));
}

#[test]
fn test_amount_precision_beyond_decimal_scale_keeps_sign_and_limit() {
    assert!(validate_amount(&amount("0.0000000000000000001")).is_valid());
    assert!(validate_amount(&amount("0.00000000000000000000000000000001")).is_valid());
    assert!(validate_amount(&AmountInput::Float(1e-20)).is_valid());

    for input in ["1000000000.0000000000000000000001", "999999999.99000000000000000000001"] {
        assert!(
            matches!(validate_amount(&amount(input)).error(), Some(FieldError::ExceedsLimit { .. })),
            "input {input:?} should exceed the limit"
        );
    }

    assert_eq!(
        validate_amount(&amount("-0.00000000000000000000000000000001")).message().as_deref(),
        Some("Amount must be greater than 0")
    );
}

#[test]
fn test_blank_amount_is_rejected_before_parsing() {
    for input in [AmountInput::default(), amount(" \t ")] {
        assert_eq!(validate_amount(&input).message().as_deref(), Some("Please enter a valid amount"));
    }
}

#[test]
fn test_amounts_accept_strings_and_numbers() {
    assert!(validate_amount(&amount("0.01")).is_valid());
    assert!(validate_amount(&AmountInput::Integer(500)).is_valid());
    assert!(validate_amount(&AmountInput::Float(999_999_999.99)).is_valid());
    assert!(!validate_amount(&AmountInput::Float(1_000_000_000.0)).is_valid());
}

#[test]
fn test_validators_are_idempotent() {
    let inputs = ["123456789", "12345", "", "AB12 34CD", "bad-code"];

    for input in inputs {
        assert_eq!(
            validate_routing_number(input, TransferType::Domestic, "US"),
            validate_routing_number(input, TransferType::Domestic, "US")
        );
        assert_eq!(
            validate_account_number(input, TransferType::Domestic),
            validate_account_number(input, TransferType::Domestic)
        );
        assert_eq!(validate_swift_code(Some(input)), validate_swift_code(Some(input)));
        assert_eq!(validate_amount(&amount(input)), validate_amount(&amount(input)));
    }
}

#[test]
fn test_instruction_report_aggregates_every_field() {
    let instruction = TransferInstruction::domestic("12345", "AB12 34CD", "0");
    let report = validate_instruction(&instruction);

    assert!(!report.is_valid());
    assert!(report.account_number.is_valid());
    assert!(report.swift_code.is_valid());

    let failed: Vec<Field> = report.errors().map(FieldError::field).collect();

    assert_eq!(failed, vec![Field::RoutingNumber, Field::Amount]);
}

#[test]
fn test_valid_international_instruction_passes() {
    let instruction = TransferInstruction::international("DEUTDEFF500", "DE89370400440532013", "2500.00", "DE");
    let report = validate_instruction(&instruction);

    // 19 characters is too long for an account number even when the rest is valid
    assert!(!report.is_valid());
    assert_eq!(report.errors().count(), 1);

    let instruction = TransferInstruction::international("DEUTDEFF500", "0532013000", "2500.00", "DE");

    assert!(validate_instruction(&instruction).is_valid());
}

#[test]
fn test_instruction_report_serializes_per_field() -> Result<()> {
    let instruction = TransferInstruction::domestic("123456789", "12345678", "1000000000");
    let value = serde_json::to_value(validate_instruction(&instruction))?;

    assert_eq!(value, json!({
        "routing_number": { "valid": true, "error": null },
        "account_number": { "valid": true, "error": null },
        "swift_code": { "valid": true, "error": null },
        "amount": { "valid": false, "error": "Amount exceeds maximum transfer limit" }
    }));

    Ok(())
}

#[test]
fn test_sanitize_returns_normalized_copy_without_mutating_input() -> Result<()> {
    let mut instruction = TransferInstruction::domestic(" 123 456 789 ", "AB12 34CD", " 10.50 ");
    instruction.swift_code = Some("  CHASUS33 ".to_string());
    let original = instruction.clone();

    let sanitized = sanitize_instruction(&instruction);

    assert_eq!(instruction, original);
    assert_eq!(sanitized.routing_number, "123456789");
    assert_eq!(sanitized.account_number, "AB1234CD");
    assert_eq!(sanitized.swift_code.as_deref(), Some("CHASUS33"));
    assert_eq!(sanitized.amount.to_decimal()?, Decimal::from_str("10.50")?);
    assert_eq!(validate_instruction(&sanitized), validate_instruction(&instruction));

    Ok(())
}

#[test]
fn test_sanitize_drops_blank_swift_code() {
    let mut instruction = TransferInstruction::domestic("123456789", "12345678", "1");
    instruction.swift_code = Some("   ".to_string());

    assert_eq!(sanitize_instruction(&instruction).swift_code, None);
}
