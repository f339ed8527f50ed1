// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;

#[test]
fn test_parse_accepts_plain_integers() {
    assert_eq!(parse_commit_count("5").unwrap(), 5);
    assert_eq!(parse_commit_count("1").unwrap(), 1);
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_commit_count("  7 \n").unwrap(), 7);
}

#[test]
fn test_parse_accepts_leading_plus_sign() {
    assert_eq!(parse_commit_count("+3").unwrap(), 3);
}

#[test]
fn test_parse_rejects_non_numeric_input() {
    let error = parse_commit_count("abc").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"invalid input 'abc': expected an integer");
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(matches!(
        parse_commit_count(""),
        Err(InputError::NotANumber { .. })
    ));
    assert!(matches!(
        parse_commit_count("   \n"),
        Err(InputError::NotANumber { .. })
    ));
}

#[test]
fn test_parse_rejects_floats() {
    assert!(matches!(
        parse_commit_count("5.0"),
        Err(InputError::NotANumber { .. })
    ));
}

#[test]
fn test_parse_rejects_zero() {
    let error = parse_commit_count("0").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"number of commits must be positive, got 0");
}

#[test]
fn test_parse_rejects_negative_numbers() {
    let error = parse_commit_count("-3").unwrap_err();
    assert!(matches!(error, InputError::NotPositive { value: -3 }));
}

#[test]
fn test_validate_accepts_full_u32_range() {
    assert_eq!(validate_commit_count(1).unwrap(), 1);
    assert_eq!(
        validate_commit_count(i64::from(u32::MAX)).unwrap(),
        u32::MAX
    );
}

#[test]
fn test_validate_rejects_counts_beyond_u32() {
    let error = validate_commit_count(i64::from(u32::MAX) + 1).unwrap_err();
    assert!(matches!(error, InputError::OutOfRange { .. }));
    insta::assert_snapshot!(
        error.to_string(),
        @"number of commits 4294967296 is too large (max 4294967295)"
    );
}

#[test]
fn test_validate_rejects_extreme_negatives() {
    assert!(matches!(
        validate_commit_count(i64::MIN),
        Err(InputError::NotPositive { .. })
    ));
}
