// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_insufficient_points_display_names_both_amounts() {
    let error: DomainError = DomainError::InsufficientPoints {
        required: 120,
        available: 85,
    };

    assert_eq!(
        error.to_string(),
        "Insufficient points. Required: 120, Available: 85"
    );
}

#[test]
fn test_insufficient_points_display_handles_negative_balance() {
    let error: DomainError = DomainError::InsufficientPoints {
        required: 10,
        available: -40,
    };

    assert_eq!(
        error.to_string(),
        "Insufficient points. Required: 10, Available: -40"
    );
}

#[test]
fn test_contract_not_found_display_names_the_contract() {
    let error: DomainError = DomainError::ContractNotFound {
        contract_id: String::from("riviera-001"),
    };

    assert_eq!(error.to_string(), "DVC contract 'riviera-001' not found");
}

#[test]
fn test_duplicate_contract_display_names_the_contract() {
    let error: DomainError = DomainError::DuplicateContractId {
        contract_id: String::from("riviera-001"),
    };

    assert_eq!(
        error.to_string(),
        "DVC contract 'riviera-001' already exists"
    );
}

#[test]
fn test_invalid_use_year_display_names_the_label() {
    let error: DomainError = DomainError::InvalidUseYear(String::from("Jul"));

    assert_eq!(
        error.to_string(),
        "Invalid use year: 'Jul' is not a DVC use-year month"
    );
}

#[test]
fn test_invalid_points_required_display() {
    let error: DomainError = DomainError::InvalidPointsRequired { points: 0 };

    assert_eq!(
        error.to_string(),
        "Invalid points amount: 0. A booking must require at least 1 point"
    );
}

#[test]
fn test_invalid_timezone_display() {
    let error: DomainError = DomainError::InvalidTimezone(String::from("Mars/Olympus_Mons"));

    assert_eq!(error.to_string(), "Invalid timezone: Mars/Olympus_Mons");
}

#[test]
fn test_errors_are_comparable() {
    let error1: DomainError = DomainError::InvalidResort(String::from("empty"));
    let error2: DomainError = DomainError::InvalidResort(String::from("empty"));

    assert_eq!(error1, error2);
}
