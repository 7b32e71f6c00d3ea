// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! DVC points ledger.
//!
//! This module is the single source of truth for a contract's available
//! balance and for committing point deductions.
//!
//! ## Invariants
//!
//! - The available balance is always recomputed from the three buckets,
//!   never read from storage
//! - Deduction consumes banked points first, then annual points, and
//!   borrows any remainder from the next use year
//! - For every deduction of `n` points, the bucket deltas sum to exactly `n`

use crate::error::DomainError;
use crate::types::DvcContract;
use serde::{Deserialize, Serialize};

/// Result of a points sufficiency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsSufficiency {
    /// Whether the contract holds at least the required points.
    pub sufficient: bool,
    /// Points currently available on the contract.
    pub available: i64,
}

/// Computes a contract's available point balance.
///
/// The balance is `annual_points + banked_points - borrowed_points`.
/// Borrowed points are a debt against the next use year, so they reduce
/// what is usable now.
///
/// The result is negative only when borrowing has outrun the other two
/// buckets, which raw deduction permits (see [`deduct_points`]).
#[must_use]
pub fn available_points(contract: &DvcContract) -> i64 {
    i64::from(contract.annual_points) + i64::from(contract.banked_points)
        - i64::from(contract.borrowed_points)
}

/// Checks whether a contract can cover a required point amount.
///
/// Pure predicate; the contract is not modified.
///
/// # Arguments
///
/// * `contract` - The contract to check
/// * `points_required` - Points the caller intends to deduct
#[must_use]
pub fn validate_sufficiency(contract: &DvcContract, points_required: u32) -> PointsSufficiency {
    let available: i64 = available_points(contract);
    PointsSufficiency {
        sufficient: i64::from(points_required) <= available,
        available,
    }
}

/// Deducts points from a contract using the fixed consumption order.
///
/// Consumption order:
/// 1. Banked points, down to zero
/// 2. Annual points, down to zero
/// 3. Any remainder is borrowed from the next use year
///
/// This is a total function: it never fails and never re-checks
/// sufficiency, so a deduction larger than the available balance grows
/// `borrowed_points` without bound. Callers that want insufficient
/// deductions blocked must use [`deduct_points_checked`] or run
/// [`validate_sufficiency`] first.
///
/// # Arguments
///
/// * `contract` - The contract to deduct from
/// * `points_to_deduct` - Points to consume
#[must_use]
pub fn deduct_points(contract: &DvcContract, points_to_deduct: u32) -> DvcContract {
    let mut remaining: u32 = points_to_deduct;

    let banked_taken: u32 = contract.banked_points.min(remaining);
    remaining -= banked_taken;

    let annual_taken: u32 = contract.annual_points.min(remaining);
    remaining -= annual_taken;

    // Remainder becomes debt against the next use year. May be zero.
    DvcContract {
        contract_id: contract.contract_id.clone(),
        home_resort: contract.home_resort.clone(),
        use_year: contract.use_year,
        annual_points: contract.annual_points - annual_taken,
        banked_points: contract.banked_points - banked_taken,
        borrowed_points: contract.borrowed_points.saturating_add(remaining),
    }
}

/// Deducts points from a contract, rejecting insufficient deductions.
///
/// Identical to [`deduct_points`] except that the deduction is refused
/// when the contract's available balance cannot cover it, leaving the
/// contract untouched.
///
/// # Arguments
///
/// * `contract` - The contract to deduct from
/// * `points_to_deduct` - Points to consume
///
/// # Errors
///
/// Returns `DomainError::InsufficientPoints` if `points_to_deduct`
/// exceeds the available balance.
pub fn deduct_points_checked(
    contract: &DvcContract,
    points_to_deduct: u32,
) -> Result<DvcContract, DomainError> {
    let sufficiency: PointsSufficiency = validate_sufficiency(contract, points_to_deduct);
    if !sufficiency.sufficient {
        return Err(DomainError::InsufficientPoints {
            required: points_to_deduct,
            available: sufficiency.available,
        });
    }
    Ok(deduct_points(contract, points_to_deduct))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ContractId, Resort, UseYear};

    fn make_contract(annual: u32, banked: u32, borrowed: u32) -> DvcContract {
        DvcContract::new(
            ContractId::new("riviera-001"),
            Resort::new("Riviera Resort"),
            UseYear::February,
            annual,
            banked,
            borrowed,
        )
    }

    #[test]
    fn test_available_points_sums_buckets() {
        let contract: DvcContract = make_contract(150, 40, 25);

        assert_eq!(available_points(&contract), 165);
    }

    #[test]
    fn test_available_points_is_stable_across_calls() {
        let contract: DvcContract = make_contract(150, 40, 25);

        assert_eq!(available_points(&contract), available_points(&contract));
    }

    #[test]
    fn test_available_points_negative_when_borrowing_outruns_buckets() {
        let contract: DvcContract = make_contract(10, 0, 50);

        assert_eq!(available_points(&contract), -40);
    }

    #[test]
    fn test_sufficiency_boundary_exact_balance() {
        let contract: DvcContract = make_contract(100, 0, 0);

        assert!(validate_sufficiency(&contract, 100).sufficient);
        assert!(!validate_sufficiency(&contract, 101).sufficient);
    }

    #[test]
    fn test_sufficiency_reports_available_balance() {
        let contract: DvcContract = make_contract(100, 20, 30);

        let sufficiency: PointsSufficiency = validate_sufficiency(&contract, 50);

        assert!(sufficiency.sufficient);
        assert_eq!(sufficiency.available, 90);
    }

    #[test]
    fn test_deduct_draws_banked_first() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let updated: DvcContract = deduct_points(&contract, 5);

        assert_eq!(updated.banked_points, 5);
        assert_eq!(updated.annual_points, 20);
        assert_eq!(updated.borrowed_points, 0);
    }

    #[test]
    fn test_deduct_spills_into_annual() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let updated: DvcContract = deduct_points(&contract, 15);

        assert_eq!(updated.banked_points, 0);
        assert_eq!(updated.annual_points, 15);
        assert_eq!(updated.borrowed_points, 0);
    }

    #[test]
    fn test_deduct_borrows_the_remainder() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let updated: DvcContract = deduct_points(&contract, 35);

        assert_eq!(updated.banked_points, 0);
        assert_eq!(updated.annual_points, 0);
        assert_eq!(updated.borrowed_points, 5);
    }

    #[test]
    fn test_deduct_zero_is_identity() {
        let contract: DvcContract = make_contract(20, 10, 3);

        let updated: DvcContract = deduct_points(&contract, 0);

        assert_eq!(updated, contract);
    }

    #[test]
    fn test_deduct_exact_exhaustion() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let updated: DvcContract = deduct_points(&contract, 30);

        assert_eq!(updated.banked_points, 0);
        assert_eq!(updated.annual_points, 0);
        assert_eq!(updated.borrowed_points, 0);
        assert_eq!(available_points(&updated), 0);
    }

    #[test]
    fn test_deduct_conserves_points() {
        // Bucket deltas must sum to exactly the deducted amount.
        let contract: DvcContract = make_contract(17, 9, 4);

        for n in [0_u32, 1, 9, 10, 26, 27, 100] {
            let updated: DvcContract = deduct_points(&contract, n);

            let banked_delta: i64 =
                i64::from(contract.banked_points) - i64::from(updated.banked_points);
            let annual_delta: i64 =
                i64::from(contract.annual_points) - i64::from(updated.annual_points);
            let borrowed_delta: i64 =
                i64::from(updated.borrowed_points) - i64::from(contract.borrowed_points);

            assert_eq!(banked_delta + annual_delta + borrowed_delta, i64::from(n));
        }
    }

    #[test]
    fn test_deduct_reduces_available_by_amount() {
        let contract: DvcContract = make_contract(150, 30, 10);
        let before: i64 = available_points(&contract);

        let updated: DvcContract = deduct_points(&contract, 60);

        assert_eq!(available_points(&updated), before - 60);
    }

    #[test]
    fn test_deduct_accumulates_existing_debt() {
        let contract: DvcContract = make_contract(5, 0, 12);

        let updated: DvcContract = deduct_points(&contract, 8);

        assert_eq!(updated.annual_points, 0);
        assert_eq!(updated.borrowed_points, 15);
    }

    #[test]
    fn test_checked_deduct_accepts_exact_balance() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let updated: DvcContract = deduct_points_checked(&contract, 30).unwrap();

        assert_eq!(available_points(&updated), 0);
    }

    #[test]
    fn test_checked_deduct_rejects_insufficient_balance() {
        let contract: DvcContract = make_contract(20, 10, 0);

        let result: Result<DvcContract, DomainError> = deduct_points_checked(&contract, 31);

        assert_eq!(
            result,
            Err(DomainError::InsufficientPoints {
                required: 31,
                available: 30,
            })
        );
    }

    #[test]
    fn test_checked_deduct_matches_raw_deduct_when_sufficient() {
        let contract: DvcContract = make_contract(40, 15, 5);

        let checked: DvcContract = deduct_points_checked(&contract, 42).unwrap();
        let raw: DvcContract = deduct_points(&contract, 42);

        assert_eq!(checked, raw);
    }
}
