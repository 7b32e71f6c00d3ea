// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BookingRequest, DvcContract};

/// Validates that a contract's basic field constraints are met.
///
/// This function checks that required fields are not empty. It does NOT
/// check uniqueness within a portfolio (that requires context).
///
/// # Arguments
///
/// * `contract` - The contract to validate
///
/// # Returns
///
/// * `Ok(())` if the contract's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The contract id is empty
/// - The home resort name is empty
pub fn validate_contract_fields(contract: &DvcContract) -> Result<(), DomainError> {
    // Rule: contract id must not be empty
    if contract.contract_id.value().is_empty() {
        return Err(DomainError::InvalidContractId(String::from(
            "Contract id cannot be empty",
        )));
    }

    // Rule: home resort must not be empty
    if contract.home_resort.name().is_empty() {
        return Err(DomainError::InvalidResort(String::from(
            "Home resort cannot be empty",
        )));
    }

    // Point buckets are u32, so negative buckets cannot be constructed.
    // Use year validity is enforced at parse time via UseYear::parse().

    Ok(())
}

/// Validates that a booking request is well-formed.
///
/// Malformed requests are programming errors on the caller's side, not
/// booking rejections, so they surface as `DomainError` rather than a
/// negative validation result.
///
/// # Arguments
///
/// * `request` - The request to validate
///
/// # Returns
///
/// * `Ok(())` if the request is well-formed
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - `points_required` is zero
/// - The requested resort name is empty
pub fn validate_booking_request(request: &BookingRequest) -> Result<(), DomainError> {
    // Rule: a reservation must consume at least one point
    if request.points_required == 0 {
        return Err(DomainError::InvalidPointsRequired { points: 0 });
    }

    // Rule: requested resort must not be empty
    if request.resort.name().is_empty() {
        return Err(DomainError::InvalidResort(String::from(
            "Requested resort cannot be empty",
        )));
    }

    Ok(())
}
