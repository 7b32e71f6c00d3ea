// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use wdw_planner_domain::{ContractId, DomainError};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{State, TransitionResult};

/// Validates that a contract exists in the portfolio.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `state` - The portfolio to check
/// * `contract_id` - The contract to validate
///
/// # Returns
///
/// * `Ok(())` if the contract exists
/// * `Err(DomainError::ContractNotFound)` if it does not
///
/// # Errors
///
/// Returns an error if the contract has not been registered.
pub fn validate_contract_exists(
    state: &State,
    contract_id: &ContractId,
) -> Result<(), DomainError> {
    if !state.has_contract(contract_id) {
        return Err(DomainError::ContractNotFound {
            contract_id: contract_id.value().to_owned(),
        });
    }
    Ok(())
}
