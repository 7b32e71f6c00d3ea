// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wdw_planner_audit::{AuditEvent, StateSnapshot};
use wdw_planner_domain::{ContractId, DvcBooking, DvcContract};

/// One owner's DVC portfolio: their contracts and confirmed bookings.
///
/// State is scoped to a single owner. The hosting application persists it
/// under the owner's user record; concurrent deductions against one
/// contract are serialized by the persistence layer's transaction, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The owner this portfolio belongs to.
    pub user_id: String,
    /// The owner's DVC contracts.
    pub contracts: Vec<DvcContract>,
    /// Confirmed bookings funded by those contracts.
    pub bookings: Vec<DvcBooking>,
}

impl State {
    /// Creates a new empty portfolio for an owner.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owner identifier
    #[must_use]
    pub const fn new(user_id: String) -> Self {
        Self {
            user_id,
            contracts: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// Checks if a contract exists in the portfolio.
    #[must_use]
    pub fn has_contract(&self, contract_id: &ContractId) -> bool {
        self.contracts
            .iter()
            .any(|contract| &contract.contract_id == contract_id)
    }

    /// Finds a contract by id.
    #[must_use]
    pub fn find_contract(&self, contract_id: &ContractId) -> Option<&DvcContract> {
        self.contracts
            .iter()
            .find(|contract| &contract.contract_id == contract_id)
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "user={},contracts_count={},bookings_count={}",
            self.user_id,
            self.contracts.len(),
            self.bookings.len()
        ))
    }
}

/// The result of a successful portfolio transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
