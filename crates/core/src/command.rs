// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wdw_planner_domain::{BookingRequest, ContractId, DvcContract};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request changes to a DVC portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new DVC contract in the owner's portfolio.
    RegisterContract {
        /// The contract to register.
        contract: DvcContract,
    },
    /// Remove a contract from the owner's portfolio.
    ///
    /// Referential integrity against bookings that reference the contract
    /// is enforced by the persistence layer, not here.
    RemoveContract {
        /// The contract to remove.
        contract_id: ContractId,
    },
    /// Attach a DVC booking to a trip, deducting points on success.
    ///
    /// The request is validated against the funding contract (point
    /// sufficiency and booking window) before any points move.
    AttachDvcBooking {
        /// The trip the booking is attached to.
        trip_id: String,
        /// The contract funding the booking.
        contract_id: ContractId,
        /// The booking request to validate and commit.
        request: BookingRequest,
    },
}
