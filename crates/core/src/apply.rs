// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use chrono::NaiveDate;
use wdw_planner_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use wdw_planner_domain::{
    BookingWindow, DomainError, DvcBooking, DvcContract, ValidationResult, deduct_points,
    validate_booking, validate_contract_fields,
};

/// Applies a command to the current portfolio, producing a new state and
/// audit event.
///
/// The evaluation date is an explicit argument so that booking-window
/// decisions are deterministic and reproducible; no ambient clock is read
/// anywhere in this crate.
///
/// # Arguments
///
/// * `state` - The current portfolio state (immutable)
/// * `command` - The command to apply
/// * `today` - The evaluation date for booking-window decisions
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules
/// - The referenced contract does not exist
/// - A booking request fails points or window validation
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    command: Command,
    today: NaiveDate,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RegisterContract { contract } => {
            // Validate contract field constraints
            validate_contract_fields(&contract)?;

            // Check for duplicate within the portfolio
            if state.has_contract(&contract.contract_id) {
                return Err(CoreError::DomainViolation(
                    DomainError::DuplicateContractId {
                        contract_id: contract.contract_id.value().to_owned(),
                    },
                ));
            }

            // Capture state before transition
            let before: StateSnapshot = state.to_snapshot();

            // Create new state with the contract added
            let mut new_contracts: Vec<DvcContract> = state.contracts.clone();
            new_contracts.push(contract.clone());
            let new_state: State = State {
                user_id: state.user_id.clone(),
                contracts: new_contracts,
                bookings: state.bookings.clone(),
            };

            // Capture state after transition
            let after: StateSnapshot = new_state.to_snapshot();

            // Create audit event
            let action: Action = Action::new(
                String::from("RegisterContract"),
                Some(format!(
                    "Registered contract '{}' at {} ({} annual points)",
                    contract.contract_id.value(),
                    contract.home_resort.name(),
                    contract.annual_points
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                contract.contract_id.clone(),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
            })
        }
        Command::RemoveContract { contract_id } => {
            // The contract must exist to be removed
            if !state.has_contract(&contract_id) {
                return Err(CoreError::DomainViolation(DomainError::ContractNotFound {
                    contract_id: contract_id.value().to_owned(),
                }));
            }

            let before: StateSnapshot = state.to_snapshot();

            // Create new state without the contract
            let new_contracts: Vec<DvcContract> = state
                .contracts
                .iter()
                .filter(|contract| contract.contract_id != contract_id)
                .cloned()
                .collect();
            let new_state: State = State {
                user_id: state.user_id.clone(),
                contracts: new_contracts,
                bookings: state.bookings.clone(),
            };

            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("RemoveContract"),
                Some(format!("Removed contract '{}'", contract_id.value())),
            );
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, contract_id);

            Ok(TransitionResult {
                new_state,
                audit_event,
            })
        }
        Command::AttachDvcBooking {
            trip_id,
            contract_id,
            request,
        } => {
            // Resolve the funding contract
            let contract: &DvcContract = state.find_contract(&contract_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::ContractNotFound {
                    contract_id: contract_id.value().to_owned(),
                })
            })?;

            // Validate points and booking window before any points move
            let validation: ValidationResult = validate_booking(contract, &request, today)?;
            if !validation.valid {
                return Err(CoreError::BookingRejected(validation));
            }

            let booking_window: BookingWindow = if request.resort == contract.home_resort {
                BookingWindow::ElevenMonth
            } else {
                BookingWindow::SevenMonth
            };

            let before: StateSnapshot = state.to_snapshot();

            // Commit the deduction. Sufficiency was just validated, so the
            // raw deduction cannot borrow here.
            let updated_contract: DvcContract = deduct_points(contract, request.points_required);

            let new_contracts: Vec<DvcContract> = state
                .contracts
                .iter()
                .map(|existing| {
                    if existing.contract_id == contract_id {
                        updated_contract.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();

            let mut new_bookings: Vec<DvcBooking> = state.bookings.clone();
            new_bookings.push(DvcBooking::new(
                contract_id.clone(),
                request.points_required,
                booking_window,
                request.check_in_date,
            ));

            let new_state: State = State {
                user_id: state.user_id.clone(),
                contracts: new_contracts,
                bookings: new_bookings,
            };

            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("AttachDvcBooking"),
                Some(format!(
                    "Attached booking to trip '{trip_id}': {} points at {} ({})",
                    request.points_required,
                    request.resort.name(),
                    booking_window.as_str()
                )),
            );
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, contract_id);

            Ok(TransitionResult {
                new_state,
                audit_event,
            })
        }
    }
}
