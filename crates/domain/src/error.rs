// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Contract identifier is empty or invalid.
    InvalidContractId(String),
    /// Resort name is empty or invalid.
    InvalidResort(String),
    /// Use year label is not a valid DVC use-year month.
    InvalidUseYear(String),
    /// Meal period label is not recognized.
    InvalidMealPeriod(String),
    /// Booking window label is not recognized.
    InvalidBookingWindow(String),
    /// A booking request must require a positive number of points.
    InvalidPointsRequired {
        /// The invalid points amount.
        points: u32,
    },
    /// The contract does not hold enough points for the deduction.
    InsufficientPoints {
        /// Points the deduction requires.
        required: u32,
        /// Points currently available on the contract.
        available: i64,
    },
    /// Contract does not exist in the owner's portfolio.
    ContractNotFound {
        /// The contract identifier.
        contract_id: String,
    },
    /// Contract already exists in the owner's portfolio.
    DuplicateContractId {
        /// The contract identifier.
        contract_id: String,
    },
    /// Timezone name could not be parsed.
    InvalidTimezone(String),
    /// Dining alert trigger could not be scheduled.
    InvalidAlertSchedule {
        /// Description of the scheduling error.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidContractId(msg) => write!(f, "Invalid contract id: {msg}"),
            Self::InvalidResort(msg) => write!(f, "Invalid resort: {msg}"),
            Self::InvalidUseYear(msg) => {
                write!(f, "Invalid use year: '{msg}' is not a DVC use-year month")
            }
            Self::InvalidMealPeriod(msg) => write!(f, "Invalid meal period: {msg}"),
            Self::InvalidBookingWindow(msg) => write!(f, "Invalid booking window: {msg}"),
            Self::InvalidPointsRequired { points } => {
                write!(
                    f,
                    "Invalid points amount: {points}. A booking must require at least 1 point"
                )
            }
            Self::InsufficientPoints {
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient points. Required: {required}, Available: {available}"
                )
            }
            Self::ContractNotFound { contract_id } => {
                write!(f, "DVC contract '{contract_id}' not found")
            }
            Self::DuplicateContractId { contract_id } => {
                write!(f, "DVC contract '{contract_id}' already exists")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::InvalidAlertSchedule { reason } => {
                write!(f, "Could not schedule dining alert: {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
