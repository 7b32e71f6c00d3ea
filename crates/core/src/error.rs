// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wdw_planner_domain::{DomainError, ValidationResult};

/// Errors that can occur during portfolio transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A booking request failed validation.
    ///
    /// The rejected `ValidationResult` keeps its user-facing message and
    /// the balances it was judged against, so callers can surface it
    /// unchanged.
    BookingRejected(ValidationResult),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::BookingRejected(result) => write!(f, "Booking rejected: {}", result.message),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
