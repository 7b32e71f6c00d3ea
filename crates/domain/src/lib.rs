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

mod booking_window;
mod dining_alert;
mod error;
mod points_ledger;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_window::{
    ANY_RESORT_WINDOW_DAYS, HOME_RESORT_WINDOW_DAYS, ValidationResult, WindowClassification,
    classify_window, validate_booking,
};
pub use dining_alert::{DINING_ALERT_LEAD_DAYS, DiningAlert, schedule_dining_alert};
pub use points_ledger::{
    PointsSufficiency, available_points, deduct_points, deduct_points_checked,
    validate_sufficiency,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    BookingRequest, BookingWindow, ContractId, DvcBooking, DvcContract, MealPeriod, Resort,
    UseYear,
};
pub use validation::{validate_booking_request, validate_contract_fields};
