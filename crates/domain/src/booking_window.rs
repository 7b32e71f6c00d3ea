// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking window classification and reservation validation.
//!
//! DVC opens reservations a fixed lead time before check-in: contract
//! holders may book their home resort 11 months out, and any DVC resort
//! 7 months out. The months are approximated as fixed day counts
//! (11 months ~ 330 days, 7 months ~ 210 days), so the classification is
//! precise to the day.
//!
//! ## Invariants
//!
//! - "Within" a window means check-in is close enough that the window has
//!   opened: a smaller day count is more imminent
//! - Validation is pure: the evaluation date is an explicit argument,
//!   never read from an ambient clock
//! - Rule rejections are returned as data (`ValidationResult`), never as
//!   errors; only malformed input produces a `DomainError`

use crate::error::DomainError;
use crate::points_ledger::available_points;
use crate::types::{BookingRequest, BookingWindow, DvcContract};
use crate::validation::validate_booking_request;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days before check-in at which the home-resort window opens (~11 months).
pub const HOME_RESORT_WINDOW_DAYS: i64 = 330;

/// Days before check-in at which the shared window opens (~7 months).
pub const ANY_RESORT_WINDOW_DAYS: i64 = 210;

/// Classification of a check-in date against the booking windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClassification {
    /// Whole days from the evaluation date to check-in. Negative when
    /// check-in is in the past.
    pub days_until_check_in: i64,
    /// Whether the 11-month home-resort window has opened.
    pub is_within_11_months: bool,
    /// Whether the 7-month shared window has opened.
    pub is_within_7_months: bool,
}

/// Outcome of a booking validation.
///
/// One of four outcomes: insufficient points, window not open, wrong
/// resort for the open window, or valid. Transient; exists only for the
/// duration of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the booking is currently permitted.
    pub valid: bool,
    /// Human-readable reason, surfaced directly by the hosting UI.
    pub message: String,
    /// Points the request requires, when the points check ran to a verdict.
    pub points_required: Option<u32>,
    /// Points available on the contract, when the points check ran.
    pub points_available: Option<i64>,
    /// The window that admitted the request, on a valid result.
    pub booking_window: Option<BookingWindow>,
    /// The date the relevant window opens, on a timing rejection.
    pub booking_window_opens_on: Option<NaiveDate>,
}

/// Classifies a check-in date against the 11-month and 7-month windows.
///
/// # Arguments
///
/// * `check_in_date` - The check-in date of the stay
/// * `today` - The evaluation date
///
/// # Window semantics
///
/// A window is open once the day count to check-in has shrunk to the
/// window size or less. A check-in 330 days out is within the 11-month
/// window; 331 days out is not. Past check-in dates classify as within
/// both windows and are left to the caller to reject.
#[must_use]
pub fn classify_window(check_in_date: NaiveDate, today: NaiveDate) -> WindowClassification {
    let days_until_check_in: i64 = (check_in_date - today).num_days();

    WindowClassification {
        days_until_check_in,
        is_within_11_months: days_until_check_in <= HOME_RESORT_WINDOW_DAYS,
        is_within_7_months: days_until_check_in <= ANY_RESORT_WINDOW_DAYS,
    }
}

/// Validates a booking request against a contract.
///
/// Checks run in a fixed order: point sufficiency first (cheap and
/// date-independent), then window eligibility. Home-resort requests need
/// the 11-month window open; any other resort needs the 7-month window.
///
/// # Arguments
///
/// * `contract` - The funding contract
/// * `request` - The booking request
/// * `today` - The evaluation date
///
/// # Returns
///
/// A `ValidationResult`; callers branch on `.valid`. A rules rejection is
/// a negative result, not an error.
///
/// # Errors
///
/// Returns an error only for malformed input:
/// - `points_required` is zero
/// - the requested resort name is empty
/// - date arithmetic overflows computing the window open date
pub fn validate_booking(
    contract: &DvcContract,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<ValidationResult, DomainError> {
    validate_booking_request(request)?;

    // Points first: date-independent and the majority rejection path.
    let available: i64 = available_points(contract);
    if i64::from(request.points_required) > available {
        return Ok(ValidationResult {
            valid: false,
            message: format!(
                "Insufficient points. Required: {}, Available: {available}",
                request.points_required
            ),
            points_required: Some(request.points_required),
            points_available: Some(available),
            booking_window: None,
            booking_window_opens_on: None,
        });
    }

    let classification: WindowClassification = classify_window(request.check_in_date, today);
    let is_home_resort: bool = request.resort == contract.home_resort;

    if is_home_resort {
        if !classification.is_within_11_months {
            let opens_on: NaiveDate = window_open_date(
                today,
                classification.days_until_check_in,
                HOME_RESORT_WINDOW_DAYS,
            )?;
            return Ok(ValidationResult {
                valid: false,
                message: String::from("Booking window not open yet"),
                points_required: None,
                points_available: None,
                booking_window: None,
                booking_window_opens_on: Some(opens_on),
            });
        }
    } else if !classification.is_within_7_months {
        let opens_on: NaiveDate = window_open_date(
            today,
            classification.days_until_check_in,
            ANY_RESORT_WINDOW_DAYS,
        )?;

        // Inside the exclusive 11-month period only the home resort may be
        // booked; outside it the window simply has not opened.
        let message: String = if classification.is_within_11_months {
            String::from("Can only book home resort 11 months in advance")
        } else {
            String::from("Booking window not open yet")
        };

        return Ok(ValidationResult {
            valid: false,
            message,
            points_required: None,
            points_available: None,
            booking_window: None,
            booking_window_opens_on: Some(opens_on),
        });
    }

    let booking_window: BookingWindow = if is_home_resort {
        BookingWindow::ElevenMonth
    } else {
        BookingWindow::SevenMonth
    };

    Ok(ValidationResult {
        valid: true,
        message: String::from("Booking is valid"),
        points_required: Some(request.points_required),
        points_available: Some(available),
        booking_window: Some(booking_window),
        booking_window_opens_on: None,
    })
}

/// Computes the date a booking window opens: the evaluation date plus
/// however many days remain until the day count shrinks to the window.
fn window_open_date(
    today: NaiveDate,
    days_until_check_in: i64,
    window_days: i64,
) -> Result<NaiveDate, DomainError> {
    let offset: i64 = days_until_check_in - window_days;
    today
        .checked_add_signed(Duration::days(offset))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing window open date {offset} days from {today}"),
        })
}
