// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dining alert trigger calculation.
//!
//! Disney dining reservations open 60 days before the meal date, so the
//! planner reminds users early that morning. This module computes the
//! trigger instant for one planned meal:
//!
//! - 60 days before the meal date
//! - at 06:00 wall-clock time in the trip's planning timezone
//! - stored as a UTC timestamp (RFC 3339)
//!
//! Only meals with a restaurant assigned get an alert; the scheduled
//! dispatcher that fires the notification is a separate collaborator.

use crate::error::DomainError;
use crate::types::MealPeriod;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Days before the meal date at which the alert fires.
pub const DINING_ALERT_LEAD_DAYS: u64 = 60;

/// Wall-clock hour (in the planning timezone) at which the alert fires.
const ALERT_HOUR: u32 = 6;

/// A calculated dining alert for one planned meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningAlert {
    /// The meal period the alert reminds about.
    pub meal_period: MealPeriod,
    /// The restaurant the reminder names.
    pub restaurant_name: String,
    /// Trigger datetime (UTC, RFC 3339).
    pub trigger_datetime: String,
}

/// Computes the dining alert trigger for a planned meal.
///
/// # Arguments
///
/// * `meal_date` - The date of the planned meal
/// * `meal_period` - Which meal the alert is for
/// * `restaurant_name` - The assigned restaurant
/// * `timezone` - The trip's planning timezone (IANA name)
///
/// # Returns
///
/// A `DiningAlert` whose trigger is 60 days before the meal at 06:00 in
/// the planning timezone, converted to UTC.
///
/// # Errors
///
/// Returns an error if:
/// - No restaurant is assigned (empty name)
/// - The timezone name is invalid
/// - Subtracting the lead time underflows the calendar
/// - The local trigger time is ambiguous or non-existent due to DST
pub fn schedule_dining_alert(
    meal_date: NaiveDate,
    meal_period: MealPeriod,
    restaurant_name: &str,
    timezone: &str,
) -> Result<DiningAlert, DomainError> {
    // Only meals with a restaurant assigned are alertable.
    if restaurant_name.trim().is_empty() {
        return Err(DomainError::InvalidAlertSchedule {
            reason: String::from("No restaurant assigned to the meal"),
        });
    }

    // Parse timezone
    let tz: Tz = timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_owned()))?;

    let trigger_date: NaiveDate = meal_date
        .checked_sub_days(Days::new(DINING_ALERT_LEAD_DAYS))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("subtracting {DINING_ALERT_LEAD_DAYS} days from {meal_date}"),
        })?;

    let trigger_time: NaiveTime =
        NaiveTime::from_hms_opt(ALERT_HOUR, 0, 0).ok_or_else(|| {
            DomainError::InvalidAlertSchedule {
                reason: format!("Invalid alert time of day: {ALERT_HOUR}:00"),
            }
        })?;

    // Construct wall-clock datetime in the planning timezone
    let naive_trigger: NaiveDateTime = trigger_date.and_time(trigger_time);

    let trigger_local = tz.from_local_datetime(&naive_trigger).single().ok_or_else(|| {
        DomainError::InvalidAlertSchedule {
            reason: format!(
                "Could not resolve timezone for date {trigger_date} at time {trigger_time} (ambiguous or non-existent due to DST)"
            ),
        }
    })?;

    // Convert to UTC and format as RFC 3339
    let trigger_utc: String = trigger_local.with_timezone(&chrono::Utc).to_rfc3339();

    Ok(DiningAlert {
        meal_period,
        restaurant_name: restaurant_name.to_owned(),
        trigger_datetime: trigger_utc,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_is_60_days_before_meal() {
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let alert: DiningAlert = schedule_dining_alert(
            meal_date,
            MealPeriod::Dinner,
            "Topolino's Terrace",
            "America/New_York",
        )
        .unwrap();

        // 60 days before June 1 is April 2; 06:00 EDT is 10:00 UTC.
        assert_eq!(alert.trigger_datetime, "2026-04-02T10:00:00+00:00");
        assert_eq!(alert.meal_period, MealPeriod::Dinner);
        assert_eq!(alert.restaurant_name, "Topolino's Terrace");
    }

    #[test]
    fn test_trigger_converts_standard_time_offset() {
        // A winter trigger date falls in EST (UTC-5), not EDT.
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let alert: DiningAlert = schedule_dining_alert(
            meal_date,
            MealPeriod::Breakfast,
            "Chef Mickey's",
            "America/New_York",
        )
        .unwrap();

        assert_eq!(alert.trigger_datetime, "2025-12-31T11:00:00+00:00");
    }

    #[test]
    fn test_trigger_crosses_year_boundary() {
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2027, 1, 15).unwrap();

        let alert: DiningAlert = schedule_dining_alert(
            meal_date,
            MealPeriod::Lunch,
            "Sci-Fi Dine-In",
            "America/New_York",
        )
        .unwrap();

        assert!(alert.trigger_datetime.starts_with("2026-11-16"));
    }

    #[test]
    fn test_invalid_timezone_is_rejected() {
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let result: Result<DiningAlert, DomainError> = schedule_dining_alert(
            meal_date,
            MealPeriod::Dinner,
            "Topolino's Terrace",
            "Invalid/Timezone",
        );

        assert_eq!(
            result,
            Err(DomainError::InvalidTimezone(String::from(
                "Invalid/Timezone"
            )))
        );
    }

    #[test]
    fn test_meal_without_restaurant_is_rejected() {
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let result: Result<DiningAlert, DomainError> =
            schedule_dining_alert(meal_date, MealPeriod::Dinner, "  ", "America/New_York");

        assert!(matches!(
            result,
            Err(DomainError::InvalidAlertSchedule { .. })
        ));
    }

    #[test]
    fn test_other_planning_timezone_is_honored() {
        let meal_date: NaiveDate = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let alert: DiningAlert = schedule_dining_alert(
            meal_date,
            MealPeriod::Dinner,
            "Topolino's Terrace",
            "America/Los_Angeles",
        )
        .unwrap();

        // 06:00 PDT is 13:00 UTC.
        assert_eq!(alert.trigger_datetime, "2026-04-02T13:00:00+00:00");
    }
}
