// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a DVC contract identifier.
///
/// Contract ids are opaque and unique within an owner's portfolio.
/// The hosting application assigns them; this crate only carries them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId {
    /// The identifier value.
    value: String,
}

impl ContractId {
    /// Creates a new `ContractId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a DVC resort by name.
///
/// The hosting application supplies canonical resort names, so equality is
/// an exact name match. Home-resort priority is decided by comparing the
/// requested resort against the contract's home resort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resort {
    /// The resort name (e.g., "Riviera Resort").
    name: String,
}

impl Resort {
    /// Creates a new `Resort`.
    ///
    /// # Arguments
    ///
    /// * `name` - The resort name
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
        }
    }

    /// Returns the resort name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Resort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a contract's use year: the month in which its annual point
/// allocation renews.
///
/// DVC sells contracts in eight fixed use-year months. The use year is
/// informational for this crate; booking validation never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseYear {
    /// February use year.
    #[serde(rename = "Feb")]
    February,
    /// March use year.
    #[serde(rename = "Mar")]
    March,
    /// April use year.
    #[serde(rename = "Apr")]
    April,
    /// June use year.
    #[serde(rename = "Jun")]
    June,
    /// August use year.
    #[serde(rename = "Aug")]
    August,
    /// September use year.
    #[serde(rename = "Sep")]
    September,
    /// October use year.
    #[serde(rename = "Oct")]
    October,
    /// December use year.
    #[serde(rename = "Dec")]
    December,
}

impl UseYear {
    /// Parses a use year from its month abbreviation.
    ///
    /// # Arguments
    ///
    /// * `s` - The month abbreviation (e.g., "Feb")
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of the eight DVC
    /// use-year months.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Feb" => Ok(Self::February),
            "Mar" => Ok(Self::March),
            "Apr" => Ok(Self::April),
            "Jun" => Ok(Self::June),
            "Aug" => Ok(Self::August),
            "Sep" => Ok(Self::September),
            "Oct" => Ok(Self::October),
            "Dec" => Ok(Self::December),
            _ => Err(DomainError::InvalidUseYear(s.to_owned())),
        }
    }

    /// Returns the month abbreviation for this use year.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::June => "Jun",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::December => "Dec",
        }
    }
}

impl FromStr for UseYear {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UseYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a DVC contract and its point buckets.
///
/// The three buckets are the only ground truth for the contract's balance:
/// - `banked_points` are carried over from the prior use year (consumed first)
/// - `annual_points` are the current use year's allocation
/// - `borrowed_points` are drawn early from the next use year (a debt)
///
/// The available balance is always derived from the buckets and never
/// persisted, so the stored record cannot drift from the derived value.
/// Unsigned bucket types make negative buckets unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DvcContract {
    /// The contract identifier (unique within an owner's portfolio).
    pub contract_id: ContractId,
    /// The resort granting this contract 11-month booking priority.
    pub home_resort: Resort,
    /// The contract's use year (informational).
    pub use_year: UseYear,
    /// The current use year's point allocation.
    pub annual_points: u32,
    /// Points banked from the prior use year.
    pub banked_points: u32,
    /// Points borrowed from the next use year.
    pub borrowed_points: u32,
}

impl DvcContract {
    /// Creates a new `DvcContract`.
    ///
    /// A freshly purchased contract has its full annual allocation and no
    /// banked or borrowed points; pass the bucket values explicitly when
    /// rehydrating a stored contract.
    ///
    /// # Arguments
    ///
    /// * `contract_id` - The contract identifier
    /// * `home_resort` - The home resort
    /// * `use_year` - The use year
    /// * `annual_points` - Current use year allocation
    /// * `banked_points` - Points banked from the prior use year
    /// * `borrowed_points` - Points borrowed from the next use year
    #[must_use]
    pub const fn new(
        contract_id: ContractId,
        home_resort: Resort,
        use_year: UseYear,
        annual_points: u32,
        banked_points: u32,
        borrowed_points: u32,
    ) -> Self {
        Self {
            contract_id,
            home_resort,
            use_year,
            annual_points,
            banked_points,
            borrowed_points,
        }
    }
}

/// Represents which booking window admitted (or would admit) a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingWindow {
    /// The 11-month home-resort priority window.
    #[serde(rename = "11_month")]
    ElevenMonth,
    /// The 7-month window shared by all DVC resorts.
    #[serde(rename = "7_month")]
    SevenMonth,
}

impl BookingWindow {
    /// Parses a booking window from its wire label.
    ///
    /// # Arguments
    ///
    /// * `s` - The label ("11_month" or "7_month")
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "11_month" => Ok(Self::ElevenMonth),
            "7_month" => Ok(Self::SevenMonth),
            _ => Err(DomainError::InvalidBookingWindow(s.to_owned())),
        }
    }

    /// Returns the wire label for this booking window.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ElevenMonth => "11_month",
            Self::SevenMonth => "7_month",
        }
    }
}

impl FromStr for BookingWindow {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BookingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a booking request under evaluation.
///
/// Requests are transient: one exists only for the duration of a single
/// validation call and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Points the reservation consumes. Must be positive.
    pub points_required: u32,
    /// The check-in date of the stay.
    pub check_in_date: NaiveDate,
    /// The resort being booked (may differ from the contract's home resort).
    pub resort: Resort,
}

impl BookingRequest {
    /// Creates a new `BookingRequest`.
    ///
    /// # Arguments
    ///
    /// * `points_required` - Points the reservation consumes
    /// * `check_in_date` - The check-in date
    /// * `resort` - The resort being booked
    #[must_use]
    pub const fn new(points_required: u32, check_in_date: NaiveDate, resort: Resort) -> Self {
        Self {
            points_required,
            check_in_date,
            resort,
        }
    }
}

/// Represents a confirmed DVC booking attached to a trip.
///
/// A booking records which contract funded it and which window admitted it.
/// Bookings are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DvcBooking {
    /// The contract the points were deducted from.
    pub contract_id: ContractId,
    /// Points consumed by this booking.
    pub points_used: u32,
    /// The window that admitted the booking.
    pub booking_window: BookingWindow,
    /// The check-in date of the stay.
    pub check_in_date: NaiveDate,
}

impl DvcBooking {
    /// Creates a new `DvcBooking`.
    ///
    /// # Arguments
    ///
    /// * `contract_id` - The funding contract
    /// * `points_used` - Points consumed
    /// * `booking_window` - The window that admitted the booking
    /// * `check_in_date` - The check-in date
    #[must_use]
    pub const fn new(
        contract_id: ContractId,
        points_used: u32,
        booking_window: BookingWindow,
        check_in_date: NaiveDate,
    ) -> Self {
        Self {
            contract_id,
            points_used,
            booking_window,
            check_in_date,
        }
    }
}

/// Represents a meal period within a planned trip day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealPeriod {
    /// Breakfast.
    #[serde(rename = "breakfast")]
    Breakfast,
    /// Lunch.
    #[serde(rename = "lunch")]
    Lunch,
    /// Dinner.
    #[serde(rename = "dinner")]
    Dinner,
}

impl MealPeriod {
    /// Parses a meal period from its wire label.
    ///
    /// # Arguments
    ///
    /// * `s` - The label ("breakfast", "lunch", or "dinner")
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(DomainError::InvalidMealPeriod(s.to_owned())),
        }
    }

    /// Returns the wire label for this meal period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl FromStr for MealPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
