//! Business day rolling.
//!
//! The engine recognizes weekends (Saturday/Sunday) as the only non-business
//! days; there is no holiday calendar. Rolling maps a non-business day to an
//! adjacent business day according to a [`BusinessDayRoll`] convention and is
//! applied only at settlement determination, never to generated coupon dates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Business day roll conventions.
///
/// These conventions specify how to adjust a date that falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayRoll {
    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,
}

impl BusinessDayRoll {
    /// Returns the wire name of the convention.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            BusinessDayRoll::Following => "FOLLOWING",
            BusinessDayRoll::Preceding => "PRECEDING",
            BusinessDayRoll::ModifiedFollowing => "MODIFIED-FOLLOWING",
        }
    }
}

impl std::fmt::Display for BusinessDayRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayRoll {
    type Err = CoreError;

    /// Parses a roll convention from its wire name, case-insensitively.
    /// Unknown names fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FOLLOWING" => Ok(BusinessDayRoll::Following),
            "PRECEDING" => Ok(BusinessDayRoll::Preceding),
            "MODIFIED-FOLLOWING" | "MODIFIED FOLLOWING" | "MODIFIEDFOLLOWING" | "MODFOLLOWING" => {
                Ok(BusinessDayRoll::ModifiedFollowing)
            }
            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

/// Rolls a date to a business day according to the given convention.
///
/// A date that is already a business day is returned unchanged.
#[must_use]
pub fn roll_business_day(date: Date, roll: BusinessDayRoll) -> Date {
    if date.is_weekday() {
        return date;
    }

    match roll {
        BusinessDayRoll::Following => following(date),
        BusinessDayRoll::Preceding => preceding(date),
        BusinessDayRoll::ModifiedFollowing => {
            let adjusted = following(date);
            if adjusted.month() != date.month() {
                // Crossed the month boundary, go preceding instead
                preceding(date)
            } else {
                adjusted
            }
        }
    }
}

/// Returns the next business day on or after the given date.
fn following(mut date: Date) -> Date {
    while date.is_weekend() {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
fn preceding(mut date: Date) -> Date {
    while date.is_weekend() {
        date = date.add_days(-1);
    }
    date
}
