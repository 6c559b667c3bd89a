//! 30/360 US (bond basis) day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30/360 US (Bond Basis) day count convention.
///
/// Assumes 30-day months and a 360-day year, with the US day adjustments:
///
/// 1. If the start day is 31, treat it as 30.
/// 2. If the end day is 31 and the (possibly adjusted) start day is >= 30,
///    treat the end day as 30.
///
/// # Formula
///
/// $$\text{Days} = 360 \cdot \Delta Y + 30 \cdot \Delta M + \Delta D$$
///
/// The year fraction floors at zero when `end <= start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl Thirty360US {
    /// Applies the US day adjustments and returns (d1, d2).
    fn adjusted_days(start: Date, end: Date) -> (i64, i64) {
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        (d1, d2)
    }
}

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360-US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if end <= start {
            return Decimal::ZERO;
        }
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (d1, d2) = Self::adjusted_days(start, end);
        let dy = i64::from(end.year() - start.year());
        let dm = i64::from(end.month()) - i64::from(start.month());

        360 * dy + 30 * dm + (d2 - d1)
    }
}
