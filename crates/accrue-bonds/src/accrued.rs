//! Accrued interest.

use rust_decimal::Decimal;

use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::Date;

/// Finds the coupon period boundaries adjacent to a settlement date.
///
/// `boundaries` must be sorted ascending; for a full schedule it is the issue
/// date followed by every coupon date. Returns the latest boundary on or
/// before settlement and the earliest boundary strictly after it. Either side
/// can be `None` when settlement falls outside the boundary range.
#[must_use]
pub fn adjacent_coupons(boundaries: &[Date], settlement: Date) -> (Option<Date>, Option<Date>) {
    let last = boundaries.iter().rev().find(|d| **d <= settlement).copied();
    let next = boundaries.iter().find(|d| **d > settlement).copied();
    (last, next)
}

/// Accrued interest at settlement, prorating the period coupon by elapsed
/// accrual.
///
/// The proration is `coupon * elapsed / full` where both year fractions use
/// the same day count over the bounding coupon dates. Zero when either bound
/// is absent, when settlement sits exactly on a coupon date, or when the full
/// period has no accrual. Rounded to 8 decimal places.
#[must_use]
pub fn accrued_interest(
    day_count: DayCountConvention,
    last_coupon: Option<Date>,
    settlement: Date,
    next_coupon: Option<Date>,
    coupon_amount: Decimal,
) -> Decimal {
    let (Some(last), Some(next)) = (last_coupon, next_coupon) else {
        return Decimal::ZERO;
    };

    let dc = day_count.to_day_count();
    let full = dc.year_fraction(last, next);
    let elapsed = dc.year_fraction(last, settlement);
    if full <= Decimal::ZERO || elapsed <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    (coupon_amount * elapsed / full).round_dp(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_adjacent_coupons() {
        let boundaries = vec![
            date(2024, 1, 15),
            date(2024, 7, 31),
            date(2025, 1, 31),
            date(2025, 7, 31),
        ];

        let (last, next) = adjacent_coupons(&boundaries, date(2024, 10, 1));
        assert_eq!(last, Some(date(2024, 7, 31)));
        assert_eq!(next, Some(date(2025, 1, 31)));

        // On a boundary: that boundary is "last", not "next"
        let (last, next) = adjacent_coupons(&boundaries, date(2025, 1, 31));
        assert_eq!(last, Some(date(2025, 1, 31)));
        assert_eq!(next, Some(date(2025, 7, 31)));

        // Before the first boundary
        let (last, next) = adjacent_coupons(&boundaries, date(2023, 6, 1));
        assert_eq!(last, None);
        assert_eq!(next, Some(date(2024, 1, 15)));

        // After the last boundary
        let (last, next) = adjacent_coupons(&boundaries, date(2026, 1, 1));
        assert_eq!(last, Some(date(2025, 7, 31)));
        assert_eq!(next, None);
    }

    #[test]
    fn test_mid_period_proration() {
        // Half way through 2025-01-31..2025-07-31 by actual days
        let accrued = accrued_interest(
            DayCountConvention::Act365Fixed,
            Some(date(2025, 1, 31)),
            date(2025, 5, 1),
            Some(date(2025, 7, 31)),
            dec!(3.75),
        );
        // 90 of 181 days
        let expected = (dec!(3.75) * dec!(90) / dec!(181)).round_dp(8);
        assert_eq!(accrued, expected);
    }

    #[test]
    fn test_zero_on_coupon_date() {
        // Settlement exactly on a coupon date accrues nothing
        let accrued = accrued_interest(
            DayCountConvention::Act365Fixed,
            Some(date(2025, 1, 31)),
            date(2025, 1, 31),
            Some(date(2025, 7, 31)),
            dec!(3.75),
        );
        assert_eq!(accrued, Decimal::ZERO);
    }

    #[test]
    fn test_full_period_accrues_whole_coupon() {
        // One day before payment accrues nearly the whole coupon
        let accrued = accrued_interest(
            DayCountConvention::Act365Fixed,
            Some(date(2025, 1, 31)),
            date(2025, 7, 30),
            Some(date(2025, 7, 31)),
            dec!(3.75),
        );
        let expected = (dec!(3.75) * dec!(180) / dec!(181)).round_dp(8);
        assert_eq!(accrued, expected);
    }

    #[test]
    fn test_zero_when_bounds_absent() {
        let accrued = accrued_interest(
            DayCountConvention::Act365Fixed,
            None,
            date(2025, 5, 1),
            Some(date(2025, 7, 31)),
            dec!(3.75),
        );
        assert_eq!(accrued, Decimal::ZERO);

        let accrued = accrued_interest(
            DayCountConvention::Act365Fixed,
            Some(date(2025, 1, 31)),
            date(2025, 5, 1),
            None,
            dec!(3.75),
        );
        assert_eq!(accrued, Decimal::ZERO);
    }

    #[test]
    fn test_thirty360_proration() {
        // 30/360-US: Jan 31 adjusts to 30, so Jan 31..Jul 31 is 180 days
        let accrued = accrued_interest(
            DayCountConvention::Thirty360US,
            Some(date(2025, 1, 31)),
            date(2025, 4, 30),
            Some(date(2025, 7, 31)),
            dec!(3.75),
        );
        let expected = (dec!(3.75) * dec!(90) / dec!(180)).round_dp(8);
        assert_eq!(accrued, expected);
    }
}
