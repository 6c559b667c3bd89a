//! Coupon schedule construction.
//!
//! Schedules are generated forward from the issue date: each coupon date is
//! the issue date advanced by a whole number of coupon periods, anchored to
//! the issue's day of month so that short months never erode the cycle
//! (issue on the 31st keeps trying for the 31st, clamping only where the
//! month is shorter). When month-end anchoring is enabled every coupon date
//! additionally snaps to the end of its month.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use accrue_core::types::{CashFlow, Date};

use crate::error::{BondError, BondResult};
use crate::types::{InstrumentTerms, Period};

/// Hard cap on generated periods. Instruments requiring more are rejected.
pub const MAX_PERIODS: u32 = 600;

/// A generated coupon schedule with its cash flows.
#[derive(Debug, Clone)]
pub struct BondSchedule {
    /// Accrual periods, in date order
    pub periods: Vec<Period>,
    /// One cash flow per period end: coupon plus any redemption
    pub cashflows: Vec<CashFlow>,
    /// Coupon payment dates, in date order
    pub coupon_dates: Vec<Date>,
    /// Coupon amount of the first period
    pub first_coupon_amount: Decimal,
    /// Redemption amount paid at maturity
    pub redemption_amount: Decimal,
}

/// Builds the coupon schedule for an instrument.
///
/// Coupon amounts are `face * rate * accrual_factor`, rounded to 8 decimal
/// places; the redemption is added to the final period only. A degenerate
/// instrument that produces no stepped coupon dates gets a single period
/// spanning issue to maturity.
///
/// # Errors
///
/// Returns `BondError::ScheduleTooLong` when more than [`MAX_PERIODS`]
/// periods would be generated, or a date error if month stepping leaves the
/// supported calendar range.
pub fn build_schedule(terms: &InstrumentTerms) -> BondResult<BondSchedule> {
    let issue = terms.issue();
    let anchor_day = issue.day();
    let snap = |d: Date| {
        if terms.anchor_to_month_end() {
            d.end_of_month()
        } else {
            d
        }
    };
    let final_date = snap(terms.maturity());

    let mut coupon_dates: Vec<Date> = Vec::new();
    if final_date <= issue {
        // Issue and maturity collapse onto one date: a single period spans
        // the raw issue-to-maturity range.
        coupon_dates.push(terms.maturity());
    } else {
        let step = terms.frequency_months() as i32;
        let mut months = step;
        loop {
            if coupon_dates.len() as u32 >= MAX_PERIODS {
                return Err(BondError::schedule_too_long(MAX_PERIODS));
            }
            let candidate = snap(issue.add_months(months, Some(anchor_day))?);
            if candidate >= final_date {
                coupon_dates.push(final_date);
                break;
            }
            coupon_dates.push(candidate);
            months += step;
        }
    }

    let day_count = terms.day_count().to_day_count();
    let redemption = (terms.face() * terms.redemption_percent() / dec!(100)).round_dp(8);
    let last_index = coupon_dates.len() - 1;

    let mut periods = Vec::with_capacity(coupon_dates.len());
    let mut cashflows = Vec::with_capacity(coupon_dates.len());
    let mut start = issue;
    for (index, &end) in coupon_dates.iter().enumerate() {
        let accrual_factor = day_count.year_fraction(start, end);
        let coupon_amount = (terms.face() * terms.coupon_rate() * accrual_factor).round_dp(8);
        let redemption_amount = if index == last_index {
            redemption
        } else {
            Decimal::ZERO
        };
        let total_amount = coupon_amount + redemption_amount;

        periods.push(Period {
            start,
            end,
            accrual_factor,
            coupon_amount,
            redemption_amount,
            total_amount,
        });
        cashflows.push(CashFlow::new(end, total_amount));
        start = end;
    }

    debug!(
        "schedule for {}..{}: {} periods, final coupon date {}",
        issue,
        terms.maturity(),
        periods.len(),
        coupon_dates[last_index]
    );

    Ok(BondSchedule {
        first_coupon_amount: periods[0].coupon_amount,
        redemption_amount: redemption,
        periods,
        cashflows,
        coupon_dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms(issue: Date, maturity: Date) -> InstrumentTerms {
        InstrumentTerms::builder(issue, maturity)
            .with_coupon_rate(dec!(0.075))
            .with_frequency_months(6)
            .build()
            .unwrap()
    }

    #[test]
    fn test_semiannual_month_end_schedule() {
        let schedule = build_schedule(&terms(date(2020, 1, 15), date(2025, 1, 15))).unwrap();

        assert_eq!(schedule.periods.len(), 10);
        assert_eq!(schedule.coupon_dates[0], date(2020, 7, 31));
        assert_eq!(schedule.coupon_dates[1], date(2021, 1, 31));
        assert_eq!(*schedule.coupon_dates.last().unwrap(), date(2025, 1, 31));

        // Only the final period carries redemption
        for period in &schedule.periods[..9] {
            assert_eq!(period.redemption_amount, Decimal::ZERO);
        }
        assert_eq!(schedule.periods[9].redemption_amount, dec!(100));
        assert_eq!(schedule.redemption_amount, dec!(100));
    }

    #[test]
    fn test_periods_are_contiguous() {
        let schedule = build_schedule(&terms(date(2020, 1, 15), date(2025, 1, 15))).unwrap();

        assert_eq!(schedule.periods[0].start, date(2020, 1, 15));
        for pair in schedule.periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_day_of_month_anchoring_survives_short_months() {
        // Issue on the 31st, no month-end snapping: the cycle clamps through
        // short months but restores the 31st where the month allows it.
        let terms = InstrumentTerms::builder(date(2024, 1, 31), date(2025, 1, 31))
            .with_frequency_months(1)
            .with_anchor_to_month_end(false)
            .build()
            .unwrap();
        let schedule = build_schedule(&terms).unwrap();

        assert_eq!(schedule.coupon_dates[0], date(2024, 2, 29));
        assert_eq!(schedule.coupon_dates[1], date(2024, 3, 31));
        assert_eq!(schedule.coupon_dates[2], date(2024, 4, 30));
        assert_eq!(schedule.coupon_dates[3], date(2024, 5, 31));
    }

    #[test]
    fn test_month_end_snap() {
        let terms = InstrumentTerms::builder(date(2023, 2, 10), date(2024, 2, 10))
            .with_frequency_months(6)
            .build()
            .unwrap();
        let schedule = build_schedule(&terms).unwrap();

        assert_eq!(schedule.coupon_dates[0], date(2023, 8, 31));
        // Final date is the maturity's month end, in a leap February
        assert_eq!(schedule.coupon_dates[1], date(2024, 2, 29));
    }

    #[test]
    fn test_coupon_amount_uses_accrual_factor() {
        let schedule = build_schedule(&terms(date(2020, 1, 15), date(2025, 1, 15))).unwrap();

        // First period 2020-01-15 to 2020-07-31 is 198 days under ACT/365F
        let expected = (dec!(100) * dec!(0.075) * dec!(198) / dec!(365)).round_dp(8);
        assert_eq!(schedule.first_coupon_amount, expected);
        assert_eq!(schedule.periods[0].coupon_amount, expected);
    }

    #[test]
    fn test_cashflows_match_period_totals() {
        let schedule = build_schedule(&terms(date(2020, 1, 15), date(2025, 1, 15))).unwrap();

        assert_eq!(schedule.cashflows.len(), schedule.periods.len());
        for (cf, period) in schedule.cashflows.iter().zip(&schedule.periods) {
            assert_eq!(cf.date(), period.end);
            assert_eq!(cf.amount(), period.total_amount);
        }
    }

    #[test]
    fn test_schedule_too_long() {
        // Monthly coupons over 60 years: 720 periods, over the cap
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2080, 1, 15))
            .with_frequency_months(1)
            .build()
            .unwrap();

        let result = build_schedule(&terms);
        assert!(matches!(
            result,
            Err(BondError::ScheduleTooLong { cap: MAX_PERIODS })
        ));
    }

    #[test]
    fn test_long_schedule_under_cap() {
        // Monthly coupons over 40 years: 480 periods, under the cap
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2060, 1, 15))
            .with_frequency_months(1)
            .build()
            .unwrap();

        let schedule = build_schedule(&terms).unwrap();
        assert_eq!(schedule.periods.len(), 480);
    }

    #[test]
    fn test_sub_period_stub_gets_single_period() {
        // Maturity inside the first coupon period: one stub period only
        let terms = InstrumentTerms::builder(date(2024, 3, 10), date(2024, 5, 20))
            .with_coupon_rate(dec!(0.06))
            .with_frequency_months(6)
            .with_anchor_to_month_end(false)
            .build()
            .unwrap();
        let schedule = build_schedule(&terms).unwrap();

        assert_eq!(schedule.periods.len(), 1);
        assert_eq!(schedule.periods[0].start, date(2024, 3, 10));
        assert_eq!(schedule.periods[0].end, date(2024, 5, 20));
        assert!(schedule.periods[0].redemption_amount > Decimal::ZERO);
    }

    #[test]
    fn test_zero_coupon_schedule() {
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
            .with_coupon_rate(Decimal::ZERO)
            .build()
            .unwrap();
        let schedule = build_schedule(&terms).unwrap();

        for period in &schedule.periods {
            assert_eq!(period.coupon_amount, Decimal::ZERO);
        }
        assert_eq!(
            schedule.cashflows.last().unwrap().amount(),
            schedule.redemption_amount
        );
    }
}
