//! End-to-end valuation tests through the engine entry points.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use accrue_bonds::prelude::*;
use accrue_core::calendars::BusinessDayRoll;
use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::{CashFlow, Compounding, Date};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// 7.5% semi-annual bullet, 2020-01-15 to 2025-01-15, month-end coupons.
fn sample_terms() -> InstrumentTerms {
    InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
        .with_coupon_rate(dec!(0.075))
        .with_frequency_months(6)
        .build()
        .unwrap()
}

#[test]
fn five_year_bullet_mid_period_valuation() {
    let terms = sample_terms();
    let settlement = SettlementSpec::on(date(2022, 7, 15));

    let valuation = price_from_schedule(&terms, &settlement, 0.072).unwrap();

    // Coupon 7.5% against a 7.2% yield: a small premium over par, plus
    // most of a half-coupon of accrued interest.
    let clean = valuation.clean_price.to_f64().unwrap();
    let accrued = valuation.accrued.to_f64().unwrap();
    assert!((99.0..102.0).contains(&clean), "clean = {clean}");
    assert!((3.0..4.0).contains(&accrued), "accrued = {accrued}");
    assert_eq!(
        valuation.dirty_price,
        valuation.clean_price + valuation.accrued
    );

    // About two and a half years remain to maturity
    let macaulay = valuation.risk.macaulay_duration.to_f64().unwrap();
    assert!((2.0..2.5).contains(&macaulay), "macaulay = {macaulay}");
    assert!(valuation.risk.modified_duration < valuation.risk.macaulay_duration);
    assert!(valuation.risk.dv01 > Decimal::ZERO);
}

#[test]
fn price_yield_round_trip() {
    let terms = sample_terms();
    let settlement = SettlementSpec::on(date(2022, 7, 15));
    let yield_in = 0.072;

    let priced = price_from_schedule(&terms, &settlement, yield_in).unwrap();
    let target = priced.dirty_price.to_f64().unwrap();
    let solved = yield_from_schedule(&terms, &settlement, target).unwrap();

    assert_relative_eq!(solved.yield_value, yield_in, epsilon = 1e-6);
    assert!(solved.solver.unwrap().iterations < 100);
    assert_relative_eq!(
        solved.dirty_price.to_f64().unwrap(),
        target,
        epsilon = 1e-6
    );
}

#[test]
fn percent_and_fraction_quotes_agree() {
    let terms = sample_terms();
    let settlement = SettlementSpec::on(date(2022, 7, 15));

    let fraction = price_from_schedule(&terms, &settlement, 0.072).unwrap();
    let percent = price_from_schedule(&terms, &settlement, 7.2).unwrap();

    assert_eq!(fraction.dirty_price, percent.dirty_price);
}

#[test]
fn all_past_schedule_is_degenerate_zero() {
    let terms = sample_terms();
    let settlement = SettlementSpec::on(date(2030, 6, 2));

    let priced = price_from_schedule(&terms, &settlement, 0.05).unwrap();
    assert_eq!(priced.dirty_price, Decimal::ZERO);
    assert_eq!(priced.accrued, Decimal::ZERO);
    assert_eq!(priced.risk, RiskStats::zero());

    // The yield direction is equally well-defined: a trivial converged solve
    let solved = yield_from_schedule(&terms, &settlement, 100.0).unwrap();
    assert_eq!(solved.yield_value, 0.0);
    let diag = solved.solver.unwrap();
    assert_eq!(diag.iterations, 0);
    assert_eq!(solved.dirty_price, Decimal::ZERO);
}

#[test]
fn weekend_settlement_rolls_before_valuation() {
    let terms = sample_terms();
    // 2022-07-16 is a Saturday
    let saturday = SettlementSpec::on(date(2022, 7, 16));

    let valuation = price_from_schedule(&terms, &saturday, 0.072).unwrap();
    assert_eq!(valuation.settlement, date(2022, 7, 18));

    let monday = SettlementSpec::on(date(2022, 7, 18));
    let direct = price_from_schedule(&terms, &monday, 0.072).unwrap();
    assert_eq!(valuation.dirty_price, direct.dirty_price);
}

#[test]
fn explicit_cashflow_round_trip() {
    let flows = vec![
        CashFlow::new(date(2026, 1, 31), dec!(4)),
        CashFlow::new(date(2026, 7, 31), dec!(4)),
        CashFlow::new(date(2027, 1, 31), dec!(104)),
    ];
    let settlement = SettlementSpec::on(date(2025, 6, 2));

    let priced = price_from_cashflows(
        &settlement,
        BusinessDayRoll::Following,
        &flows,
        0.065,
        DayCountConvention::Act365Fixed,
        Compounding::SemiAnnual,
    )
    .unwrap();

    let solved = yield_from_cashflows(
        &settlement,
        BusinessDayRoll::Following,
        &flows,
        priced.dirty_price.to_f64().unwrap(),
        DayCountConvention::Act365Fixed,
        Compounding::SemiAnnual,
    )
    .unwrap();

    assert_relative_eq!(solved.yield_value, 0.065, epsilon = 1e-6);
}

#[test]
fn schedule_anchors_to_month_end() {
    let schedule = build_schedule(&sample_terms()).unwrap();

    for coupon_date in &schedule.coupon_dates {
        assert!(coupon_date.is_end_of_month(), "not month end: {coupon_date}");
    }
}

#[test]
fn street_compounding_prices_like_annual() {
    let settlement = SettlementSpec::on(date(2022, 7, 15));

    let street = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
        .with_coupon_rate(dec!(0.075))
        .with_compounding(Compounding::Street)
        .build()
        .unwrap();
    let annual = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
        .with_coupon_rate(dec!(0.075))
        .with_compounding(Compounding::Annual)
        .build()
        .unwrap();

    let a = price_from_schedule(&street, &settlement, 0.072).unwrap();
    let b = price_from_schedule(&annual, &settlement, 0.072).unwrap();
    assert_eq!(a.dirty_price, b.dirty_price);
}

proptest! {
    #[test]
    fn price_is_monotone_decreasing_in_yield(
        y in 0.001_f64..0.25,
        bump in 0.002_f64..0.05,
    ) {
        let terms = sample_terms();
        let settlement = SettlementSpec::on(date(2022, 7, 15));

        let low = price_from_schedule(&terms, &settlement, y).unwrap();
        let high = price_from_schedule(&terms, &settlement, y + bump).unwrap();

        prop_assert!(low.dirty_price > high.dirty_price);
    }

    #[test]
    fn solver_recovers_the_pricing_yield(y in 0.005_f64..0.20) {
        let terms = sample_terms();
        let settlement = SettlementSpec::on(date(2022, 7, 15));

        let priced = price_from_schedule(&terms, &settlement, y).unwrap();
        let solved = yield_from_schedule(
            &terms,
            &settlement,
            priced.dirty_price.to_f64().unwrap(),
        )
        .unwrap();

        prop_assert!((solved.yield_value - y).abs() < 1e-6);
    }
}
