//! Vanilla option assembly as a trade builder would do it.

use approx::assert_relative_eq;
use rd_core::errors::{Error, Result};
use rd_currencies::currencies::baseline_currency;
use rd_instruments::{
    Exercise, ExerciseType, Instrument, OptionType, PricingEngine, PricingResults,
    SettlementType, VanillaOption, VanillaOptionArguments,
};
use rd_time::Date;

#[derive(Debug)]
struct RejectingEngine;

impl PricingEngine<VanillaOptionArguments> for RejectingEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        Err(Error::Runtime(format!(
            "no market for {}",
            args.underlying
        )))
    }
}

#[derive(Debug)]
struct StrikeEchoEngine;

impl PricingEngine<VanillaOptionArguments> for StrikeEchoEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        Ok(PricingResults::from_npv(args.payoff.strike())
            .with_result("dates", args.exercise.dates().len() as f64))
    }
}

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_bermudan_option_arguments() {
    let gbp = baseline_currency("GBP").unwrap();
    let exercise = Exercise::from_dates(
        ExerciseType::Bermudan,
        &[d(2027, 9, 1), d(2027, 3, 1), d(2027, 6, 1)],
        None,
    )
    .unwrap();
    let opt = VanillaOption::new(OptionType::Call, 21.4756, exercise, "RIC:VOD.L", gbp)
        .with_settlement(Some(SettlementType::Physical));

    assert_eq!(opt.maturity_date(), Some(d(2027, 9, 1)));
    let args = opt.arguments();
    assert_eq!(args.settlement, Some(SettlementType::Physical));
    assert!(!args.quanto);

    let res = opt.price(&StrikeEchoEngine).unwrap();
    assert_relative_eq!(res.npv, 21.4756);
    assert_relative_eq!(res.additional_results["dates"], 3.0);
}

#[test]
fn test_engine_errors_propagate() {
    let usd = baseline_currency("USD").unwrap();
    let opt = VanillaOption::new(
        OptionType::Put,
        100.0,
        Exercise::european(d(2027, 3, 1)),
        "SPX",
        usd,
    );
    let err = opt.price(&RejectingEngine).unwrap_err();
    assert_eq!(err.to_string(), "no market for SPX");
}
