/// time control - the same applicant before and after their 18th birthday
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use loan_decision_rs::{
    Country, DecisionConfig, Gender, IdentityCodeServices, LoanDecisionEngine, Money,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let services = IdentityCodeServices::standard();
    let birth = NaiveDate::from_ymd_opt(2006, 3, 1).ok_or("invalid date")?;
    let code = services.for_country(Country::EE).encode(birth, Gender::Female, 512)?;
    println!("applicant code: {}", code);

    let engine = LoanDecisionEngine::with_services(DecisionConfig::standard(), services)?;

    // the day before the 18th birthday
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let decision = engine.calculate_approved_loan(&code, Money::from_major(5_000), 24, Country::EE, &time)?;
    println!("{}: {}", time.now().format("%Y-%m-%d"), decision.view().to_json()?);

    controller.advance(Duration::days(1));
    let decision = engine.calculate_approved_loan(&code, Money::from_major(5_000), 24, Country::EE, &time)?;
    println!("{}: {}", time.now().format("%Y-%m-%d"), decision.view().to_json()?);

    Ok(())
}
