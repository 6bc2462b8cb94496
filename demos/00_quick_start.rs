/// quick start - decide on a few loan requests
use loan_decision_rs::{Country, DecisionConfig, LoanDecisionEngine, Money, SafeTimeProvider, TimeSource};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = LoanDecisionEngine::new(DecisionConfig::standard())?;
    let time = SafeTimeProvider::new(TimeSource::System);

    let limits = engine.limits();
    println!(
        "amounts {}..={} over {}..={} months",
        limits.minimum_amount, limits.maximum_amount, limits.minimum_period_months, limits.maximum_period_months
    );

    let requests = [
        ("50307172740", 4_000, 12, Country::EE),
        ("38411266610", 4_000, 12, Country::LT),
        ("37605030299", 4_000, 12, Country::EE),
    ];

    for (code, amount, period, country) in requests {
        match engine.calculate_approved_loan(code, Money::from_major(amount), period, country, &time) {
            Ok(decision) => println!("{} {}: {}", country, code, decision.view().to_json()?),
            Err(e) => println!("{} {}: error: {}", country, code, e),
        }
    }

    Ok(())
}
