pub mod age;
pub mod config;
pub mod decimal;
pub mod decision;
pub mod eligibility;
pub mod engine;
pub mod errors;
pub mod identity;
pub mod lifetime;
pub mod segment;
pub mod types;

// re-export key types
pub use age::AgePeriod;
pub use config::{DecisionConfig, LoanLimits};
pub use decimal::Money;
pub use decision::{Decision, DecisionView};
pub use eligibility::{AgeEligibilityChecker, ApplicantProfile};
pub use engine::LoanDecisionEngine;
pub use errors::{AgeRejection, DecisionError, Result};
pub use identity::{
    EstonianCodeService, IdentityCodeService, IdentityCodeServices, LatvianCodeService,
    LithuanianCodeService,
};
pub use lifetime::{LifetimeEntry, LifetimeTable};
pub use segment::{SegmentAssignment, SegmentBand, SegmentPolicy};
pub use types::{Country, CreditSegment, Gender, UNDERAGE_PERIOD};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
