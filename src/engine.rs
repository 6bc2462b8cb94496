use hourglass_rs::SafeTimeProvider;
use tracing::{debug, info};

use crate::config::{DecisionConfig, LoanLimits};
use crate::decimal::Money;
use crate::decision::Decision;
use crate::eligibility::AgeEligibilityChecker;
use crate::errors::{DecisionError, Result};
use crate::identity::IdentityCodeServices;
use crate::segment::{SegmentAssignment, SegmentPolicy};
use crate::types::Country;

/// stateless loan decision engine
///
/// one instance can be shared across threads; every call is independent
#[derive(Debug, Clone)]
pub struct LoanDecisionEngine {
    limits: LoanLimits,
    segments: SegmentPolicy,
    eligibility: AgeEligibilityChecker,
}

impl LoanDecisionEngine {
    /// engine with the built-in identity code parsers
    pub fn new(config: DecisionConfig) -> Result<Self> {
        Self::with_services(config, IdentityCodeServices::standard())
    }

    pub fn with_services(config: DecisionConfig, services: IdentityCodeServices) -> Result<Self> {
        config.validate()?;
        let utc_offset = config.utc_offset()?;
        Ok(Self {
            limits: config.limits,
            segments: config.segments,
            eligibility: AgeEligibilityChecker::new(services, config.lifetimes)
                .with_utc_offset(utc_offset),
        })
    }

    pub fn limits(&self) -> &LoanLimits {
        &self.limits
    }

    /// decide on a loan request
    ///
    /// age rejections come back as a rejected `Decision`; invalid input and
    /// the absence of any approvable loan are returned as errors
    pub fn calculate_approved_loan(
        &self,
        identity_code: &str,
        requested_amount: Money,
        requested_period_months: u32,
        country: Country,
        time_provider: &SafeTimeProvider,
    ) -> Result<Decision> {
        self.limits.check_amount(requested_amount)?;
        self.limits.check_period(requested_period_months)?;

        match self.eligibility.validate(
            identity_code,
            country,
            requested_period_months,
            time_provider,
        ) {
            Ok(profile) => {
                debug!(
                    %country,
                    age_years = profile.age.years,
                    lifetime_years = profile.expected_lifetime_years,
                    "applicant passed age checks"
                );
            }
            Err(DecisionError::AgeRestricted(reason)) => {
                info!(%country, ?reason, "loan rejected on age");
                return Ok(Decision::rejected(reason));
            }
            Err(e) => return Err(e),
        }

        let assignment = self.segments.classify(identity_code)?;
        if !assignment.has_credit() {
            info!(%country, segment = ?assignment.segment, "no credit for segment");
            return Err(DecisionError::NoValidLoan);
        }

        let (amount, period) = self
            .find_loan(&assignment, requested_amount, requested_period_months)
            .ok_or(DecisionError::NoValidLoan)?;

        info!(
            %country,
            segment = ?assignment.segment,
            %requested_amount,
            requested_period_months,
            %amount,
            period,
            "loan approved"
        );
        Ok(Decision::approved(amount, period))
    }

    /// largest amount the segment supports over `period_months`, capped at the maximum
    pub fn highest_valid_amount(&self, assignment: &SegmentAssignment, period_months: u32) -> Money {
        let maximum = self.limits.maximum_amount;
        assignment
            .credit_modifier
            .checked_mul_months(period_months)
            .map_or(maximum, |amount| amount.min(maximum))
    }

    /// requested period when it already covers the request, otherwise the
    /// shortest period that clears the minimum amount
    fn find_loan(
        &self,
        assignment: &SegmentAssignment,
        requested_amount: Money,
        requested_period_months: u32,
    ) -> Option<(Money, u32)> {
        let at_requested = self.highest_valid_amount(assignment, requested_period_months);
        if at_requested >= requested_amount && at_requested >= self.limits.minimum_amount {
            debug!(amount = %at_requested, "requested period supports requested amount");
            return Some((at_requested, requested_period_months));
        }

        let found = (self.limits.minimum_period_months..=self.limits.maximum_period_months)
            .map(|period| (self.highest_valid_amount(assignment, period), period))
            .find(|(amount, _)| *amount >= self.limits.minimum_amount);

        match found {
            Some((amount, period)) => debug!(%amount, period, "found shortest qualifying period"),
            None => debug!("no period within bounds reaches the minimum amount"),
        }
        found
    }
}
