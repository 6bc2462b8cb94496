use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{DecisionError, Result};
use crate::lifetime::LifetimeTable;
use crate::segment::SegmentPolicy;
use crate::types::UNDERAGE_PERIOD;

pub const MINIMUM_LOAN_AMOUNT: i64 = 2_000;
pub const MAXIMUM_LOAN_AMOUNT: i64 = 10_000;
pub const MINIMUM_LOAN_PERIOD: u32 = 12;
pub const MAXIMUM_LOAN_PERIOD: u32 = 60;

/// decision engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub limits: LoanLimits,
    pub segments: SegmentPolicy,
    pub lifetimes: LifetimeTable,
    /// offset from UTC used to read today's date off the clock
    #[serde(default)]
    pub utc_offset_seconds: i32,
}

/// inclusive bounds on requested and approved loans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLimits {
    pub minimum_amount: Money,
    pub maximum_amount: Money,
    pub minimum_period_months: u32,
    pub maximum_period_months: u32,
}

impl LoanLimits {
    pub fn standard() -> Self {
        Self {
            minimum_amount: Money::from_major(MINIMUM_LOAN_AMOUNT),
            maximum_amount: Money::from_major(MAXIMUM_LOAN_AMOUNT),
            minimum_period_months: MINIMUM_LOAN_PERIOD,
            maximum_period_months: MAXIMUM_LOAN_PERIOD,
        }
    }

    pub fn check_amount(&self, amount: Money) -> Result<()> {
        if amount < self.minimum_amount || amount > self.maximum_amount {
            return Err(DecisionError::InvalidLoanAmount {
                amount,
                minimum: self.minimum_amount,
                maximum: self.maximum_amount,
            });
        }
        Ok(())
    }

    pub fn check_period(&self, period_months: u32) -> Result<()> {
        if period_months < self.minimum_period_months || period_months > self.maximum_period_months {
            return Err(DecisionError::InvalidLoanPeriod {
                period: period_months,
                minimum: self.minimum_period_months,
                maximum: self.maximum_period_months,
            });
        }
        Ok(())
    }
}

impl Default for LoanLimits {
    fn default() -> Self {
        Self::standard()
    }
}

impl DecisionConfig {
    /// baltic product: 2000-10000 over 12-60 months
    pub fn standard() -> Self {
        Self {
            limits: LoanLimits::standard(),
            segments: SegmentPolicy::standard(),
            lifetimes: LifetimeTable::baltic(),
            utc_offset_seconds: 0,
        }
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            DecisionError::InvalidConfiguration {
                message: format!("utc offset {}s is out of range", self.utc_offset_seconds),
            }
        })
    }

    /// parse from json and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            DecisionError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DecisionError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.minimum_amount <= Money::ZERO || limits.minimum_amount > limits.maximum_amount {
            return Err(DecisionError::InvalidConfiguration {
                message: format!(
                    "amount bounds {}..={} are not a valid range",
                    limits.minimum_amount, limits.maximum_amount
                ),
            });
        }
        if limits.minimum_period_months == 0
            || limits.minimum_period_months > limits.maximum_period_months
        {
            return Err(DecisionError::InvalidConfiguration {
                message: format!(
                    "period bounds {}..={} are not a valid range",
                    limits.minimum_period_months, limits.maximum_period_months
                ),
            });
        }

        self.segments.validate()?;
        self.utc_offset()?;

        if let Some(entry) = self
            .lifetimes
            .entries()
            .iter()
            .find(|e| e.years <= UNDERAGE_PERIOD)
        {
            return Err(DecisionError::InvalidConfiguration {
                message: format!(
                    "expected lifetime {} for {} must exceed the minimum age {}",
                    entry.years, entry.country, UNDERAGE_PERIOD
                ),
            });
        }

        Ok(())
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
