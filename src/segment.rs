use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{DecisionError, Result};
use crate::types::CreditSegment;

/// number of trailing code digits used for classification
const SEGMENT_DIGITS: usize = 4;

/// codes whose trailing number is below `upper_bound` fall into `segment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBand {
    pub upper_bound: u32,
    pub segment: CreditSegment,
    /// amount supported per month of loan period
    pub credit_modifier: Money,
}

/// segment assigned to an applicant with its credit modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAssignment {
    pub segment: CreditSegment,
    pub credit_modifier: Money,
}

impl SegmentAssignment {
    pub fn has_credit(&self) -> bool {
        !self.credit_modifier.is_zero()
    }
}

/// ordered bands partitioning the trailing four digits of an identity code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPolicy {
    bands: Vec<SegmentBand>,
}

impl SegmentPolicy {
    pub fn new(bands: Vec<SegmentBand>) -> Self {
        Self { bands }
    }

    pub fn standard() -> Self {
        let band = |upper_bound, segment, modifier| SegmentBand {
            upper_bound,
            segment,
            credit_modifier: Money::from_major(modifier),
        };
        Self::new(vec![
            band(2_500, CreditSegment::Debtor, 0),
            band(5_000, CreditSegment::Segment1, 100),
            band(7_500, CreditSegment::Segment2, 300),
            band(10_000, CreditSegment::Segment3, 1_000),
        ])
    }

    pub fn bands(&self) -> &[SegmentBand] {
        &self.bands
    }

    pub fn classify(&self, identity_code: &str) -> Result<SegmentAssignment> {
        let key = segment_key(identity_code)?;
        self.bands
            .iter()
            .find(|band| key < band.upper_bound)
            .map(|band| SegmentAssignment {
                segment: band.segment,
                credit_modifier: band.credit_modifier,
            })
            .ok_or_else(|| DecisionError::InvalidConfiguration {
                message: format!("no segment band covers {}", key),
            })
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let last = self.bands.last().ok_or_else(|| DecisionError::InvalidConfiguration {
            message: "at least one segment band is required".to_string(),
        })?;

        if self.bands.windows(2).any(|w| w[0].upper_bound >= w[1].upper_bound) {
            return Err(DecisionError::InvalidConfiguration {
                message: "segment band bounds must be strictly increasing".to_string(),
            });
        }
        if last.upper_bound < 10u32.pow(SEGMENT_DIGITS as u32) {
            return Err(DecisionError::InvalidConfiguration {
                message: format!("segment bands must cover every {}-digit value", SEGMENT_DIGITS),
            });
        }
        if self.bands.iter().any(|b| b.credit_modifier < Money::ZERO) {
            return Err(DecisionError::InvalidConfiguration {
                message: "credit modifiers cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// trailing four digits of the code, separators ignored
fn segment_key(identity_code: &str) -> Result<u32> {
    let digits: Vec<u32> = identity_code
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() < SEGMENT_DIGITS {
        return Err(DecisionError::invalid_code("too few digits to classify"));
    }

    Ok(digits[digits.len() - SEGMENT_DIGITS..]
        .iter()
        .fold(0, |acc, d| acc * 10 + d))
}
