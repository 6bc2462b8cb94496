use thiserror::Error;

use crate::decimal::Money;

/// reasons an applicant is turned away on age grounds
///
/// display output is the exact message shown to the applicant
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRejection {
    #[error("Loans are not offered to people under age 18.")]
    Underage,

    #[error("Your age exceeds the current expected lifetime in your country")]
    LifetimeExceeded,

    #[error("Your age plus specified loan period exceeds expected {lifetime_years} years life time in your country. Try to request smaller loan period")]
    PayoffExceedsLifetime {
        lifetime_years: u16,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    #[error("invalid personal identity code: {message}")]
    InvalidIdentityCode {
        message: String,
    },

    #[error("invalid loan amount: {amount}, allowed range {minimum}..={maximum}")]
    InvalidLoanAmount {
        amount: Money,
        minimum: Money,
        maximum: Money,
    },

    #[error("invalid loan period: {period} months, allowed range {minimum}..={maximum}")]
    InvalidLoanPeriod {
        period: u32,
        minimum: u32,
        maximum: u32,
    },

    #[error(transparent)]
    AgeRestricted(#[from] AgeRejection),

    #[error("No valid loan found!")]
    NoValidLoan,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl DecisionError {
    pub(crate) fn invalid_code(message: impl Into<String>) -> Self {
        DecisionError::InvalidIdentityCode {
            message: message.into(),
        }
    }

    /// true for failures that terminate the request instead of producing a decision
    pub fn is_hard(&self) -> bool {
        !matches!(self, DecisionError::AgeRestricted(_))
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            AgeRejection::Underage.to_string(),
            "Loans are not offered to people under age 18."
        );
        assert_eq!(
            AgeRejection::LifetimeExceeded.to_string(),
            "Your age exceeds the current expected lifetime in your country"
        );
        assert_eq!(
            AgeRejection::PayoffExceedsLifetime { lifetime_years: 82 }.to_string(),
            "Your age plus specified loan period exceeds expected 82 years life time in your country. Try to request smaller loan period"
        );
    }

    #[test]
    fn test_only_age_restrictions_are_soft() {
        assert!(!DecisionError::from(AgeRejection::Underage).is_hard());
        assert!(DecisionError::NoValidLoan.is_hard());
        assert!(DecisionError::invalid_code("bad checksum").is_hard());
    }
}
