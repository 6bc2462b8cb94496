use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DecisionError;

/// minimum age in years at which loans are offered, identical for all countries
pub const UNDERAGE_PERIOD: u16 = 18;

/// country of residence, selects the identity code format and lifetime table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// Estonia
    EE,
    /// Latvia
    LV,
    /// Lithuania
    LT,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::EE, Country::LV, Country::LT];

    pub fn code(&self) -> &'static str {
        match self {
            Country::EE => "EE",
            Country::LV => "LV",
            Country::LT => "LT",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EE" => Ok(Country::EE),
            "LV" => Ok(Country::LV),
            "LT" => Ok(Country::LT),
            other => Err(DecisionError::InvalidConfiguration {
                message: format!("unsupported country code: {}", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// credit-risk class of an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditSegment {
    /// outstanding debt, never approved
    Debtor,
    Segment1,
    Segment2,
    Segment3,
}
