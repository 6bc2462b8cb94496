use serde::{Deserialize, Serialize};

use crate::errors::{DecisionError, Result};
use crate::types::{Country, Gender};

pub const ESTONIAN_FEMALE_LIFETIME_YEARS: u16 = 82;
pub const ESTONIAN_MALE_LIFETIME_YEARS: u16 = 78;
pub const LATVIAN_LIFETIME_YEARS: u16 = 70;
pub const LITHUANIAN_FEMALE_LIFETIME_YEARS: u16 = 79;
pub const LITHUANIAN_MALE_LIFETIME_YEARS: u16 = 69;

/// expected lifetime for a country, optionally narrowed to one gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeEntry {
    pub country: Country,
    pub gender: Option<Gender>,
    pub years: u16,
}

/// statistical lifetimes keyed by (country, gender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeTable {
    entries: Vec<LifetimeEntry>,
}

impl LifetimeTable {
    pub fn new(entries: Vec<LifetimeEntry>) -> Self {
        Self { entries }
    }

    /// published baltic averages; latvia has a single gender-independent entry
    pub fn baltic() -> Self {
        let entry = |country, gender, years| LifetimeEntry { country, gender, years };
        Self::new(vec![
            entry(Country::EE, Some(Gender::Female), ESTONIAN_FEMALE_LIFETIME_YEARS),
            entry(Country::EE, Some(Gender::Male), ESTONIAN_MALE_LIFETIME_YEARS),
            entry(Country::LV, None, LATVIAN_LIFETIME_YEARS),
            entry(Country::LT, Some(Gender::Female), LITHUANIAN_FEMALE_LIFETIME_YEARS),
            entry(Country::LT, Some(Gender::Male), LITHUANIAN_MALE_LIFETIME_YEARS),
        ])
    }

    pub fn entries(&self) -> &[LifetimeEntry] {
        &self.entries
    }

    /// exact (country, gender) entry first, then the country-wide entry
    pub fn lookup(&self, country: Country, gender: Option<Gender>) -> Result<u16> {
        let find = |gender: Option<Gender>| {
            self.entries
                .iter()
                .find(|e| e.country == country && e.gender == gender)
                .map(|e| e.years)
        };

        gender
            .and_then(|g| find(Some(g)))
            .or_else(|| find(None))
            .ok_or_else(|| DecisionError::InvalidConfiguration {
                message: format!("no expected lifetime for {} ({:?})", country, gender),
            })
    }
}

impl Default for LifetimeTable {
    fn default() -> Self {
        Self::baltic()
    }
}
