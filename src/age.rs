use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{DecisionError, Result};

/// calendar period between a birth date and a reference date
///
/// whole months are counted the way a calendar does: the month in progress
/// only counts once the reference day-of-month reaches the birth day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgePeriod {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgePeriod {
    /// period from `birth_date` up to `today`
    pub fn between(birth_date: NaiveDate, today: NaiveDate) -> Result<Self> {
        if birth_date > today {
            return Err(DecisionError::invalid_code(format!(
                "birth date {} is in the future",
                birth_date
            )));
        }

        let mut total_months = (today.year() - birth_date.year()) * 12
            + today.month() as i32
            - birth_date.month() as i32;
        if today.day() < birth_date.day() {
            total_months -= 1;
        }

        // total_months >= 0 because birth_date <= today
        let anniversary = birth_date
            .checked_add_months(chrono::Months::new(total_months as u32))
            .ok_or_else(|| DecisionError::invalid_code("birth date out of range"))?;
        let days = (today - anniversary).num_days() as u32;

        Ok(Self::from_months(total_months as u32, days))
    }

    fn from_months(total_months: u32, days: u32) -> Self {
        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// normalised period after adding `months`
    pub fn plus_months(&self, months: u32) -> Self {
        Self::from_months(self.total_months() + months, self.days)
    }
}
