pub mod estonia;
pub mod latvia;
pub mod lithuania;

mod gender_century;

use chrono::NaiveDate;
use std::sync::Arc;

use crate::age::AgePeriod;
use crate::errors::Result;
use crate::types::{Country, Gender};

pub use estonia::EstonianCodeService;
pub use latvia::LatvianCodeService;
pub use lithuania::LithuanianCodeService;

/// parser for one country's personal identity codes
///
/// implementations are stateless and shared read-only between requests
pub trait IdentityCodeService: Send + Sync {
    fn country(&self) -> Country;

    /// validate the code and extract the encoded birth date
    fn birth_date(&self, code: &str) -> Result<NaiveDate>;

    /// gender carried by the code, none when the format does not encode it
    fn gender(&self, code: &str) -> Result<Option<Gender>>;

    /// encode a valid code for the given birth date
    ///
    /// `gender` is ignored by formats that do not carry it
    fn encode(&self, birth_date: NaiveDate, gender: Gender, sequence: u16) -> Result<String>;

    /// age of the code holder on `today`
    fn age(&self, code: &str, today: NaiveDate) -> Result<AgePeriod> {
        AgePeriod::between(self.birth_date(code)?, today)
    }
}

/// one identity code service per supported country
#[derive(Clone)]
pub struct IdentityCodeServices {
    estonia: Arc<dyn IdentityCodeService>,
    latvia: Arc<dyn IdentityCodeService>,
    lithuania: Arc<dyn IdentityCodeService>,
}

impl IdentityCodeServices {
    /// built-in parsers for all countries
    pub fn standard() -> Self {
        Self {
            estonia: Arc::new(EstonianCodeService),
            latvia: Arc::new(LatvianCodeService),
            lithuania: Arc::new(LithuanianCodeService),
        }
    }

    /// replace the service registered for `service.country()`
    pub fn with_service(mut self, service: Arc<dyn IdentityCodeService>) -> Self {
        match service.country() {
            Country::EE => self.estonia = service,
            Country::LV => self.latvia = service,
            Country::LT => self.lithuania = service,
        }
        self
    }

    pub fn for_country(&self, country: Country) -> &dyn IdentityCodeService {
        match country {
            Country::EE => self.estonia.as_ref(),
            Country::LV => self.latvia.as_ref(),
            Country::LT => self.lithuania.as_ref(),
        }
    }
}

impl Default for IdentityCodeServices {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for IdentityCodeServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityCodeServices")
            .field("estonia", &self.estonia.country())
            .field("latvia", &self.latvia.country())
            .field("lithuania", &self.lithuania.country())
            .finish()
    }
}

/// parse a string of exactly `len` ascii digits
pub(crate) fn digits(code: &str, len: usize) -> Option<Vec<u32>> {
    if code.len() != len {
        return None;
    }
    code.chars().map(|c| c.to_digit(10)).collect()
}
