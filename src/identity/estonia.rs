use chrono::NaiveDate;

use super::{gender_century, IdentityCodeService};
use crate::errors::Result;
use crate::types::{Country, Gender};

/// estonian isikukood parser
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianCodeService;

impl IdentityCodeService for EstonianCodeService {
    fn country(&self) -> Country {
        Country::EE
    }

    fn birth_date(&self, code: &str) -> Result<NaiveDate> {
        Ok(gender_century::parse(code)?.birth_date)
    }

    fn gender(&self, code: &str) -> Result<Option<Gender>> {
        Ok(Some(gender_century::parse(code)?.gender))
    }

    fn encode(&self, birth_date: NaiveDate, gender: Gender, sequence: u16) -> Result<String> {
        gender_century::encode(birth_date, gender, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecisionError;

    #[test]
    fn test_gender_extraction() {
        let service = EstonianCodeService;
        assert_eq!(service.gender("37605030299").unwrap(), Some(Gender::Male));

        let birth = NaiveDate::from_ymd_opt(1995, 2, 28).unwrap();
        let code = service.encode(birth, Gender::Female, 204).unwrap();
        assert_eq!(service.gender(&code).unwrap(), Some(Gender::Female));
        assert_eq!(service.birth_date(&code).unwrap(), birth);
    }

    #[test]
    fn test_age_on_reference_date() {
        let service = EstonianCodeService;
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let age = service.age("37605030299", today).unwrap();
        assert_eq!(age.years, 47);
        assert_eq!(age.months, 11);
    }

    #[test]
    fn test_invalid_code() {
        let result = EstonianCodeService.birth_date("12345678901");
        assert!(matches!(result, Err(DecisionError::InvalidIdentityCode { .. })));
    }
}
