use chrono::NaiveDate;

use super::{gender_century, IdentityCodeService};
use crate::errors::Result;
use crate::types::{Country, Gender};

/// lithuanian asmens kodas parser, same layout and checksum as the estonian code
#[derive(Debug, Clone, Copy, Default)]
pub struct LithuanianCodeService;

impl IdentityCodeService for LithuanianCodeService {
    fn country(&self) -> Country {
        Country::LT
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
    use crate::identity::LatvianCodeService;

    #[test]
    fn test_parses_lithuanian_code() {
        let service = LithuanianCodeService;
        assert_eq!(
            service.birth_date("38411266610").unwrap(),
            NaiveDate::from_ymd_opt(1984, 11, 26).unwrap()
        );
        assert_eq!(service.gender("38411266610").unwrap(), Some(Gender::Male));
    }

    #[test]
    fn test_rejects_latvian_code() {
        let birth = NaiveDate::from_ymd_opt(2016, 12, 3).unwrap();
        let latvian = LatvianCodeService.encode(birth, Gender::Male, 1).unwrap();
        assert!(LithuanianCodeService.birth_date(&latvian).is_err());
    }
}
