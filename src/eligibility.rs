use chrono::{FixedOffset, Offset, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::age::AgePeriod;
use crate::errors::{AgeRejection, DecisionError, Result};
use crate::identity::IdentityCodeServices;
use crate::lifetime::LifetimeTable;
use crate::types::{Country, Gender, UNDERAGE_PERIOD};

/// applicant facts derived from the identity code for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: AgePeriod,
    pub gender: Option<Gender>,
    pub expected_lifetime_years: u16,
}

/// rejects applicants who are underage or would outlive their expected lifetime
#[derive(Debug, Clone)]
pub struct AgeEligibilityChecker {
    services: IdentityCodeServices,
    lifetimes: LifetimeTable,
    utc_offset: FixedOffset,
}

impl AgeEligibilityChecker {
    /// reads today's date in UTC
    pub fn new(services: IdentityCodeServices, lifetimes: LifetimeTable) -> Self {
        Self {
            services,
            lifetimes,
            utc_offset: Utc.fix(),
        }
    }

    /// read today's date in the given zone offset instead of UTC
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    /// derive age and expected lifetime for the code holder
    pub fn profile(
        &self,
        identity_code: &str,
        country: Country,
        time_provider: &SafeTimeProvider,
    ) -> Result<ApplicantProfile> {
        if identity_code.trim().is_empty() {
            return Err(DecisionError::invalid_code("identity code is empty"));
        }

        let service = self.services.for_country(country);
        let today = time_provider.now().with_timezone(&self.utc_offset).date_naive();
        let age = service.age(identity_code, today)?;
        let gender = service.gender(identity_code)?;
        let expected_lifetime_years = self.lifetimes.lookup(country, gender)?;

        Ok(ApplicantProfile {
            age,
            gender,
            expected_lifetime_years,
        })
    }

    /// age rejections surface as `DecisionError::AgeRestricted`
    pub fn validate(
        &self,
        identity_code: &str,
        country: Country,
        loan_period_months: u32,
        time_provider: &SafeTimeProvider,
    ) -> Result<ApplicantProfile> {
        let profile = self.profile(identity_code, country, time_provider)?;
        check_age(&profile, loan_period_months)?;
        Ok(profile)
    }
}

fn check_age(profile: &ApplicantProfile, loan_period_months: u32) -> std::result::Result<(), AgeRejection> {
    let age_years = profile.age.years;
    let lifetime = profile.expected_lifetime_years as u32;

    if age_years < UNDERAGE_PERIOD as u32 {
        return Err(AgeRejection::Underage);
    }

    let payoff_age_years = profile.age.plus_months(loan_period_months).years;

    if lifetime <= age_years {
        return Err(AgeRejection::LifetimeExceeded);
    }
    if lifetime <= payoff_age_years {
        return Err(AgeRejection::PayoffExceedsLifetime {
            lifetime_years: profile.expected_lifetime_years,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Months, NaiveDate, TimeZone};
    use hourglass_rs::TimeSource;

    use crate::identity::IdentityCodeService;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
        ))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn checker() -> AgeEligibilityChecker {
        AgeEligibilityChecker::new(IdentityCodeServices::standard(), LifetimeTable::baltic())
    }

    fn code_for(country: Country, gender: Gender, birth_date: NaiveDate) -> String {
        IdentityCodeServices::standard()
            .for_country(country)
            .encode(birth_date, gender, 123)
            .unwrap()
    }

    fn profile(years: u32, months: u32, lifetime: u16) -> ApplicantProfile {
        ApplicantProfile {
            age: AgePeriod { years, months, days: 0 },
            gender: None,
            expected_lifetime_years: lifetime,
        }
    }

    #[test]
    fn test_underage_for_every_country() {
        let time = test_time();
        for country in Country::ALL {
            for gender in [Gender::Female, Gender::Male] {
                let code = code_for(country, gender, today());
                let result = checker().validate(&code, country, 60, &time);
                assert_eq!(
                    result,
                    Err(DecisionError::AgeRestricted(AgeRejection::Underage)),
                    "{} {:?}",
                    country,
                    gender
                );
            }
        }
    }

    #[test]
    fn test_lifetime_exceeded_for_every_country() {
        let time = test_time();
        let born = NaiveDate::from_ymd_opt(1920, 1, 1).unwrap();
        for country in Country::ALL {
            for gender in [Gender::Female, Gender::Male] {
                let code = code_for(country, gender, born);
                let result = checker().validate(&code, country, 60, &time);
                assert_eq!(
                    result,
                    Err(DecisionError::AgeRestricted(AgeRejection::LifetimeExceeded)),
                    "{} {:?}",
                    country,
                    gender
                );
            }
        }
    }

    #[test]
    fn test_payoff_exceeds_lifetime_for_every_country() {
        let time = test_time();
        let table = LifetimeTable::baltic();
        for country in Country::ALL {
            for gender in [Gender::Female, Gender::Male] {
                let services = IdentityCodeServices::standard();
                let service_gender = services
                    .for_country(country)
                    .gender(&code_for(country, gender, today()))
                    .unwrap();
                let lifetime = table.lookup(country, service_gender).unwrap();

                // one month short of the expected lifetime
                let born = NaiveDate::from_ymd_opt(today().year() - lifetime as i32, 6, 15)
                    .unwrap()
                    .checked_add_months(Months::new(1))
                    .unwrap();
                let code = code_for(country, gender, born);

                let result = checker().validate(&code, country, 60, &time);
                assert_eq!(
                    result,
                    Err(DecisionError::AgeRestricted(
                        AgeRejection::PayoffExceedsLifetime { lifetime_years: lifetime }
                    )),
                    "{} {:?}",
                    country,
                    gender
                );
            }
        }
    }

    #[test]
    fn test_eligible_applicant_profile() {
        let time = test_time();
        let profile = checker()
            .validate("38411266610", Country::LT, 12, &time)
            .unwrap();
        assert_eq!(profile.age.years, 39);
        assert_eq!(profile.gender, Some(Gender::Male));
        assert_eq!(profile.expected_lifetime_years, 69);
    }

    #[test]
    fn test_invalid_code_is_not_an_age_rejection() {
        let time = test_time();
        let result = checker().validate("12345678901", Country::EE, 12, &time);
        assert!(matches!(result, Err(DecisionError::InvalidIdentityCode { .. })));

        let result = checker().validate("  ", Country::EE, 12, &time);
        assert!(matches!(result, Err(DecisionError::InvalidIdentityCode { .. })));
    }

    #[test]
    fn test_birthday_follows_local_date() {
        // 22:30 UTC on 2024-06-15 is already 2024-06-16 in Tallinn summer time
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 15, 22, 30, 0).unwrap(),
        ));
        let code = code_for(
            Country::EE,
            Gender::Female,
            NaiveDate::from_ymd_opt(2006, 6, 16).unwrap(),
        );

        let result = checker().validate(&code, Country::EE, 12, &time);
        assert_eq!(result, Err(DecisionError::AgeRestricted(AgeRejection::Underage)));

        let tallinn = checker().with_utc_offset(FixedOffset::east_opt(3 * 3600).unwrap());
        let profile = tallinn.validate(&code, Country::EE, 12, &time).unwrap();
        assert_eq!(profile.age.years, 18);
        assert_eq!(profile.age.months, 0);
    }

    #[test]
    fn test_payoff_uses_calendar_months() {
        // 17y11m is underage even if the loan ends after the 18th birthday
        assert_eq!(check_age(&profile(17, 11, 70), 3), Err(AgeRejection::Underage));

        // 68y10m + 1 month stays below 69, + 2 months reaches it
        assert_eq!(check_age(&profile(68, 10, 69), 1), Ok(()));
        assert_eq!(
            check_age(&profile(68, 10, 69), 2),
            Err(AgeRejection::PayoffExceedsLifetime { lifetime_years: 69 })
        );
    }

    #[test]
    fn test_age_equal_to_lifetime() {
        assert_eq!(check_age(&profile(70, 0, 70), 12), Err(AgeRejection::LifetimeExceeded));
    }
}
