//! Latvian personas kods.
//!
//! Only the legacy `DDMMYY-CNNNK` layout carries a birth date: C is the
//! century (0 for the 1800s, 1 for the 1900s, 2 for the 2000s) and K a mod-11
//! check digit. Codes issued since 2017 start with `32` and are anonymous, so
//! they cannot be used for age checks. No layout encodes gender.

use chrono::{Datelike, NaiveDate};

use super::{digits, IdentityCodeService};
use crate::errors::{DecisionError, Result};
use crate::types::{Country, Gender};

const WEIGHTS: [u32; 10] = [1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const ANONYMOUS_PREFIX: &str = "32";

#[derive(Debug, Clone, Copy, Default)]
pub struct LatvianCodeService;

impl LatvianCodeService {
    fn normalize(code: &str) -> String {
        let code = code.trim();
        match code.char_indices().nth(6) {
            Some((idx, '-')) => format!("{}{}", &code[..idx], &code[idx + 1..]),
            _ => code.to_string(),
        }
    }
}

impl IdentityCodeService for LatvianCodeService {
    fn country(&self) -> Country {
        Country::LV
    }

    fn birth_date(&self, code: &str) -> Result<NaiveDate> {
        let normalized = Self::normalize(code);
        if normalized.starts_with(ANONYMOUS_PREFIX) {
            return Err(DecisionError::invalid_code(
                "anonymous code does not encode a birth date",
            ));
        }

        let d = digits(&normalized, 11)
            .ok_or_else(|| DecisionError::invalid_code("expected DDMMYY-CNNNK"))?;

        if check_digit(&d[..10]) != Some(d[10]) {
            return Err(DecisionError::invalid_code("checksum mismatch"));
        }

        let century = match d[6] {
            0 => 1800,
            1 => 1900,
            2 => 2000,
            other => {
                return Err(DecisionError::invalid_code(format!(
                    "unsupported century marker {}",
                    other
                )))
            }
        };

        let day = d[0] * 10 + d[1];
        let month = d[2] * 10 + d[3];
        let year = century + (d[4] * 10 + d[5]) as i32;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DecisionError::invalid_code(format!(
                "invalid birth date {:04}-{:02}-{:02}",
                year, month, day
            ))
        })
    }

    fn gender(&self, code: &str) -> Result<Option<Gender>> {
        // still validate, callers rely on the error for foreign codes
        self.birth_date(code)?;
        Ok(None)
    }

    /// legacy code with the hyphen; when `sequence` has no valid check digit
    /// the next serial that has one is used
    fn encode(&self, birth_date: NaiveDate, _gender: Gender, sequence: u16) -> Result<String> {
        let century = match birth_date.year() {
            1800..=1899 => 0,
            1900..=1999 => 1,
            2000..=2099 => 2,
            year => {
                return Err(DecisionError::invalid_code(format!(
                    "birth year {} cannot be encoded",
                    year
                )))
            }
        };
        let date_part = format!(
            "{:02}{:02}{:02}",
            birth_date.day(),
            birth_date.month(),
            birth_date.year() % 100
        );

        for serial in sequence..=999 {
            let serial_part = format!("{}{:03}", century, serial);
            let body = format!("{}{}", date_part, serial_part);
            let d = digits(&body, 10)
                .ok_or_else(|| DecisionError::invalid_code("encoding failed"))?;
            if let Some(check) = check_digit(&d) {
                return Ok(format!("{}-{}{}", date_part, serial_part, check));
            }
        }

        Err(DecisionError::invalid_code(format!(
            "no serial from {} yields a valid check digit",
            sequence
        )))
    }
}

/// none when the weighted sum leaves no single-digit check value
fn check_digit(d: &[u32]) -> Option<u32> {
    let sum: u32 = d.iter().zip(WEIGHTS.iter()).map(|(a, b)| a * b).sum();
    match (1101 - sum) % 11 {
        10 => None,
        check => Some(check),
    }
}
