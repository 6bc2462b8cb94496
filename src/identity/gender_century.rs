//! `GYYMMDDSSSC` codes shared by Estonia and Lithuania.
//!
//! G encodes century and gender (odd male, even female, 1-2 for the 1800s,
//! 3-4 for the 1900s, 5-6 for the 2000s), SSS is a serial number and C a
//! mod-11 check digit.

use chrono::{Datelike, NaiveDate};

use super::digits;
use crate::errors::{DecisionError, Result};
use crate::types::Gender;

const CODE_LENGTH: usize = 11;
const FIRST_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

pub(crate) struct ParsedCode {
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

pub(crate) fn parse(code: &str) -> Result<ParsedCode> {
    let d = digits(code.trim(), CODE_LENGTH).ok_or_else(|| {
        DecisionError::invalid_code(format!("expected {} digits", CODE_LENGTH))
    })?;

    if check_digit(&d[..10]) != d[10] {
        return Err(DecisionError::invalid_code("checksum mismatch"));
    }

    let (century, gender) = match d[0] {
        1 => (1800, Gender::Male),
        2 => (1800, Gender::Female),
        3 => (1900, Gender::Male),
        4 => (1900, Gender::Female),
        5 => (2000, Gender::Male),
        6 => (2000, Gender::Female),
        other => {
            return Err(DecisionError::invalid_code(format!(
                "unsupported century and gender marker {}",
                other
            )))
        }
    };

    let year = century + (d[1] * 10 + d[2]) as i32;
    let month = d[3] * 10 + d[4];
    let day = d[5] * 10 + d[6];
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DecisionError::invalid_code(format!("invalid birth date {:04}-{:02}-{:02}", year, month, day))
    })?;

    Ok(ParsedCode { birth_date, gender })
}

pub(crate) fn encode(birth_date: NaiveDate, gender: Gender, sequence: u16) -> Result<String> {
    if sequence > 999 {
        return Err(DecisionError::invalid_code("serial number must be below 1000"));
    }

    let century_index = match birth_date.year() {
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
    let marker = 1 + 2 * century_index + if gender == Gender::Female { 1 } else { 0 };

    let body = format!(
        "{}{:02}{:02}{:02}{:03}",
        marker,
        birth_date.year() % 100,
        birth_date.month(),
        birth_date.day(),
        sequence
    );
    let d = digits(&body, 10).ok_or_else(|| DecisionError::invalid_code("encoding failed"))?;

    Ok(format!("{}{}", body, check_digit(&d)))
}

fn check_digit(d: &[u32]) -> u32 {
    let weighted = |weights: &[u32; 10]| -> u32 {
        d.iter().zip(weights.iter()).map(|(a, b)| a * b).sum::<u32>() % 11
    };

    match weighted(&FIRST_WEIGHTS) {
        10 => match weighted(&SECOND_WEIGHTS) {
            10 => 0,
            second => second,
        },
        first => first,
    }
}
