use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// National identity code exactly as submitted by the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityCode(pub String);

impl IdentityCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentityCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Failure to derive data from an identity code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityCodeError {
    #[error("identity code must be 11 digits, found {0:?}")]
    Malformed(String),
    #[error("identity code century marker {0} is not recognised")]
    UnknownCentury(u32),
    #[error("identity code encodes an impossible birth date")]
    InvalidBirthDate,
    #[error("identity code checksum mismatch (expected {expected}, found {found})")]
    ChecksumMismatch { expected: u32, found: u32 },
}

/// Collaborator that validates identity codes and extracts the data the engine relies on.
pub trait IdentityCodeReader: Send + Sync {
    fn birth_date(&self, code: &IdentityCode) -> Result<NaiveDate, IdentityCodeError>;

    fn segment_key(&self, code: &IdentityCode) -> Result<u16, IdentityCodeError>;

    fn is_valid(&self, code: &IdentityCode) -> bool {
        self.birth_date(code).is_ok()
    }

    /// Age in whole years on `today`. A birth date in the future counts as zero.
    fn age_on(&self, code: &IdentityCode, today: NaiveDate) -> Result<u32, IdentityCodeError> {
        let birth_date = self.birth_date(code)?;
        Ok(today.years_since(birth_date).unwrap_or(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Reader for Estonian personal codes (`GYYMMDDSSSC`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianCodeReader;

impl EstonianCodeReader {
    /// Build a valid personal code for the given birth date and three-digit serial.
    pub fn generate(
        sex: Sex,
        birth_date: NaiveDate,
        serial: u16,
    ) -> Result<IdentityCode, IdentityCodeError> {
        let century_offset = match birth_date.year() {
            1800..=1899 => 1,
            1900..=1999 => 3,
            2000..=2099 => 5,
            2100..=2199 => 7,
            _ => return Err(IdentityCodeError::InvalidBirthDate),
        };
        let marker = match sex {
            Sex::Male => century_offset,
            Sex::Female => century_offset + 1,
        };

        let body = format!(
            "{marker}{:02}{:02}{:02}{:03}",
            birth_date.year() % 100,
            birth_date.month(),
            birth_date.day(),
            serial % 1000
        );
        let digits = digits_of(&body).ok_or_else(|| IdentityCodeError::Malformed(body.clone()))?;
        let check = check_digit(&digits);
        Ok(IdentityCode(format!("{body}{check}")))
    }

    fn digits(code: &IdentityCode) -> Result<Vec<u32>, IdentityCodeError> {
        let raw = code.as_str();
        if raw.len() != CODE_LENGTH {
            return Err(IdentityCodeError::Malformed(raw.to_string()));
        }
        digits_of(raw).ok_or_else(|| IdentityCodeError::Malformed(raw.to_string()))
    }
}

impl IdentityCodeReader for EstonianCodeReader {
    fn birth_date(&self, code: &IdentityCode) -> Result<NaiveDate, IdentityCodeError> {
        let digits = Self::digits(code)?;

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            other => return Err(IdentityCodeError::UnknownCentury(other)),
        };
        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];
        let birth_date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(IdentityCodeError::InvalidBirthDate)?;

        let expected = check_digit(&digits[..10]);
        if expected != digits[10] {
            return Err(IdentityCodeError::ChecksumMismatch {
                expected,
                found: digits[10],
            });
        }

        Ok(birth_date)
    }

    fn segment_key(&self, code: &IdentityCode) -> Result<u16, IdentityCodeError> {
        self.birth_date(code)?;
        let digits = Self::digits(code)?;
        let key = digits[7..]
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + *digit as u16);
        Ok(key)
    }
}

fn digits_of(raw: &str) -> Option<Vec<u32>> {
    raw.chars().map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32]) -> u32 {
    let weighted = |weights: &[u32; 10]| -> u32 {
        digits
            .iter()
            .zip(weights.iter())
            .map(|(digit, weight)| digit * weight)
            .sum::<u32>()
            % 11
    };

    match weighted(&PRIMARY_WEIGHTS) {
        10 => match weighted(&SECONDARY_WEIGHTS) {
            10 => 0,
            remainder => remainder,
        },
        remainder => remainder,
    }
}
