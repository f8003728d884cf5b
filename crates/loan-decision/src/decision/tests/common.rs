use std::sync::Arc;

use chrono::NaiveDate;

use crate::decision::identity::{
    EstonianCodeReader, IdentityCode, IdentityCodeError, IdentityCodeReader, Sex,
};
use crate::decision::{decision_router, DecisionConfig, DecisionEngine};

pub(super) const DEBTOR_CODE: &str = "37605030299";
pub(super) const SEGMENT_1_CODE: &str = "50307172740";
pub(super) const SEGMENT_2_CODE: &str = "38411266610";
pub(super) const SEGMENT_3_CODE: &str = "35006069515";

/// Fixed evaluation date so age-dependent fixtures stay stable.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 27).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::standard()
}

/// Segment 2 code (serial 700) for an applicant born on the given date.
pub(super) fn code_born_on(year: i32, month: u32, day: u32) -> String {
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).expect("valid birth date");
    EstonianCodeReader::generate(Sex::Male, birth_date, 700)
        .expect("code generated")
        .0
}

/// Reader that trusts any code and answers with fixed values.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedReader {
    pub(super) birth_date: NaiveDate,
    pub(super) segment_key: u16,
}

impl IdentityCodeReader for FixedReader {
    fn birth_date(&self, _code: &IdentityCode) -> Result<NaiveDate, IdentityCodeError> {
        Ok(self.birth_date)
    }

    fn segment_key(&self, _code: &IdentityCode) -> Result<u16, IdentityCodeError> {
        Ok(self.segment_key)
    }
}

pub(super) fn fixed_engine(segment_key: u16) -> DecisionEngine<FixedReader> {
    DecisionEngine::new(
        DecisionConfig::default(),
        FixedReader {
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date"),
            segment_key,
        },
    )
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(engine()))
}
