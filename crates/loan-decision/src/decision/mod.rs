//! Loan decision engine: identity code checks, credit segmentation, age gating, scoring and
//! the amount/period searches that pick the most favourable approvable terms.

mod age;
mod config;
pub mod identity;
mod outcome;
pub mod router;
mod scoring;
mod segment;

#[cfg(test)]
mod tests;

pub use age::{AgeGate, AgeViolation};
pub use config::{
    DecisionConfig, DecisionConfigError, SegmentModifiers, MAXIMUM_LOAN_AMOUNT,
    MAXIMUM_LOAN_PERIOD, MINIMUM_LOAN_AMOUNT, MINIMUM_LOAN_PERIOD,
};
pub use identity::{EstonianCodeReader, IdentityCode, IdentityCodeError, IdentityCodeReader, Sex};
pub use outcome::{LoanDecision, NoValidLoanCause, PeriodAdjustment, RejectionReason};
pub use router::{decision_router, DecisionRequest, DecisionResponse};
pub use scoring::CreditScorer;
pub use segment::CreditSegment;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Requested loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: i64,
    pub period: i32,
}

/// Stateless engine applying the lending policy to one request at a time.
///
/// The engine holds no mutable state, so a single instance can be shared across threads.
pub struct DecisionEngine<R = EstonianCodeReader> {
    config: DecisionConfig,
    reader: R,
    age_gate: AgeGate,
    scorer: CreditScorer,
}

impl DecisionEngine<EstonianCodeReader> {
    /// Engine with the default policy and the Estonian personal code reader.
    pub fn standard() -> Self {
        Self::new(DecisionConfig::default(), EstonianCodeReader)
    }
}

impl<R> DecisionEngine<R>
where
    R: IdentityCodeReader,
{
    pub fn new(config: DecisionConfig, reader: R) -> Self {
        let age_gate = AgeGate::from(&config);
        let scorer = CreditScorer::new(&config);

        Self {
            config,
            reader,
            age_gate,
            scorer,
        }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide using today's local date for the age check.
    pub fn decide(&self, identity_code: &str, amount: i64, period: i32) -> LoanDecision {
        self.decide_on(identity_code, amount, period, Local::now().date_naive())
    }

    pub fn decide_on(
        &self,
        identity_code: &str,
        amount: i64,
        period: i32,
        today: NaiveDate,
    ) -> LoanDecision {
        let code = IdentityCode::from(identity_code);
        let request = LoanRequest { amount, period };

        let decision = match self.evaluate(&code, request, today) {
            Ok(decision) => decision,
            Err(reason) => LoanDecision::Rejected { reason },
        };

        info!(
            amount,
            period,
            approved = decision.is_approved(),
            outcome = %decision.summary(),
            "loan decision made"
        );
        decision
    }

    fn evaluate(
        &self,
        code: &IdentityCode,
        request: LoanRequest,
        today: NaiveDate,
    ) -> Result<LoanDecision, RejectionReason> {
        self.verify_inputs(code, request)?;

        let age = self
            .reader
            .age_on(code, today)
            .map_err(|_| RejectionReason::InvalidIdentityCode)?;
        self.age_gate
            .validate(age)
            .map_err(NoValidLoanCause::from)?;
        debug!(age, "age within eligibility window");

        let segment_key = self
            .reader
            .segment_key(code)
            .map_err(|_| RejectionReason::InvalidIdentityCode)?;
        let segment = CreditSegment::classify(segment_key);
        let credit_modifier = segment.credit_modifier(&self.config.segment_modifiers);
        if credit_modifier == 0 {
            return Err(NoValidLoanCause::CreditSegment.into());
        }
        debug!(segment = segment.label(), credit_modifier, "credit segment resolved");

        if let Some(amount) = self.approvable_amount(credit_modifier, request.period) {
            return Ok(LoanDecision::Approved {
                amount,
                period: request.period,
                adjustment: None,
            });
        }

        let adjusted_period = self
            .scorer
            .suitable_period(credit_modifier)
            .ok_or(NoValidLoanCause::NoViablePeriod)?;
        let amount = self
            .approvable_amount(credit_modifier, adjusted_period)
            .ok_or(NoValidLoanCause::NoViablePeriod)?;
        debug!(
            requested_period = request.period,
            adjusted_period, "requested period adjusted"
        );

        Ok(LoanDecision::Approved {
            amount,
            period: adjusted_period,
            adjustment: Some(PeriodAdjustment {
                requested_period: request.period,
                approved_period: adjusted_period,
            }),
        })
    }

    fn approvable_amount(&self, credit_modifier: i64, period: i32) -> Option<i64> {
        self.scorer
            .max_approved_amount(credit_modifier, period)
            .filter(|amount| *amount >= self.config.minimum_loan_amount)
    }

    /// Loan terms are checked before the identity code so an out-of-range amount is always
    /// reported as such.
    fn verify_inputs(
        &self,
        code: &IdentityCode,
        request: LoanRequest,
    ) -> Result<(), RejectionReason> {
        let config = &self.config;

        if request.amount < config.minimum_loan_amount
            || request.amount > config.maximum_loan_amount
        {
            return Err(RejectionReason::InvalidLoanAmount {
                requested: request.amount,
                minimum: config.minimum_loan_amount,
                maximum: config.maximum_loan_amount,
            });
        }

        if request.period < config.minimum_loan_period
            || request.period > config.maximum_loan_period
        {
            return Err(RejectionReason::InvalidLoanPeriod {
                requested: request.period,
                minimum: config.minimum_loan_period,
                maximum: config.maximum_loan_period,
            });
        }

        if !self.reader.is_valid(code) {
            return Err(RejectionReason::InvalidIdentityCode);
        }

        Ok(())
    }
}
