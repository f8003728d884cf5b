use serde::{Deserialize, Serialize};

use super::age::AgeViolation;

/// Final answer for a single loan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoanDecision {
    Approved {
        amount: i64,
        period: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        adjustment: Option<PeriodAdjustment>,
    },
    Rejected {
        reason: RejectionReason,
    },
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved { .. })
    }

    pub fn approved_amount(&self) -> Option<i64> {
        match self {
            LoanDecision::Approved { amount, .. } => Some(*amount),
            LoanDecision::Rejected { .. } => None,
        }
    }

    pub fn approved_period(&self) -> Option<i32> {
        match self {
            LoanDecision::Approved { period, .. } => Some(*period),
            LoanDecision::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            LoanDecision::Approved { .. } => None,
            LoanDecision::Rejected { reason } => Some(reason),
        }
    }

    /// Adjustment note for approvals with a changed period, or the rejection summary.
    pub fn note(&self) -> Option<String> {
        match self {
            LoanDecision::Approved { adjustment, .. } => {
                adjustment.as_ref().map(PeriodAdjustment::summary)
            }
            LoanDecision::Rejected { reason } => Some(reason.summary()),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            LoanDecision::Approved {
                amount,
                period,
                adjustment: None,
            } => format!("approved {amount} over {period} months"),
            LoanDecision::Approved {
                amount,
                period,
                adjustment: Some(adjustment),
            } => format!(
                "approved {amount} over {period} months ({})",
                adjustment.summary()
            ),
            LoanDecision::Rejected { reason } => reason.summary(),
        }
    }
}

/// Records that the requested period had no approvable amount and a longer one was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAdjustment {
    pub requested_period: i32,
    pub approved_period: i32,
}

impl PeriodAdjustment {
    pub fn summary(&self) -> String {
        format!(
            "Adjusted period from {} to {} months for eligibility",
            self.requested_period, self.approved_period
        )
    }
}

/// Why a request was turned down. The first three reasons describe malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidIdentityCode,
    InvalidLoanAmount { requested: i64, minimum: i64, maximum: i64 },
    InvalidLoanPeriod { requested: i32, minimum: i32, maximum: i32 },
    NoValidLoan { cause: NoValidLoanCause },
}

impl RejectionReason {
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, RejectionReason::NoValidLoan { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            RejectionReason::InvalidIdentityCode => "Invalid personal ID code!".to_string(),
            RejectionReason::InvalidLoanAmount {
                requested,
                minimum,
                maximum,
            } => format!("Invalid loan amount! {requested} is outside {minimum}..={maximum}"),
            RejectionReason::InvalidLoanPeriod {
                requested,
                minimum,
                maximum,
            } => format!("Invalid loan period! {requested} is outside {minimum}..={maximum}"),
            RejectionReason::NoValidLoan { cause } => cause.summary(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoValidLoanCause {
    Age(AgeViolation),
    CreditSegment,
    NoViablePeriod,
}

impl NoValidLoanCause {
    pub fn summary(&self) -> String {
        match self {
            NoValidLoanCause::Age(violation) => violation.to_string(),
            NoValidLoanCause::CreditSegment => {
                "No valid loan found due to credit segment!".to_string()
            }
            NoValidLoanCause::NoViablePeriod => "No valid loan found for any period!".to_string(),
        }
    }
}

impl From<NoValidLoanCause> for RejectionReason {
    fn from(cause: NoValidLoanCause) -> Self {
        RejectionReason::NoValidLoan { cause }
    }
}

impl From<AgeViolation> for NoValidLoanCause {
    fn from(violation: AgeViolation) -> Self {
        NoValidLoanCause::Age(violation)
    }
}
