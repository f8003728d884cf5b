use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const MINIMUM_LOAN_AMOUNT: i64 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: i64 = 10000;
pub const MINIMUM_LOAN_PERIOD: i32 = 12;
pub const MAXIMUM_LOAN_PERIOD: i32 = 60;

/// Credit modifiers for the three eligible segments. Debtors carry no modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentModifiers {
    pub segment_1: i64,
    pub segment_2: i64,
    pub segment_3: i64,
}

impl Default for SegmentModifiers {
    fn default() -> Self {
        Self {
            segment_1: 100,
            segment_2: 300,
            segment_3: 1000,
        }
    }
}

/// Lending policy applied to every decision. Read-only once the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub minimum_loan_amount: i64,
    pub maximum_loan_amount: i64,
    pub minimum_loan_period: i32,
    pub maximum_loan_period: i32,
    pub segment_modifiers: SegmentModifiers,
    pub credit_score_threshold: Decimal,
    pub life_expectancy: u32,
    pub minimum_age: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            minimum_loan_amount: MINIMUM_LOAN_AMOUNT,
            maximum_loan_amount: MAXIMUM_LOAN_AMOUNT,
            minimum_loan_period: MINIMUM_LOAN_PERIOD,
            maximum_loan_period: MAXIMUM_LOAN_PERIOD,
            segment_modifiers: SegmentModifiers::default(),
            credit_score_threshold: dec!(0.1),
            life_expectancy: 80,
            minimum_age: 18,
        }
    }
}

impl DecisionConfig {
    /// Oldest age still eligible: the applicant must be able to repay the longest loan
    /// before reaching the life expectancy.
    pub fn maximum_age(&self) -> u32 {
        let longest_term_years = u32::try_from(self.maximum_loan_period / 12).unwrap_or(0);
        self.life_expectancy.saturating_sub(longest_term_years)
    }

    pub fn validate(&self) -> Result<(), DecisionConfigError> {
        if self.minimum_loan_amount <= 0 {
            return Err(DecisionConfigError::NonPositiveAmount(self.minimum_loan_amount));
        }
        if self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(DecisionConfigError::AmountBounds {
                min: self.minimum_loan_amount,
                max: self.maximum_loan_amount,
            });
        }
        if self.minimum_loan_period <= 0 {
            return Err(DecisionConfigError::NonPositivePeriod(self.minimum_loan_period));
        }
        if self.minimum_loan_period > self.maximum_loan_period {
            return Err(DecisionConfigError::PeriodBounds {
                min: self.minimum_loan_period,
                max: self.maximum_loan_period,
            });
        }
        if self.credit_score_threshold <= Decimal::ZERO {
            return Err(DecisionConfigError::NonPositiveThreshold(
                self.credit_score_threshold,
            ));
        }
        if self.maximum_age() < self.minimum_age {
            return Err(DecisionConfigError::AgeBounds {
                min: self.minimum_age,
                max: self.maximum_age(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionConfigError {
    #[error("minimum loan amount must be positive, found {0}")]
    NonPositiveAmount(i64),
    #[error("minimum loan amount {min} exceeds maximum {max}")]
    AmountBounds { min: i64, max: i64 },
    #[error("minimum loan period must be positive, found {0}")]
    NonPositivePeriod(i32),
    #[error("minimum loan period {min} exceeds maximum {max}")]
    PeriodBounds { min: i32, max: i32 },
    #[error("credit score threshold must be positive, found {0}")]
    NonPositiveThreshold(Decimal),
    #[error("maximum age {max} is below minimum age {min}")]
    AgeBounds { min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let config = DecisionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.maximum_age(), 75);
    }

    #[test]
    fn rejects_inverted_amount_bounds() {
        let config = DecisionConfig {
            minimum_loan_amount: 5000,
            maximum_loan_amount: 4000,
            ..DecisionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(DecisionConfigError::AmountBounds {
                min: 5000,
                max: 4000
            })
        );
    }

    #[test]
    fn rejects_terms_longer_than_any_borrower_can_repay() {
        let config = DecisionConfig {
            maximum_loan_period: 12 * 70,
            ..DecisionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DecisionConfigError::AgeBounds { min: 18, max: 10 })
        ));
    }
}
