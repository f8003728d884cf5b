use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::config::DecisionConfig;

const SCORE_SCALE: u32 = 10;
const PERIOD_DIVISOR: Decimal = dec!(10);

/// Primitive scoring rubric: `((modifier / amount) * period) / 10` against a fixed threshold.
///
/// Both searches below depend on the score falling as the amount grows and rising with the
/// period. Changing the formula means re-checking that before trusting the binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditScorer {
    threshold: Decimal,
    minimum_amount: i64,
    maximum_amount: i64,
    minimum_period: i32,
    maximum_period: i32,
}

impl CreditScorer {
    pub fn new(config: &DecisionConfig) -> Self {
        Self {
            threshold: config.credit_score_threshold,
            minimum_amount: config.minimum_loan_amount,
            maximum_amount: config.maximum_loan_amount,
            minimum_period: config.minimum_loan_period,
            maximum_period: config.maximum_loan_period,
        }
    }

    /// Each division is rounded half-up to ten fractional digits.
    pub fn score(&self, credit_modifier: i64, amount: i64, period: i32) -> Decimal {
        let per_unit = Decimal::from(credit_modifier)
            .checked_div(Decimal::from(amount))
            .unwrap_or(Decimal::ZERO)
            .round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        (per_unit * Decimal::from(period) / PERIOD_DIVISOR)
            .round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn approves(&self, credit_modifier: i64, amount: i64, period: i32) -> bool {
        self.score(credit_modifier, amount, period) >= self.threshold
    }

    /// Largest amount within bounds that clears the threshold for `period`.
    pub fn max_approved_amount(&self, credit_modifier: i64, period: i32) -> Option<i64> {
        let mut low = self.minimum_amount;
        let mut high = self.maximum_amount;
        let mut best = None;

        while low <= high {
            let mid = low + (high - low) / 2;
            if self.approves(credit_modifier, mid, period) {
                best = Some(mid);
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        best
    }

    /// Shortest period within bounds for which some amount is approvable.
    pub fn suitable_period(&self, credit_modifier: i64) -> Option<i32> {
        (self.minimum_period..=self.maximum_period).find(|period| {
            self.max_approved_amount(credit_modifier, *period)
                .is_some_and(|amount| amount >= self.minimum_amount)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> CreditScorer {
        CreditScorer::new(&DecisionConfig::default())
    }

    #[test]
    fn score_rounds_half_up_after_each_division() {
        let scorer = scorer();

        // 300 / 3600 = 0.0833333333 -> * 12 / 10 = 0.09999999996 -> 0.1000000000
        assert_eq!(scorer.score(300, 3600, 12), dec!(0.1000000000));
        assert!(scorer.approves(300, 3600, 12));
        assert!(!scorer.approves(300, 3601, 12));
    }

    #[test]
    fn max_amount_caps_at_upper_bound() {
        assert_eq!(scorer().max_approved_amount(1000, 12), Some(10000));
    }

    #[test]
    fn max_amount_is_none_when_minimum_fails() {
        assert_eq!(scorer().max_approved_amount(100, 12), None);
        assert_eq!(scorer().max_approved_amount(0, 60), None);
    }

    #[test]
    fn max_amount_matches_linear_scan() {
        let scorer = scorer();
        for (modifier, period) in [(100, 20), (100, 37), (300, 12), (300, 25), (1000, 12)] {
            let linear = (2000..=10000)
                .rev()
                .find(|amount| scorer.approves(modifier, *amount, period));
            assert_eq!(
                scorer.max_approved_amount(modifier, period),
                linear,
                "modifier {modifier} period {period}"
            );
        }
    }

    #[test]
    fn longer_periods_never_reduce_the_approvable_amount() {
        let scorer = scorer();
        for modifier in [100, 300, 1000] {
            let mut previous = None;
            for period in 12..=60 {
                let current = scorer.max_approved_amount(modifier, period);
                assert!(current >= previous, "modifier {modifier} period {period}");
                previous = current;
            }
        }
    }

    #[test]
    fn suitable_period_is_the_shortest_viable_one() {
        let scorer = scorer();
        assert_eq!(scorer.suitable_period(100), Some(20));
        assert_eq!(scorer.suitable_period(300), Some(12));
        assert_eq!(scorer.suitable_period(0), None);
    }
}
