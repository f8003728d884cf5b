use super::config::DecisionConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum AgeViolation {
    #[error("customer is too young for a loan (minimum age: {minimum_age})")]
    TooYoung { age: u32, minimum_age: u32 },
    #[error("customer exceeds maximum age limit ({maximum_age})")]
    TooOld { age: u32, maximum_age: u32 },
}

/// Eligibility window for the applicant's age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGate {
    minimum_age: u32,
    maximum_age: u32,
}

impl AgeGate {
    pub fn new(minimum_age: u32, maximum_age: u32) -> Self {
        Self {
            minimum_age,
            maximum_age,
        }
    }

    pub fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    pub fn maximum_age(&self) -> u32 {
        self.maximum_age
    }

    pub fn validate(&self, age: u32) -> Result<(), AgeViolation> {
        if age < self.minimum_age {
            return Err(AgeViolation::TooYoung {
                age,
                minimum_age: self.minimum_age,
            });
        }
        if age > self.maximum_age {
            return Err(AgeViolation::TooOld {
                age,
                maximum_age: self.maximum_age,
            });
        }
        Ok(())
    }
}

impl From<&DecisionConfig> for AgeGate {
    fn from(config: &DecisionConfig) -> Self {
        Self::new(config.minimum_age, config.maximum_age())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AgeGate {
        AgeGate::from(&DecisionConfig::default())
    }

    #[test]
    fn window_derives_from_life_expectancy_and_longest_term() {
        let gate = gate();
        assert_eq!(gate.minimum_age(), 18);
        assert_eq!(gate.maximum_age(), 80 - 60 / 12);
    }

    #[test]
    fn bounds_are_inclusive() {
        let gate = gate();

        assert_eq!(
            gate.validate(17),
            Err(AgeViolation::TooYoung {
                age: 17,
                minimum_age: 18
            })
        );
        assert_eq!(gate.validate(18), Ok(()));
        assert_eq!(gate.validate(75), Ok(()));
        assert_eq!(
            gate.validate(76),
            Err(AgeViolation::TooOld {
                age: 76,
                maximum_age: 75
            })
        );
    }
}
