use super::config::SegmentModifiers;
use serde::{Deserialize, Serialize};

/// Credit segment derived from the last four digits of the identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSegment {
    Debtor,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    /// Debt 0000..2499, segment 1 2500..4999, segment 2 5000..7499, segment 3 7500..9999.
    pub fn classify(segment_key: u16) -> Self {
        match segment_key {
            0..=2499 => Self::Debtor,
            2500..=4999 => Self::Segment1,
            5000..=7499 => Self::Segment2,
            _ => Self::Segment3,
        }
    }

    /// Score numerator for the segment; zero marks an ineligible debtor.
    pub fn credit_modifier(self, modifiers: &SegmentModifiers) -> i64 {
        match self {
            Self::Debtor => 0,
            Self::Segment1 => modifiers.segment_1,
            Self::Segment2 => modifiers.segment_2,
            Self::Segment3 => modifiers.segment_3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Debtor => "debtor",
            Self::Segment1 => "segment 1",
            Self::Segment2 => "segment 2",
            Self::Segment3 => "segment 3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_exact() {
        let cases = [
            (0, CreditSegment::Debtor),
            (2499, CreditSegment::Debtor),
            (2500, CreditSegment::Segment1),
            (4999, CreditSegment::Segment1),
            (5000, CreditSegment::Segment2),
            (7499, CreditSegment::Segment2),
            (7500, CreditSegment::Segment3),
            (9999, CreditSegment::Segment3),
        ];

        for (key, expected) in cases {
            assert_eq!(CreditSegment::classify(key), expected, "key {key}");
        }
    }

    #[test]
    fn debtors_carry_no_modifier() {
        let modifiers = SegmentModifiers::default();
        assert_eq!(CreditSegment::Debtor.credit_modifier(&modifiers), 0);
        assert_eq!(CreditSegment::Segment1.credit_modifier(&modifiers), 100);
        assert_eq!(CreditSegment::Segment2.credit_modifier(&modifiers), 300);
        assert_eq!(CreditSegment::Segment3.credit_modifier(&modifiers), 1000);
    }
}
