use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    pub fn from_compound(compound: f64) -> Self {
        if compound >= Self::POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= Self::NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Shares of the total, rounded to two decimals. All zero when empty.
    pub fn percentages(&self) -> SentimentPercentages {
        let total = self.total();
        if total == 0 {
            return SentimentPercentages::default();
        }
        let pct = |count: usize| round2(count as f64 / total as f64 * 100.0);
        SentimentPercentages {
            positive: pct(self.positive),
            negative: pct(self.negative),
            neutral: pct(self.neutral),
        }
    }
}

/// Two decimals, exact halves to even (`3.125` -> `3.12`).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Negative")]
    pub negative: f64,
    #[serde(rename = "Neutral")]
    pub neutral: f64,
}

impl SentimentPercentages {
    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_partition_the_compound_range() {
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn every_compound_value_gets_exactly_one_label() {
        for step in -1000..=1000 {
            let compound = step as f64 / 1000.0;
            let label = SentimentLabel::from_compound(compound);
            let expected = if compound >= 0.05 {
                SentimentLabel::Positive
            } else if compound <= -0.05 {
                SentimentLabel::Negative
            } else {
                SentimentLabel::Neutral
            };
            assert_eq!(label, expected, "compound {}", compound);
        }
    }

    #[test]
    fn empty_tally_is_all_zero() {
        assert_eq!(SentimentTally::default().percentages(), SentimentPercentages::default());
    }

    #[test]
    fn thirds_round_to_two_decimals() {
        let tally = SentimentTally { positive: 1, negative: 1, neutral: 1 };
        let pct = tally.percentages();
        assert_eq!(pct.positive, 33.33);
        assert_eq!(pct.negative, 33.33);
        assert_eq!(pct.neutral, 33.33);
        assert!((pct.sum() - 100.0).abs() < 0.05);
    }

    #[test]
    fn exact_halves_round_to_even() {
        let tally = SentimentTally { positive: 1, negative: 0, neutral: 31 };
        let pct = tally.percentages();
        assert_eq!(pct.positive, 3.12);
        assert_eq!(pct.neutral, 96.88);
        assert_eq!(pct.negative, 0.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        for positive in 0..7 {
            for negative in 0..7 {
                for neutral in 0..7 {
                    let tally = SentimentTally { positive, negative, neutral };
                    if tally.total() == 0 {
                        continue;
                    }
                    let sum = tally.percentages().sum();
                    assert!((sum - 100.0).abs() <= 0.02, "{:?} sums to {}", tally, sum);
                }
            }
        }
    }

    #[test]
    fn serializes_with_label_keys() {
        let pct = SentimentPercentages { positive: 50.0, negative: 50.0, neutral: 0.0 };
        let value = serde_json::to_value(pct).unwrap();
        assert_eq!(value, serde_json::json!({"Positive": 50.0, "Negative": 50.0, "Neutral": 0.0}));
    }
}
