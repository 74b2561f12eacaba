use vader_sentiment::SentimentIntensityAnalyzer;

/// Maps text to a compound polarity in `[-1, 1]`. Must be deterministic.
pub trait PolarityScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon and rule based scoring backed by VADER.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obvious_phrases_have_expected_polarity() {
        let scorer = VaderScorer::new();
        assert!(scorer.compound("I love AI") >= 0.05);
        assert!(scorer.compound("I hate bugs") <= -0.05);
        assert!(scorer.compound("The meeting is on Tuesday").abs() < 0.05);
    }

    #[test]
    fn scores_are_bounded_and_deterministic() {
        let scorer = VaderScorer::new();
        let text = "This is AMAZING!!! best day ever :)";
        let first = scorer.compound(text);
        assert_eq!(first, scorer.compound(text));
        assert!((-1.0..=1.0).contains(&first));
    }
}
