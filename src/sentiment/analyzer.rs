use std::sync::Arc;
use log::debug;
use crate::twitter::TweetItem;
use super::models::{SentimentLabel, SentimentPercentages, SentimentTally};
use super::scorer::PolarityScorer;

#[derive(Clone)]
pub struct SentimentAnalyzer {
    scorer: Arc<dyn PolarityScorer>,
}

impl SentimentAnalyzer {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn score(&self, text: &str) -> (f64, SentimentLabel) {
        let compound = self.scorer.compound(text);
        (compound, SentimentLabel::from_compound(compound))
    }

    pub fn tally(&self, tweets: &[TweetItem]) -> SentimentTally {
        let mut tally = SentimentTally::default();
        for tweet in tweets {
            let (_, label) = self.score(tweet.text.trim());
            tally.record(label);
        }
        debug!("Sentiment tally over {} tweets: {:?}", tweets.len(), tally);
        tally
    }

    pub fn aggregate(&self, tweets: &[TweetItem]) -> SentimentPercentages {
        self.tally(tweets).percentages()
    }
}
