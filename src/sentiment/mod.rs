mod analyzer;
mod models;
mod scorer;

pub use analyzer::SentimentAnalyzer;
pub use models::{SentimentLabel, SentimentPercentages, SentimentTally};
pub use scorer::{PolarityScorer, VaderScorer};
