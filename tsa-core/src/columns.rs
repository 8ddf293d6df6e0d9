//! Column names of the Kaggle "Twitter US Airline Sentiment" CSV.

pub const ID: &str = "id";
pub const AIRLINE: &str = "airline";
pub const AIRLINE_SENTIMENT: &str = "airline_sentiment";
pub const AIRLINE_SENTIMENT_CONFIDENCE: &str = "airline_sentiment_confidence";
pub const TEXT: &str = "text";
pub const TWEET_CREATED: &str = "tweet_created";

/// Columns every bubble chart aggregation needs.
pub const BUBBLE_COLUMNS: [&str; 2] = [AIRLINE, AIRLINE_SENTIMENT];

/// Columns shown by the filtered table, in display order.
pub const FILTERED_TABLE_COLUMNS: [&str; 5] = [
    ID,
    AIRLINE_SENTIMENT,
    AIRLINE_SENTIMENT_CONFIDENCE,
    AIRLINE,
    TEXT,
];
