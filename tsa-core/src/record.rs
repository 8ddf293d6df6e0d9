use crate::columns;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::number::parse_float_prefix;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Timestamp format of the `tweet_created` column, e.g. `2015-02-24 11:35:52 -0800`.
pub const TWEET_CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Typed view of one tweet, validated once when the dataset is loaded.
///
/// `airline` and `sentiment` are required columns; a row that lacks the
/// field yields an empty string, which the aggregator skips with a warning.
/// The remaining fields are optional because the columns may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetRecord {
    pub id: Option<String>,
    pub airline: String,
    pub sentiment: String,
    pub confidence: Option<f64>,
    pub text: Option<String>,
    pub created: Option<DateTime<FixedOffset>>,
}

impl TweetRecord {
    /// Project every row of `dataset` into a `TweetRecord`.
    ///
    /// Fails only when `airline` or `airline_sentiment` is missing from the
    /// header. Unparsable confidence or timestamp values become `None`.
    pub fn from_dataset(dataset: &Dataset) -> Result<Vec<TweetRecord>> {
        dataset.require_columns(&columns::BUBBLE_COLUMNS)?;

        let airline = dataset.column_index(columns::AIRLINE);
        let sentiment = dataset.column_index(columns::AIRLINE_SENTIMENT);
        let id = dataset.column_index(columns::ID);
        let confidence = dataset.column_index(columns::AIRLINE_SENTIMENT_CONFIDENCE);
        let text = dataset.column_index(columns::TEXT);
        let created = dataset.column_index(columns::TWEET_CREATED);

        let field = |r: &crate::Record, idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| r.get(i)).map(str::to_string)
        };

        let records: Vec<TweetRecord> = dataset
            .records()
            .iter()
            .map(|r| TweetRecord {
                id: field(r, id),
                airline: field(r, airline).unwrap_or_default(),
                sentiment: field(r, sentiment).unwrap_or_default(),
                confidence: confidence
                    .and_then(|i| r.get(i))
                    .and_then(parse_float_prefix),
                text: field(r, text),
                created: created
                    .and_then(|i| r.get(i))
                    .and_then(parse_tweet_created),
            })
            .collect();

        let undated = records.iter().filter(|r| r.created.is_none()).count();
        if created.is_some() && undated > 0 {
            log::warn!("[TSA] record: {} rows have no parsable tweet_created", undated);
        }
        Ok(records)
    }
}

/// Parse a `tweet_created` value, returning `None` for anything malformed.
pub fn parse_tweet_created(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s.trim(), TWEET_CREATED_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadError;

    const SAMPLE: &str = include_str!("../../fixtures/tweets_sample.csv");

    #[test]
    fn projects_fixture_rows() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        let records = TweetRecord::from_dataset(&ds).unwrap();
        assert_eq!(records.len(), 12);

        let first = &records[0];
        assert_eq!(first.id.as_deref(), Some("570306133677760513"));
        assert_eq!(first.airline, "Virgin America");
        assert_eq!(first.sentiment, "neutral");
        assert_eq!(first.confidence, Some(1.0));
        assert!(first.created.is_some());
    }

    #[test]
    fn malformed_optional_fields_become_none() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        let records = TweetRecord::from_dataset(&ds).unwrap();
        // Row 8 has an empty confidence, row 11 has "abc" and a bad date.
        assert_eq!(records[7].confidence, None);
        assert_eq!(records[10].confidence, None);
        assert_eq!(records[10].created, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let ds = Dataset::from_csv_str("airline,text\nDelta,hi\n").unwrap();
        match TweetRecord::from_dataset(&ds) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["airline_sentiment"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let ds = Dataset::from_csv_str("airline,airline_sentiment\nDelta,positive\n").unwrap();
        let records = TweetRecord::from_dataset(&ds).unwrap();
        assert_eq!(records[0].id, None);
        assert_eq!(records[0].confidence, None);
        assert_eq!(records[0].created, None);
    }

    #[test]
    fn parses_created_timestamp_with_offset() {
        let dt = parse_tweet_created("2015-02-24 11:35:52 -0800").unwrap();
        assert_eq!(dt.to_rfc3339(), "2015-02-24T11:35:52-08:00");
        assert!(parse_tweet_created("yesterday").is_none());
    }
}
