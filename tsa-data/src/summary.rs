//! Dataset overview used by the CLI `summary` command.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;
use tsa_core::TweetRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    /// Tweets per airline, in first-seen order.
    pub airlines: IndexMap<String, usize>,
    /// Tweets per sentiment, in first-seen order.
    pub sentiments: IndexMap<String, usize>,
    pub earliest: Option<DateTime<FixedOffset>>,
    pub latest: Option<DateTime<FixedOffset>>,
}

impl DatasetSummary {
    pub fn from_records(records: &[TweetRecord]) -> Self {
        let mut airlines: IndexMap<String, usize> = IndexMap::new();
        let mut sentiments: IndexMap<String, usize> = IndexMap::new();
        for r in records {
            *airlines.entry(r.airline.clone()).or_insert(0) += 1;
            *sentiments.entry(r.sentiment.clone()).or_insert(0) += 1;
        }
        let created = records.iter().filter_map(|r| r.created);
        Self {
            records: records.len(),
            airlines,
            sentiments,
            earliest: created.clone().min(),
            latest: created.max(),
        }
    }
}
