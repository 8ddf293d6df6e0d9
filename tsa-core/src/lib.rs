//! Core types and CSV loading for the airline tweet sentiment dataset.
//!
//! This crate provides:
//! - `dataset`: the raw CSV table (ordered headers plus rows), loaded once
//! - `record`: `TweetRecord`, the typed projection used by aggregations
//! - `number`: loose number coercion used by sorting and the filtered table
//! - `error`: `LoadError`, the single failure type for loading

pub mod columns;
pub mod dataset;
pub mod error;
pub mod number;
pub mod record;

pub use dataset::{Dataset, Record};
pub use error::LoadError;
pub use record::TweetRecord;

/// Sentinel shown in table cells whose column is absent from a row.
pub const MISSING_VALUE: &str = "N/A";
