//! The static "first N rows, sorted by confidence" table.

use serde::Serialize;
use tsa_core::columns;
use tsa_core::error::Result;
use tsa_core::number::parse_float_prefix;
use tsa_core::{Dataset, MISSING_VALUE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterConfig {
    /// Rows kept from the top of the file.
    pub limit: usize,
    /// Column coerced to a number (failures become 0) and sorted ascending.
    pub sort_column: String,
    /// Columns shown, in display order.
    pub columns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            limit: 40,
            sort_column: columns::AIRLINE_SENTIMENT_CONFIDENCE.to_string(),
            columns: columns::FILTERED_TABLE_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredTable {
    pub columns: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FilteredTable {
    /// Take the first `limit` rows, coerce and sort by `sort_column`, and
    /// project onto `columns`.
    ///
    /// Fails with `MissingColumns` when any display column (or the sort
    /// column) is absent from the header.
    pub fn build(dataset: &Dataset, config: &FilterConfig) -> Result<Self> {
        let mut required: Vec<&str> = config.columns.iter().map(String::as_str).collect();
        if !required.contains(&config.sort_column.as_str()) {
            required.push(&config.sort_column);
        }
        dataset.require_columns(&required)?;

        let sort_idx = dataset.column_index(&config.sort_column);
        let indices: Vec<Option<usize>> = config
            .columns
            .iter()
            .map(|c| dataset.column_index(c))
            .collect();

        let mut limited: Vec<(f64, &tsa_core::Record)> = dataset
            .head(config.limit)
            .into_iter()
            .map(|r| {
                let key = sort_idx
                    .and_then(|i| r.get(i))
                    .and_then(parse_float_prefix)
                    .filter(|v| !v.is_nan())
                    .unwrap_or(0.0);
                (key, r)
            })
            .collect();

        limited.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let rows = limited
            .iter()
            .map(|(key, r)| {
                config
                    .columns
                    .iter()
                    .zip(&indices)
                    .map(|(name, idx)| {
                        if *name == config.sort_column {
                            format_number(*key)
                        } else {
                            idx.and_then(|i| r.get(i))
                                .unwrap_or(MISSING_VALUE)
                                .to_string()
                        }
                    })
                    .collect()
            })
            .collect::<Vec<Vec<String>>>();

        log::info!("[TSA] filtered: table created with {} rows", rows.len());
        Ok(Self {
            columns: config.columns.clone(),
            headers: config.columns.iter().map(|c| header_label(c)).collect(),
            rows,
        })
    }
}

/// `airline_sentiment` becomes `AIRLINE SENTIMENT`.
pub fn header_label(column: &str) -> String {
    column.replace('_', " ").to_uppercase()
}

/// Display a coerced number the way the browser prints it (`1`, `0.3486`).
pub fn format_number(v: f64) -> String {
    // `-0` prints as `0` in the browser.
    let v = if v == 0.0 { 0.0 } else { v };
    if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if v.abs() >= 1e21 || (v != 0.0 && v.abs() < 1e-6) {
        let exp = format!("{:e}", v);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsa_core::LoadError;

    const SAMPLE: &str = include_str!("../../fixtures/tweets_sample.csv");

    fn sample() -> Dataset {
        Dataset::from_csv_str(SAMPLE).unwrap()
    }

    #[test]
    fn headers_are_upper_cased_with_spaces() {
        let t = FilteredTable::build(&sample(), &FilterConfig::default()).unwrap();
        assert_eq!(
            t.headers,
            vec!["ID", "AIRLINE SENTIMENT", "AIRLINE SENTIMENT CONFIDENCE", "AIRLINE", "TEXT"]
        );
    }

    #[test]
    fn sorts_ascending_with_failures_as_zero() {
        let t = FilteredTable::build(&sample(), &FilterConfig::default()).unwrap();
        assert_eq!(t.rows.len(), 12);
        let confidence: Vec<&str> = t.rows.iter().map(|r| r[2].as_str()).collect();
        assert_eq!(
            confidence,
            vec!["0", "0", "0.3486", "0.35", "0.6837", "0.6842", "0.9", "1", "1", "1", "1", "1"]
        );
        // The two zero rows keep file order: empty confidence, then "abc".
        assert_eq!(t.rows[0][0], "568928195581513730");
        assert_eq!(t.rows[1][0], "567588278875213826");
    }

    #[test]
    fn limit_keeps_first_rows_in_file_order() {
        let config = FilterConfig {
            limit: 3,
            ..FilterConfig::default()
        };
        let t = FilteredTable::build(&sample(), &config).unwrap();
        let ids: Vec<&str> = t.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(
            ids,
            vec!["570301130888122368", "570301083672813571", "570306133677760513"]
        );
    }

    #[test]
    fn short_rows_show_na() {
        let ds = Dataset::from_csv_str(
            "id,airline_sentiment,airline_sentiment_confidence,airline,text\n1,positive,0.5\n",
        )
        .unwrap();
        let t = FilteredTable::build(&ds, &FilterConfig::default()).unwrap();
        assert_eq!(t.rows[0], vec!["1", "positive", "0.5", "N/A", "N/A"]);
    }

    #[test]
    fn missing_display_columns_abort() {
        let ds = Dataset::from_csv_str("airline,airline_sentiment\nDelta,positive\n").unwrap();
        match FilteredTable::build(&ds, &FilterConfig::default()) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["id", "airline_sentiment_confidence", "text"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.6842), "0.6842");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123456789.0), "123456789");
    }

    #[test]
    fn negative_zero_confidence_shows_as_zero() {
        let ds = Dataset::from_csv_str(
            "id,airline_sentiment,airline_sentiment_confidence,airline,text\n1,neutral,-0,Delta,hi\n",
        )
        .unwrap();
        let t = FilteredTable::build(&ds, &FilterConfig::default()).unwrap();
        assert_eq!(t.rows[0][2], "0");
    }
}
