//! The raw CSV table, loaded once per page and never mutated.
//!
//! Rows keep every field as text, in file order. A row shorter than the
//! header has *missing* values for the trailing columns (distinct from an
//! empty field), which tables render as [`MISSING_VALUE`](crate::MISSING_VALUE).

use crate::error::{LoadError, Result};
use flate2::read::GzDecoder;
use std::io::Read;

/// One CSV row. Fields are positional; resolve a column name to an index
/// with [`Dataset::column_index`] once and reuse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Value at `column`, or `None` when the row has no such field.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value at `column`, treating a missing field as the empty string.
    pub fn get_or_empty(&self, column: usize) -> &str {
        self.get(column).unwrap_or("")
    }
}

/// Parsed CSV: ordered headers plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from parts. Fails with [`LoadError::Empty`] when there
    /// are no rows, matching what loading an empty file does.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { headers, records })
    }

    /// Parse CSV text whose first line is the header row.
    ///
    /// Rows may be shorter or longer than the header; extra fields are kept
    /// but never addressed by a column name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tsa_core::Dataset;
    ///
    /// let ds = Dataset::from_csv_str("airline,airline_sentiment\nDelta,positive\n").unwrap();
    /// assert_eq!(ds.len(), 1);
    /// assert_eq!(ds.column_index("airline_sentiment"), Some(1));
    /// ```
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse CSV from any reader (a file, a decompressor, a byte slice).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for result in rdr.records() {
            let r = result?;
            records.push(Record::new(r.iter().map(str::to_string).collect()));
        }
        log::info!(
            "[TSA] dataset: loaded {} rows with {} columns",
            records.len(),
            headers.len()
        );
        Self::new(headers, records)
    }

    /// Parse gzip-compressed CSV bytes.
    pub fn from_gz_bytes(bytes: &[u8]) -> Result<Self> {
        let mut text = String::new();
        GzDecoder::new(bytes).read_to_string(&mut text)?;
        Self::from_csv_str(&text)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Check that every column in `required` is present in the header.
    ///
    /// On failure, the error lists the missing names in the order given.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoadError::MissingColumns(missing))
        }
    }

    /// Keep only the first `limit` rows, in file order.
    pub fn head(&self, limit: usize) -> Vec<&Record> {
        self.records.iter().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../fixtures/tweets_sample.csv");

    #[test]
    fn loads_fixture_in_file_order() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(ds.len(), 12);
        assert_eq!(ds.headers()[0], "id");
        assert_eq!(ds.records()[0].get(0), Some("570306133677760513"));
        assert_eq!(ds.records()[11].get(4), Some("Southwest"));
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        let text = ds.column_index("text").unwrap();
        let value = ds.records()[3].get(text).unwrap();
        assert!(value.contains("\"entertainment\""));
        assert!(value.contains("faces, they"));
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(Dataset::from_csv_str(""), Err(LoadError::Empty)));
    }

    #[test]
    fn header_only_file_is_an_error() {
        let result = Dataset::from_csv_str("airline,airline_sentiment\n");
        assert!(matches!(result, Err(LoadError::Empty)));
    }

    #[test]
    fn short_rows_have_missing_fields() {
        let ds = Dataset::from_csv_str("a,b,c\n1,2\n").unwrap();
        let row = &ds.records()[0];
        assert_eq!(row.get(1), Some("2"));
        assert_eq!(row.get(2), None);
        assert_eq!(row.get_or_empty(2), "");
    }

    #[test]
    fn require_columns_reports_missing_in_order() {
        let ds = Dataset::from_csv_str("airline,text\nDelta,hi\n").unwrap();
        assert!(ds.require_columns(&["airline"]).is_ok());
        match ds.require_columns(&["id", "airline", "airline_sentiment"]) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["id", "airline_sentiment"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn head_limits_rows() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(ds.head(5).len(), 5);
        assert_eq!(ds.head(100).len(), 12);
    }

    #[test]
    fn gzip_input_is_decompressed() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        let bytes = encoder.finish().unwrap();
        let ds = Dataset::from_gz_bytes(&bytes).unwrap();
        assert_eq!(ds.len(), 12);
    }

    #[test]
    fn corrupt_gzip_is_an_io_error() {
        let result = Dataset::from_gz_bytes(b"not gzip at all");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
