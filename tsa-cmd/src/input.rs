//! Dataset loading from a local file or an http(s) URL.

use anyhow::Context;
use log::info;
use reqwest::{Client, StatusCode};
use tsa_core::Dataset;

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Read the raw bytes of `input`.
pub async fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    if is_url(input) {
        info!("Fetching dataset from {}", input);
        let response = Client::new()
            .get(input)
            .send()
            .await
            .with_context(|| format!("request for {} failed", input))?;
        if response.status() != StatusCode::OK {
            anyhow::bail!("bad response status for {}: {}", input, response.status());
        }
        Ok(response.bytes().await?.to_vec())
    } else {
        info!("Reading dataset from {}", input);
        tokio::fs::read(input)
            .await
            .with_context(|| format!("failed to read {}", input))
    }
}

/// Parse `bytes` as CSV, gunzipping first when `name` ends in `.gz`.
pub fn parse_dataset(name: &str, bytes: &[u8]) -> anyhow::Result<Dataset> {
    let dataset = if name.ends_with(".gz") {
        Dataset::from_gz_bytes(bytes)
    } else {
        Dataset::from_reader(bytes)
    };
    dataset.with_context(|| format!("error reading CSV file {}", name))
}

pub async fn load_dataset(input: &str) -> anyhow::Result<Dataset> {
    let bytes = read_input(input).await?;
    parse_dataset(input, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/tweets_sample.csv");

    #[tokio::test]
    async fn loads_local_file() {
        let ds = load_dataset(FIXTURE).await.unwrap();
        assert_eq!(ds.len(), 12);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = load_dataset("/definitely/not/here.csv").await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn empty_csv_is_an_error() {
        let err = parse_dataset("empty.csv", b"").unwrap_err();
        assert!(format!("{:#}", err).contains("contains no data"));
    }

    #[test]
    fn recognises_urls() {
        assert!(is_url("https://example.com/tweets.csv"));
        assert!(!is_url("data/tweets.csv"));
    }
}
