//! Builds the printable [`Table`] for each subcommand.

use crate::output::Table;
use anyhow::bail;
use chrono::{DateTime, FixedOffset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsa_core::{Dataset, TweetRecord};
use tsa_data::bubbles::{aggregate_bubbles, bubble_views, AirlineFilter, ChartConfig, RadiusScale};
use tsa_data::{DatasetSummary, FilterConfig, FilteredTable, SortableTable};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Bubble sizes and start positions, optionally narrowed to one airline.
///
/// The radius scale always spans the full aggregation, as on the chart.
pub fn bubbles(dataset: &Dataset, airline: &str, seed: Option<u64>) -> anyhow::Result<Table> {
    let records = TweetRecord::from_dataset(dataset)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = ChartConfig::default();
    let all = aggregate_bubbles(&records, &config, &mut rng);
    let scale = RadiusScale::new(&all, &config);
    let visible = AirlineFilter::from_option_value(airline).apply(&all);

    let mut table = Table::new(headers(&[
        "airline",
        "sentiment",
        "count",
        "radius",
        "collide_radius",
        "x",
        "y",
    ]));
    for view in bubble_views(&visible, &scale, &config) {
        table.push(vec![
            view.airline,
            view.sentiment,
            view.count.to_string(),
            format!("{:.1}", view.radius),
            format!("{:.1}", view.collide_radius),
            format!("{:.1}", view.x),
            format!("{:.1}", view.y),
        ]);
    }
    Ok(table)
}

/// The first `limit` rows sorted by ascending confidence.
pub fn filtered(dataset: &Dataset, limit: usize) -> anyhow::Result<Table> {
    let config = FilterConfig {
        limit,
        ..FilterConfig::default()
    };
    let filtered = FilteredTable::build(dataset, &config)?;
    Ok(Table {
        headers: filtered.headers,
        rows: filtered.rows,
    })
}

/// Apply header activations in order and show the resulting table.
pub fn sorted(dataset: &Dataset, columns: &[String], head: Option<usize>) -> anyhow::Result<Table> {
    let mut sortable = SortableTable::new(dataset);
    for column in columns {
        if sortable.activate_by_name(column).is_none() {
            bail!(
                "unknown column {:?}; available columns: {}",
                column,
                sortable.columns().join(", ")
            );
        }
    }

    let mut table = Table::new(sortable.header_labels());
    let width = sortable.columns().len();
    let limit = head.unwrap_or(sortable.len());
    for row in sortable.rows().iter().take(limit) {
        table.push((0..width).map(|i| row.display(i).to_string()).collect());
    }
    Ok(table)
}

fn format_date(date: Option<DateTime<FixedOffset>>) -> String {
    date.map(|d| d.to_rfc3339()).unwrap_or_else(|| "-".to_string())
}

/// Record count, date span and per-airline / per-sentiment totals.
pub fn summary(dataset: &Dataset) -> anyhow::Result<Table> {
    let records = TweetRecord::from_dataset(dataset)?;
    let summary = DatasetSummary::from_records(&records);

    let mut table = Table::new(headers(&["metric", "value"]));
    table.push(vec!["records".into(), summary.records.to_string()]);
    table.push(vec!["earliest".into(), format_date(summary.earliest)]);
    table.push(vec!["latest".into(), format_date(summary.latest)]);
    for (airline, count) in &summary.airlines {
        table.push(vec![format!("airline: {}", airline), count.to_string()]);
    }
    for (sentiment, count) in &summary.sentiments {
        table.push(vec![format!("sentiment: {}", sentiment), count.to_string()]);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../fixtures/tweets_sample.csv");

    fn sample() -> Dataset {
        Dataset::from_csv_str(SAMPLE).unwrap()
    }

    #[test]
    fn bubbles_for_one_airline() {
        let table = bubbles(&sample(), "Delta", Some(3)).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][..4], ["Delta", "positive", "2", "130.0"]);
        assert_eq!(table.rows[1][1], "negative");
    }

    #[test]
    fn bubbles_are_reproducible_with_a_seed() {
        let a = bubbles(&sample(), "all", Some(9)).unwrap();
        let b = bubbles(&sample(), "all", Some(9)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rows.len(), 8);
    }

    #[test]
    fn filtered_respects_limit() {
        let table = filtered(&sample(), 5).unwrap();
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.headers[2], "AIRLINE SENTIMENT CONFIDENCE");
    }

    #[test]
    fn sorted_applies_clicks_in_order() {
        let once = sorted(&sample(), &["airline".to_string()], Some(2)).unwrap();
        assert_eq!(once.rows.len(), 2);
        assert!(once.headers.contains(&"airline ▼".to_string()));
        assert_eq!(once.rows[0][4], "Virgin America");

        let cols = vec!["airline".to_string(), "airline".to_string()];
        let twice = sorted(&sample(), &cols, Some(2)).unwrap();
        assert!(twice.headers.contains(&"airline ▲".to_string()));
        assert_eq!(twice.rows[0][4], "Delta");
    }

    #[test]
    fn sorted_rejects_unknown_column() {
        let err = sorted(&sample(), &["nope".to_string()], None).unwrap_err();
        assert!(err.to_string().contains("unknown column"));
    }

    #[test]
    fn summary_lists_totals() {
        let table = summary(&sample()).unwrap();
        assert_eq!(table.rows[0], vec!["records", "12"]);
        assert!(table
            .rows
            .contains(&vec!["airline: Delta".to_string(), "3".to_string()]));
        assert!(table
            .rows
            .contains(&vec!["sentiment: negative".to_string(), "5".to_string()]));
    }
}
