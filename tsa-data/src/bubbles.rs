//! Bubble chart aggregation: one bubble per (airline, sentiment) pair.
//!
//! The aggregation returns plain values; the UI keeps the full list and
//! derives filtered views from it with [`AirlineFilter`]. The force layout
//! itself runs in D3.js, configured from [`ChartConfig`].

use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use tsa_core::TweetRecord;

/// Dropdown value that shows every airline.
pub const ALL_AIRLINES: &str = "all";

/// Aggregated count for one (airline, sentiment) pair.
///
/// `x`/`y` are the randomized starting positions handed to the force layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    pub airline: String,
    pub sentiment: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
}

/// Chart geometry and force settings, passed to D3.js as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Extra distance kept between bubble edges by the collision force.
    pub collide_padding: f64,
    /// Strength of the x/y forces pulling bubbles toward the center.
    pub center_strength: f64,
    pub stroke_width: f64,
    pub label_max_chars: usize,
    pub min_font_px: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 950.0,
            height: 950.0,
            min_radius: 15.0,
            max_radius: 130.0,
            collide_padding: 5.0,
            center_strength: 0.05,
            stroke_width: 3.0,
            label_max_chars: 10,
            min_font_px: 12.0,
        }
    }
}

/// Group records by airline then sentiment and count each pair.
///
/// Pairs come out in first-seen order of airline, then first-seen order of
/// sentiment within that airline. Groups with an empty airline or sentiment
/// are skipped with a warning.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tsa_data::bubbles::{aggregate_bubbles, ChartConfig};
/// use tsa_core::{Dataset, TweetRecord};
///
/// let ds = Dataset::from_csv_str(
///     "airline,airline_sentiment\nDelta,positive\nDelta,positive\nDelta,negative\n",
/// ).unwrap();
/// let records = TweetRecord::from_dataset(&ds).unwrap();
/// let bubbles = aggregate_bubbles(&records, &ChartConfig::default(), &mut StdRng::seed_from_u64(7));
/// assert_eq!(bubbles.len(), 2);
/// assert_eq!((bubbles[0].sentiment.as_str(), bubbles[0].count), ("positive", 2));
/// assert_eq!((bubbles[1].sentiment.as_str(), bubbles[1].count), ("negative", 1));
/// ```
pub fn aggregate_bubbles<R: Rng + ?Sized>(
    records: &[TweetRecord],
    config: &ChartConfig,
    rng: &mut R,
) -> Vec<Bubble> {
    let mut groups: IndexMap<&str, IndexMap<&str, usize>> = IndexMap::new();
    for r in records {
        *groups
            .entry(r.airline.as_str())
            .or_default()
            .entry(r.sentiment.as_str())
            .or_insert(0) += 1;
    }

    let mut bubbles = Vec::new();
    for (airline, sentiments) in &groups {
        for (sentiment, count) in sentiments {
            if airline.is_empty() || sentiment.is_empty() {
                log::warn!(
                    "[TSA] bubbles: invalid data for airline: {:?}, sentiment: {:?}, count: {}",
                    airline,
                    sentiment,
                    count
                );
                continue;
            }
            bubbles.push(Bubble {
                airline: airline.to_string(),
                sentiment: sentiment.to_string(),
                count: *count,
                x: jitter(config.width, rng),
                y: jitter(config.height, rng),
            });
        }
    }
    log::info!(
        "[TSA] bubbles: aggregated {} records into {} bubbles",
        records.len(),
        bubbles.len()
    );
    bubbles
}

/// A random start position within the middle half of `extent`.
fn jitter<R: Rng + ?Sized>(extent: f64, rng: &mut R) -> f64 {
    extent / 2.0 + (rng.gen::<f64>() - 0.5) * extent * 0.5
}

/// Square-root scale from count to radius.
///
/// The domain is `[0, max count]` of the *full* aggregation, so filtering the
/// chart never rescales the remaining bubbles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_count: usize,
    min_radius: f64,
    max_radius: f64,
}

impl RadiusScale {
    pub fn new(bubbles: &[Bubble], config: &ChartConfig) -> Self {
        Self {
            max_count: bubbles.iter().map(|b| b.count).max().unwrap_or(0),
            min_radius: config.min_radius,
            max_radius: config.max_radius,
        }
    }

    /// Radius for `count`, never below the minimum visible radius.
    pub fn radius(&self, count: usize) -> f64 {
        if self.max_count == 0 {
            return self.min_radius;
        }
        let t = (count as f64 / self.max_count as f64).sqrt();
        let r = self.min_radius + (self.max_radius - self.min_radius) * t;
        r.max(self.min_radius)
    }
}

/// Which bubbles the airline dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirlineFilter {
    All,
    Airline(String),
}

impl AirlineFilter {
    /// Interpret a dropdown option value.
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_AIRLINES {
            AirlineFilter::All
        } else {
            AirlineFilter::Airline(value.to_string())
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            AirlineFilter::All => ALL_AIRLINES,
            AirlineFilter::Airline(name) => name,
        }
    }

    pub fn apply(&self, bubbles: &[Bubble]) -> Vec<Bubble> {
        let filtered: Vec<Bubble> = match self {
            AirlineFilter::All => bubbles.to_vec(),
            AirlineFilter::Airline(name) => bubbles
                .iter()
                .filter(|b| &b.airline == name)
                .cloned()
                .collect(),
        };
        if filtered.is_empty() {
            log::warn!(
                "[TSA] bubbles: no data available for airline: {}",
                self.option_value()
            );
        }
        filtered
    }
}

/// Dropdown options: `"all"` followed by each airline in first-seen order.
pub fn airline_options(bubbles: &[Bubble]) -> Vec<String> {
    let mut options = vec![ALL_AIRLINES.to_string()];
    for b in bubbles {
        if !options[1..].contains(&b.airline) {
            options.push(b.airline.clone());
        }
    }
    options
}

/// Fill color for a sentiment label.
pub fn sentiment_color(sentiment: &str) -> &'static str {
    match sentiment {
        "positive" => "green",
        "neutral" => "orange",
        "negative" => "red",
        _ => "gray",
    }
}

/// Airline name cut to `max_chars` characters, with an ellipsis when cut.
pub fn truncate_label(airline: &str, max_chars: usize) -> String {
    if airline.chars().count() > max_chars {
        let head: String = airline.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        airline.to_string()
    }
}

/// Everything D3.js needs to draw one bubble, precomputed on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleView {
    /// Stable key for the D3 data join.
    pub key: String,
    pub airline: String,
    pub sentiment: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub collide_radius: f64,
    pub fill: &'static str,
    pub label: String,
    pub font_size: f64,
    pub tooltip_title: String,
    pub tooltip_body: String,
}

impl BubbleView {
    pub fn new(bubble: &Bubble, scale: &RadiusScale, config: &ChartConfig) -> Self {
        let radius = scale.radius(bubble.count);
        Self {
            key: format!("{}{}", bubble.airline, bubble.sentiment),
            airline: bubble.airline.clone(),
            sentiment: bubble.sentiment.clone(),
            count: bubble.count,
            x: bubble.x,
            y: bubble.y,
            radius,
            collide_radius: radius + config.collide_padding,
            fill: sentiment_color(&bubble.sentiment),
            label: truncate_label(&bubble.airline, config.label_max_chars),
            font_size: (radius / 3.0).max(config.min_font_px),
            tooltip_title: bubble.airline.clone(),
            tooltip_body: format!("{} {} tweets", bubble.count, bubble.sentiment),
        }
    }
}

/// Build the render payload for `bubbles` using a scale from the full set.
pub fn bubble_views(bubbles: &[Bubble], scale: &RadiusScale, config: &ChartConfig) -> Vec<BubbleView> {
    bubbles
        .iter()
        .map(|b| BubbleView::new(b, scale, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tsa_core::Dataset;

    const SAMPLE: &str = include_str!("../../fixtures/tweets_sample.csv");

    fn records(csv: &str) -> Vec<TweetRecord> {
        TweetRecord::from_dataset(&Dataset::from_csv_str(csv).unwrap()).unwrap()
    }

    fn sample_bubbles() -> Vec<Bubble> {
        aggregate_bubbles(
            &records(SAMPLE),
            &ChartConfig::default(),
            &mut StdRng::seed_from_u64(42),
        )
    }

    fn pairs(bubbles: &[Bubble]) -> Vec<(&str, &str, usize)> {
        bubbles
            .iter()
            .map(|b| (b.airline.as_str(), b.sentiment.as_str(), b.count))
            .collect()
    }

    #[test]
    fn counts_each_pair_in_first_seen_order() {
        let bubbles = sample_bubbles();
        assert_eq!(
            pairs(&bubbles),
            vec![
                ("Virgin America", "neutral", 2),
                ("Virgin America", "positive", 1),
                ("Virgin America", "negative", 2),
                ("United", "positive", 1),
                ("United", "negative", 2),
                ("Delta", "positive", 2),
                ("Delta", "negative", 1),
                ("Southwest", "neutral", 1),
            ]
        );
    }

    #[test]
    fn counts_match_source_records() {
        let recs = records(SAMPLE);
        for b in sample_bubbles() {
            let expected = recs
                .iter()
                .filter(|r| r.airline == b.airline && r.sentiment == b.sentiment)
                .count();
            assert_eq!(b.count, expected, "{} / {}", b.airline, b.sentiment);
        }
        let total: usize = sample_bubbles().iter().map(|b| b.count).sum();
        assert_eq!(total, recs.len());
    }

    #[test]
    fn skips_groups_with_empty_airline_or_sentiment() {
        let recs = records("airline,airline_sentiment\nDelta,positive\n,negative\nDelta,\nDelta\n");
        let bubbles = aggregate_bubbles(&recs, &ChartConfig::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(pairs(&bubbles), vec![("Delta", "positive", 1)]);
    }

    #[test]
    fn start_positions_stay_in_middle_half() {
        let config = ChartConfig::default();
        for b in sample_bubbles() {
            assert!(b.x >= config.width * 0.25 && b.x < config.width * 0.75);
            assert!(b.y >= config.height * 0.25 && b.y < config.height * 0.75);
        }
    }

    #[test]
    fn radius_scale_is_area_proportional() {
        let config = ChartConfig::default();
        let scale = RadiusScale::new(&sample_bubbles(), &config);
        assert_eq!(scale.radius(2), 130.0);
        assert_eq!(scale.radius(0), 15.0);
        let expected = 15.0 + 115.0 * 0.5_f64.sqrt();
        assert!((scale.radius(1) - expected).abs() < 1e-9);
    }

    #[test]
    fn radius_scale_without_data_uses_minimum() {
        let scale = RadiusScale::new(&[], &ChartConfig::default());
        assert_eq!(scale.radius(10), 15.0);
    }

    #[test]
    fn filter_by_airline() {
        let bubbles = sample_bubbles();
        assert_eq!(AirlineFilter::All.apply(&bubbles).len(), 8);

        let delta = AirlineFilter::from_option_value("Delta").apply(&bubbles);
        assert_eq!(pairs(&delta), vec![("Delta", "positive", 2), ("Delta", "negative", 1)]);

        assert!(AirlineFilter::from_option_value("JetBlue").apply(&bubbles).is_empty());
        assert_eq!(AirlineFilter::from_option_value("all"), AirlineFilter::All);
    }

    #[test]
    fn options_start_with_all() {
        assert_eq!(
            airline_options(&sample_bubbles()),
            vec!["all", "Virgin America", "United", "Delta", "Southwest"]
        );
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(truncate_label("Virgin America", 10), "Virgin Ame...");
        assert_eq!(truncate_label("Delta", 10), "Delta");
        assert_eq!(sentiment_color("negative"), "red");
        assert_eq!(sentiment_color("mixed"), "gray");
    }

    #[test]
    fn view_carries_collision_radius_and_tooltip() {
        let config = ChartConfig::default();
        let bubbles = sample_bubbles();
        let scale = RadiusScale::new(&bubbles, &config);
        let view = BubbleView::new(&bubbles[0], &scale, &config);
        assert_eq!(view.radius, 130.0);
        assert_eq!(view.collide_radius, 135.0);
        assert!((view.font_size - 130.0 / 3.0).abs() < 1e-9);
        assert_eq!(view.tooltip_body, "2 neutral tweets");
        assert_eq!(view.key, "Virgin Americaneutral");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["collideRadius"], 135.0);
        assert_eq!(json["fill"], "orange");
    }
}
