//! Airline Sentiment Bubble Chart
//!
//! One bubble per (airline, sentiment) pair, sized by tweet count and laid
//! out by a D3.js force simulation. A dropdown narrows the chart to a
//! single airline.
//!
//! Data flow:
//! 1. On mount, the CSV is fetched from `DATASET_URL` (the page's only await).
//! 2. Rows are validated into `TweetRecord`s and aggregated into bubbles,
//!    which are stored in `AppState` as the full, unfiltered list.
//! 3. Whenever the dropdown changes, the bubbles are filtered, converted to
//!    `BubbleView`s against a radius scale from the full list, and passed
//!    to `renderBubbleChart()` for D3.js rendering.

use dioxus::prelude::*;
use tsa_chart_ui::components::{AirlineSelector, ChartContainer, ChartHeader, LoadingSpinner};
use tsa_chart_ui::state::AppState;
use tsa_chart_ui::{js_bridge, BUBBLE_CHART_ID, D3_SCRIPT_URL, DATASET_URL};
use tsa_core::TweetRecord;
use tsa_data::bubbles::{aggregate_bubbles, bubble_views, AirlineFilter, ChartConfig, RadiusScale};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sentiment-bubbles-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch and aggregate on mount
    use_effect(move || {
        spawn(async move {
            let dataset = match js_bridge::fetch_dataset(DATASET_URL).await {
                Ok(ds) => ds,
                Err(e) => {
                    state.abort(format!("error loading csv file: {:#}", e));
                    return;
                }
            };
            let records = match TweetRecord::from_dataset(&dataset) {
                Ok(r) => r,
                Err(e) => {
                    state.abort(e);
                    return;
                }
            };

            let bubbles = aggregate_bubbles(&records, &ChartConfig::default(), &mut rand::thread_rng());
            if bubbles.is_empty() {
                state.abort("no valid (airline, sentiment) groups in dataset");
                return;
            }
            state.bubbles.set(bubbles);
            state.loading.set(false);
        });
    });

    // Re-render chart whenever the airline selection changes
    use_effect(move || {
        if (state.loading)() || (state.failed)() {
            return;
        }
        let selection = (state.selected_airline)();
        let bubbles = state.bubbles.read();

        js_bridge::init_charts();

        let config = ChartConfig::default();
        let scale = RadiusScale::new(&bubbles, &config);
        let visible = AirlineFilter::from_option_value(&selection).apply(&bubbles);
        if visible.is_empty() {
            return;
        }
        log::info!(
            "[TSA] rendering {} bubbles for {}",
            visible.len(),
            selection
        );

        let views = bubble_views(&visible, &scale, &config);
        let data_json = serde_json::to_string(&views).unwrap_or_default();
        let config_json = serde_json::to_string(&config).unwrap_or_default();
        js_bridge::render_bubble_chart(BUBBLE_CHART_ID, &data_json, &config_json);
    });

    use_drop(|| js_bridge::destroy_chart(BUBBLE_CHART_ID));

    let config = ChartConfig::default();

    rsx! {
        document::Script { src: D3_SCRIPT_URL }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Airline Sentiment".to_string(),
                description: "Bubble area is proportional to tweet count. Green: positive, orange: neutral, red: negative.".to_string(),
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else if !(state.failed)() {
                AirlineSelector {}

                ChartContainer {
                    id: BUBBLE_CHART_ID.to_string(),
                    min_height: config.height as u32,
                }
            }
        }
    }
}
