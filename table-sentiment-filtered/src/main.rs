//! Airline Sentiment Filtered Table
//!
//! Shows the first 40 tweets of the dataset, sorted by ascending sentiment
//! confidence, projected onto five columns. Static once rendered.

use dioxus::prelude::*;
use tsa_chart_ui::components::{ChartHeader, DataTable, LoadingSpinner};
use tsa_chart_ui::state::AppState;
use tsa_chart_ui::{js_bridge, DATASET_URL, PAGE_WRAP_ID};
use tsa_data::{FilterConfig, FilteredTable};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sentiment-filtered-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            let dataset = match js_bridge::fetch_dataset(DATASET_URL).await {
                Ok(ds) => ds,
                Err(e) => {
                    state.abort(format!("error loading CSV data: {:#}", e));
                    return;
                }
            };
            match FilteredTable::build(&dataset, &FilterConfig::default()) {
                Ok(table) => {
                    state.filtered.set(Some(table));
                    state.loading.set(false);
                }
                Err(e) => state.abort(e),
            }
        });
    });

    let filtered = state.filtered.read().clone();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Least Confident Sentiment Labels".to_string(),
                description: "First 40 tweets, ordered by ascending sentiment confidence.".to_string(),
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(table) = filtered {
                div {
                    id: PAGE_WRAP_ID,
                    DataTable {
                        columns: table.columns.clone(),
                        headers: table.headers.clone(),
                        rows: table.rows.clone(),
                    }
                }
            }
        }
    }
}
