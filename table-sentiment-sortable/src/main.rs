//! Airline Sentiment Sortable Table
//!
//! Renders every row of the dataset with every column. Clicking a header
//! re-sorts all rows by that column; the sort direction is one flag shared
//! by all headers and flips on every click.
//!
//! Data flow:
//! 1. On mount, the CSV is fetched from `DATASET_URL`.
//! 2. The dataset becomes a `SortableTable` stored in `AppState`.
//! 3. `SortableTableView` renders it and applies header clicks to it.

use dioxus::prelude::*;
use tsa_chart_ui::components::{ChartHeader, LoadingSpinner, SortableTableView};
use tsa_chart_ui::state::AppState;
use tsa_chart_ui::{js_bridge, DATASET_URL, PAGE_WRAP_ID};
use tsa_data::SortableTable;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sentiment-sortable-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            log::info!("[TSA] loading CSV file...");
            let dataset = match js_bridge::fetch_dataset(DATASET_URL).await {
                Ok(ds) => ds,
                Err(e) => {
                    state.abort(format!("error reading CSV file: {:#}", e));
                    return;
                }
            };
            if dataset.headers().is_empty() {
                state.abort("CSV file is missing column headers");
                return;
            }
            log::info!("[TSA] column names: {:?}", dataset.headers());

            state.sortable.set(Some(SortableTable::new(&dataset)));
            state.loading.set(false);
        });
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Airline Tweets".to_string(),
                description: "Click a column header to sort; click again to reverse.".to_string(),
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else if !(state.failed)() {
                div {
                    id: PAGE_WRAP_ID,
                    SortableTableView {}
                }
            }
        }
    }
}
