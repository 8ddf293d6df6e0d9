//! Shared Dioxus components and D3.js bridge for the airline sentiment pages.
//!
//! This crate provides:
//! - `js_bridge`: dataset fetch plus Rust wrappers for the D3.js bubble chart
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (dropdown, tables, containers)

pub mod components;
pub mod js_bridge;
pub mod state;

/// Path the dataset is served at, relative to the page.
pub const DATASET_URL: &str = "./data/Kaggle_TwitterUSAirlineSentiment.csv";

/// D3.js build the bubble chart scripts are written against.
pub const D3_SCRIPT_URL: &str = "https://d3js.org/d3.v7.min.js";

/// DOM id of the bubble chart container.
pub const BUBBLE_CHART_ID: &str = "bubble-chart";
/// DOM id of the airline filter dropdown.
pub const AIRLINE_DROPDOWN_ID: &str = "airline-dropdown";
/// DOM id of the element tables are rendered into.
pub const PAGE_WRAP_ID: &str = "page-wrap";
