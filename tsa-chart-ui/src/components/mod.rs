//! Reusable Dioxus RSX components for the sentiment pages.

mod airline_selector;
mod chart_container;
mod chart_header;
mod data_table;
mod loading_spinner;
mod sortable_table;

pub use airline_selector::AirlineSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_table::DataTable;
pub use loading_spinner::LoadingSpinner;
pub use sortable_table::SortableTableView;
