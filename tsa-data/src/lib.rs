//! Data processing for the airline tweet sentiment pages.
//!
//! Every function here is pure: it takes loaded records and returns a value
//! that the UI binds to the DOM. Nothing is cached between calls.

pub mod bubbles;
pub mod filtered;
pub mod sortable;
pub mod summary;

pub use bubbles::{aggregate_bubbles, AirlineFilter, Bubble, BubbleView, ChartConfig, RadiusScale};
pub use filtered::{FilterConfig, FilteredTable};
pub use sortable::{SortDirection, SortableTable};
pub use summary::DatasetSummary;
