//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tsa_data::bubbles::ALL_AIRLINES;
use tsa_data::{Bubble, FilteredTable, SortableTable};

/// Shared application state for all sentiment pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset fetch is still in flight
    pub loading: Signal<bool>,
    /// Set when initialization aborted; nothing is rendered afterwards
    pub failed: Signal<bool>,
    /// Full bubble aggregation (never filtered in place)
    pub bubbles: Signal<Vec<Bubble>>,
    /// Current dropdown value ("all" or an airline name)
    pub selected_airline: Signal<String>,
    /// Click-to-sort table (None until loaded)
    pub sortable: Signal<Option<SortableTable>>,
    /// Static first-rows table (None until loaded)
    pub filtered: Signal<Option<FilteredTable>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            failed: Signal::new(false),
            bubbles: Signal::new(Vec::new()),
            selected_airline: Signal::new(ALL_AIRLINES.to_string()),
            sortable: Signal::new(None),
            filtered: Signal::new(None),
        }
    }

    /// Log why initialization stopped and mark the page as failed.
    pub fn abort(&mut self, reason: impl std::fmt::Display) {
        log::error!("[TSA] {}", reason);
        self.failed.set(true);
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
