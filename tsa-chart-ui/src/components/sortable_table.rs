//! Click-to-sort table bound to `AppState::sortable`.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the loaded [`SortableTable`](tsa_data::SortableTable). Clicking a
/// header sorts every row by that column and flips the shared direction.
#[component]
pub fn SortableTableView() -> Element {
    let state = use_context::<AppState>();
    let guard = state.sortable.read();
    let Some(table) = guard.as_ref() else {
        return rsx! {};
    };
    let labels = table.header_labels();
    let columns = table.columns().to_vec();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|r| (0..columns.len()).map(|i| r.display(i).to_string()).collect())
        .collect();
    drop(guard);

    rsx! {
        table {
            class: "sortable-table",
            thead {
                tr {
                    for (i, label) in labels.into_iter().enumerate() {
                        th {
                            key: "{i}",
                            style: "cursor: pointer;",
                            onclick: move |_| {
                                let mut sortable = state.sortable;
                                if let Some(table) = &mut *sortable.write() {
                                    table.activate(i);
                                };
                            },
                            "{label}"
                        }
                    }
                }
            }
            tbody {
                for row in rows.into_iter() {
                    tr {
                        for (value, column) in row.into_iter().zip(columns.iter()) {
                            td {
                                "data-th": "{column}",
                                "{value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
