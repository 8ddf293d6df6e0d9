//! Static table: one header row, one row per entry, no interaction.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Column keys, used for each cell's `data-th` attribute
    pub columns: Vec<String>,
    /// Header labels, parallel to `columns`
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    rsx! {
        table {
            thead {
                tr {
                    for (i, header) in props.headers.iter().enumerate() {
                        th { key: "{i}", "{header}" }
                    }
                }
            }
            tbody {
                for (r, row) in props.rows.iter().enumerate() {
                    tr {
                        key: "{r}",
                        for (value, column) in row.iter().zip(props.columns.iter()) {
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
