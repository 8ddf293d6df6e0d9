//! Click-to-sort table state.
//!
//! One ascending/descending flag is shared by all headers. It starts
//! ascending and flips on every activation, before the rows are sorted, so
//! the first click sorts descending. The activated header's indicator shows
//! the order the rows are displayed in.

use serde::Serialize;
use std::cmp::Ordering;
use tsa_core::number::coerce_number;
use tsa_core::{Dataset, MISSING_VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// A row of the sortable table. `None` marks a field the CSV row did not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    cells: Vec<Option<String>>,
}

impl TableRow {
    /// Display text of `column`, with missing fields shown as `N/A`.
    pub fn display(&self, column: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|c| c.as_deref())
            .unwrap_or(MISSING_VALUE)
    }

    /// Sort key text of `column`, with missing fields compared as `""`.
    pub fn sort_value(&self, column: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|c| c.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortableTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
    direction: SortDirection,
    sorted_by: Option<usize>,
}

impl SortableTable {
    /// One row per record and one column per header, in file order.
    pub fn new(dataset: &Dataset) -> Self {
        let columns = dataset.headers().to_vec();
        let rows = dataset
            .records()
            .iter()
            .map(|r| TableRow {
                cells: (0..columns.len())
                    .map(|i| r.get(i).map(str::to_string))
                    .collect(),
            })
            .collect();
        Self {
            columns,
            rows,
            direction: SortDirection::Ascending,
            sorted_by: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current value of the shared flag: the order shown after the last
    /// activation, or `Ascending` before any.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction the next activation will sort in.
    pub fn next_direction(&self) -> SortDirection {
        self.direction.toggled()
    }

    pub fn sorted_by(&self) -> Option<usize> {
        self.sorted_by
    }

    /// Handle a click on header `column`.
    ///
    /// Returns the direction that was applied, or `None` when the column
    /// index is out of range (the table is left untouched).
    pub fn activate(&mut self, column: usize) -> Option<SortDirection> {
        if column >= self.columns.len() {
            log::warn!("[TSA] sortable: no column at index {}", column);
            return None;
        }
        let applied = self.direction.toggled();
        log::info!(
            "[TSA] sortable: sorting by column: {}, ascending: {}",
            self.columns[column],
            applied == SortDirection::Ascending
        );

        let numeric = self
            .rows
            .iter()
            .all(|r| coerce_number(r.sort_value(column)).is_some());

        // `sort_by` is stable, so ties keep their current relative order.
        self.rows.sort_by(|a, b| {
            let ord = compare_values(a.sort_value(column), b.sort_value(column), numeric);
            match applied {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        self.direction = applied;
        self.sorted_by = Some(column);
        Some(applied)
    }

    /// Handle a click on the header named `name`.
    pub fn activate_by_name(&mut self, name: &str) -> Option<SortDirection> {
        match self.columns.iter().position(|c| c == name) {
            Some(column) => self.activate(column),
            None => {
                log::warn!("[TSA] sortable: unknown column {:?}", name);
                None
            }
        }
    }

    /// Header label for `column`: the name, plus the indicator of the
    /// displayed order on the most recently activated column.
    pub fn header_label(&self, column: usize) -> String {
        let name = &self.columns[column];
        if self.sorted_by == Some(column) {
            format!("{} {}", name, self.direction.indicator())
        } else {
            name.clone()
        }
    }

    pub fn header_labels(&self) -> Vec<String> {
        (0..self.columns.len())
            .map(|i| self.header_label(i))
            .collect()
    }
}

/// Order two cell values. `numeric` is decided once per column: numeric
/// ordering when every value in the column coerces to a number, text
/// ordering otherwise.
pub fn compare_values(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        if let (Some(x), Some(y)) = (coerce_number(a), coerce_number(b)) {
            return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
        }
    }
    a.cmp(b)
}
