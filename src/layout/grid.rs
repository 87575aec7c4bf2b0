use crate::foundation::error::{OverlayError, OverlayResult};
use crate::pages::Layer;

/// Columns per panel.
pub const GRID_COLS: usize = 5;
/// Rows per panel.
pub const GRID_ROWS: usize = 5;

/// Which keyboard half a grid belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Anchored to the left canvas edge.
    Left,
    /// Anchored to the right canvas edge.
    Right,
}

/// One slot of a key grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Takes up one column, draws nothing.
    Empty,
    /// Unit-width key.
    Key(String),
    /// Key spanning several columns plus the gaps between them.
    Wide {
        /// Key label.
        label: String,
        /// Number of columns covered.
        span: u32,
    },
}

impl Cell {
    /// Unit key.
    pub fn key(label: impl Into<String>) -> Self {
        Self::Key(label.into())
    }

    /// Key covering `span` columns.
    pub fn wide(label: impl Into<String>, span: u32) -> Self {
        Self::Wide {
            label: label.into(),
            span,
        }
    }

    /// Columns consumed by this cell.
    pub fn span(&self) -> u32 {
        match self {
            Self::Empty | Self::Key(_) => 1,
            Self::Wide { span, .. } => (*span).max(1),
        }
    }

    /// Label, if the cell draws a key.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Key(label) | Self::Wide { label, .. } => Some(label),
        }
    }
}

/// A non-empty cell resolved to its row/column slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    /// 0-based row.
    pub row: usize,
    /// 0-based column of the cell's left edge.
    pub col: usize,
    /// Key label.
    pub label: &'a str,
    /// Columns covered.
    pub span: u32,
}

impl Placement<'_> {
    /// Whether the key covers more than one column.
    pub fn is_wide(&self) -> bool {
        self.span > 1
    }
}

/// Key layout of one panel on one layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyGrid {
    /// Panel the grid is drawn into.
    pub side: Side,
    /// Layer the grid belongs to. Drives the up-arrow overload in key-code resolution.
    pub layer: Layer,
    /// Rows, top to bottom.
    pub rows: Vec<Vec<Cell>>,
}

impl KeyGrid {
    /// Build a grid.
    pub fn new(side: Side, layer: Layer, rows: Vec<Vec<Cell>>) -> Self {
        Self { side, layer, rows }
    }

    /// Check row count and that no row overflows the panel.
    pub fn validate(&self) -> OverlayResult<()> {
        if self.rows.len() != GRID_ROWS {
            return Err(OverlayError::validation(format!(
                "{:?}/{:?} grid has {} rows, expected {GRID_ROWS}",
                self.side,
                self.layer,
                self.rows.len()
            )));
        }
        for (i, row) in self.rows.iter().enumerate() {
            let cols: u32 = row.iter().map(Cell::span).sum();
            if cols as usize > GRID_COLS {
                return Err(OverlayError::validation(format!(
                    "{:?}/{:?} grid row {i} covers {cols} columns, max {GRID_COLS}",
                    self.side, self.layer
                )));
            }
        }
        Ok(())
    }

    /// Non-empty cells in row-major order, columns advanced by each cell's span.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .scan(0usize, |col, cell| {
                    let at = *col;
                    *col += cell.span() as usize;
                    Some((at, cell))
                })
                .filter_map(move |(col, cell)| {
                    cell.label().map(|label| Placement {
                        row,
                        col,
                        label,
                        span: cell.span(),
                    })
                })
        })
    }
}

fn row(labels: &[&str]) -> Vec<Cell> {
    labels.iter().map(|&l| Cell::key(l)).collect()
}

/// Left half, primary layer.
pub fn left_primary() -> KeyGrid {
    KeyGrid::new(
        Side::Left,
        Layer::Primary,
        vec![
            row(&["1", "2", "3", "4", "5"]),
            row(&["Q", "W", "E", "R", "T"]),
            row(&["A", "S", "D", "F", "G"]),
            row(&["Z", "X", "C", "V", "B"]),
            vec![
                Cell::key("Shift"),
                Cell::key("fn"),
                Cell::key("^"),
                Cell::wide("Space", 2),
            ],
        ],
    )
}

/// Left half, fn layer.
pub fn left_fn() -> KeyGrid {
    KeyGrid::new(
        Side::Left,
        Layer::Fn,
        vec![
            vec![
                Cell::key("ESC"),
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ],
            row(&["F1", "F2", "F3", "F4", "F5"]),
            row(&["-", "=", "/", "[", "]"]),
            row(&[";", "~", ":", "?", "!"]),
            vec![
                Cell::key("Shift"),
                Cell::key("fn"),
                Cell::key("^"),
                Cell::wide("Space", 2),
            ],
        ],
    )
}

/// Right half, primary layer.
pub fn right_primary() -> KeyGrid {
    KeyGrid::new(
        Side::Right,
        Layer::Primary,
        vec![
            row(&["6", "7", "8", "9", "0"]),
            row(&["Y", "U", "I", "O", "P"]),
            row(&["H", "J", "K", "L", "'"]),
            row(&["N", "M", ",", ".", "<x"]),
            vec![
                Cell::key("Alt"),
                Cell::key("Tab"),
                Cell::wide("Return", 2),
                Cell::Empty,
            ],
        ],
    )
}

/// Right half, fn layer. Arrow cluster in rows 2..=3.
pub fn right_fn() -> KeyGrid {
    KeyGrid::new(
        Side::Right,
        Layer::Fn,
        vec![
            row(&["F6", "F7", "F8", "F9", "F10"]),
            row(&["PgUp", "Home", "Ins", "End", "PgDn"]),
            vec![
                Cell::key("F11"),
                Cell::key("^"),
                Cell::Empty,
                Cell::Empty,
                Cell::key("F12"),
            ],
            vec![
                Cell::key("<"),
                Cell::key("v"),
                Cell::key(">"),
                Cell::Empty,
                Cell::key("Del"),
            ],
            vec![
                Cell::Empty,
                Cell::Empty,
                Cell::wide("Return", 2),
                Cell::Empty,
            ],
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
