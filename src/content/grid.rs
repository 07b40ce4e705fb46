use std::fmt;

use anyhow::Result;

use super::{MAX_COLS, MAX_ROWS};

/// One cell as produced by a grid widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Durable text form; `Empty` becomes `""`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<Option<&str>> for Cell {
    fn from(s: Option<&str>) -> Self {
        s.map(Cell::from).unwrap_or(Cell::Empty)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n.into())
    }
}

/// Mutable 2-D buffer exchanged with the grid widget.
///
/// Rows may be ragged; the widget decides how to pad them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridBuffer {
    rows: Vec<Vec<Cell>>,
}

impl GridBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![Cell::text(""); cols]; rows],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn from_text_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Cell::Text).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Writes a cell, growing the buffer with empty cells as needed.
    ///
    /// Positions past `MAX_ROWS` x `MAX_COLS` are rejected and leave the
    /// buffer untouched.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= MAX_ROWS || col >= MAX_COLS {
            anyhow::bail!(
                "cell {}:{} is outside the {}x{} grid limit",
                row,
                col,
                MAX_ROWS,
                MAX_COLS
            );
        }
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, Cell::Empty);
        }
        r[col] = cell;
        Ok(())
    }

    /// Element-wise durable text form of every cell.
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Cell::to_text).collect())
            .collect()
    }
}
