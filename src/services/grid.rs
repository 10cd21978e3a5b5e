//! Link grid
//!
//! Links are laid out as rows read left-to-right, top-to-bottom. A row never
//! stays empty: removing its last link removes the row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{QuicktabError, Result};
use crate::storage::Link;

/// Coordinates of a link inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub link: usize,
}

impl Position {
    pub const fn new(row: usize, link: usize) -> Self {
        Self { row, link }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.row, self.link)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Link>>", into = "Vec<Vec<Link>>")]
pub struct Grid {
    rows: Vec<Vec<Link>>,
}

impl From<Vec<Vec<Link>>> for Grid {
    fn from(rows: Vec<Vec<Link>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Link>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid, dropping any empty rows
    pub fn from_rows(rows: Vec<Vec<Link>>) -> Self {
        Self {
            rows: rows.into_iter().filter(|row| !row.is_empty()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Link>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn link_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn get(&self, pos: Position) -> Option<&Link> {
        self.rows.get(pos.row)?.get(pos.link)
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Link> {
        self.rows.get_mut(pos.row)?.get_mut(pos.link)
    }

    /// Iterate links in display order together with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Link)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(l, link)| (Position::new(r, l), link))
        })
    }

    /// Append to the first row holding fewer than `row_capacity` links,
    /// or start a new row
    pub fn place(&mut self, link: Link, row_capacity: usize) -> Position {
        let capacity = row_capacity.max(1);
        if let Some((r, row)) = self
            .rows
            .iter_mut()
            .enumerate()
            .find(|(_, row)| row.len() < capacity)
        {
            row.push(link);
            return Position::new(r, row.len() - 1);
        }

        self.rows.push(vec![link]);
        Position::new(self.rows.len() - 1, 0)
    }

    /// Remove the link at `pos`, collapsing its row if it becomes empty
    pub fn remove(&mut self, pos: Position) -> Option<Link> {
        let row = self.rows.get_mut(pos.row)?;
        if pos.link >= row.len() {
            return None;
        }
        let link = row.remove(pos.link);
        if row.is_empty() {
            self.rows.remove(pos.row);
        }
        Some(link)
    }
}

/// Move the link at `from` next to the link at `to`
///
/// The link is inserted before the target, or after it when `insert_after`
/// is set. Target coordinates refer to the grid *before* the move. A target
/// row past the end appends to the last row; a target link index past the end
/// of its row appends to that row.
pub fn relocate(grid: &Grid, from: Position, to: Position, insert_after: bool) -> Result<Grid> {
    if grid.get(from).is_none() {
        return Err(QuicktabError::not_found(format!(
            "No link at position {}",
            from
        )));
    }
    if from == to {
        return Ok(grid.clone());
    }

    let mut rows = grid.rows.clone();
    let link = rows[from.row].remove(from.link);
    let mut target = to;

    if rows[from.row].is_empty() {
        rows.remove(from.row);
        if from.row == to.row {
            // the lone link of this row was dropped on its own row
            rows.insert(from.row, vec![link]);
            return Ok(Grid { rows });
        }
        if from.row < to.row {
            target.row -= 1;
        }
    } else if from.row == to.row && from.link < to.link {
        target.link -= 1;
    }

    if insert_after
        && let Some(row) = rows.get(target.row)
        && target.link < row.len()
    {
        target.link += 1;
    }

    if let Some(row) = rows.get_mut(target.row) {
        let at = target.link.min(row.len());
        row.insert(at, link);
    } else if let Some(last) = rows.last_mut() {
        last.push(link);
    } else {
        rows.push(vec![link]);
    }

    Ok(Grid { rows })
}
