use super::{Cell, Neighborhood, RuleTable};
use rayon::prelude::*;
use std::fmt;
use thiserror::Error;

/// Which cell of the seed row starts on
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum SeedPosition {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error("row size must be at least 1, got {0}")]
    InvalidSize(usize),
}

/// Row is one generation of the automaton: a fixed-length ordered
/// sequence of cells. Rows beyond the edges are treated as Off
/// (closed boundary, no wraparound).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create the seed row: `size` cells with exactly one on.
    ///
    /// `Middle` lands at 1-based `ceil(size/2)`, which for even sizes
    /// is left of center. That tie-break matches the reference output
    /// and is kept deliberately.
    pub fn seed(size: usize, position: SeedPosition) -> Result<Self, SeedError> {
        if size < 1 {
            return Err(SeedError::InvalidSize(size));
        }
        let active = match position {
            SeedPosition::Start => 0,
            SeedPosition::Middle => (size - 1) / 2,
            SeedPosition::End => size - 1,
        };
        let mut cells = vec![Cell::Off; size];
        cells[active] = Cell::On;
        Ok(Self { cells })
    }

    /// Build a row from explicit cell states
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The (left, center, right) triple around `index`, with Off
    /// standing in for neighbors outside the row
    fn neighborhood(&self, index: usize) -> Neighborhood {
        let left = if index > 0 { self.cells[index - 1] } else { Cell::Off };
        let right = self.cells.get(index + 1).copied().unwrap_or(Cell::Off);
        Neighborhood::new(left, self.cells[index], right)
    }

    /// Pure successor computation - returns the next generation.
    /// Every index reads the same previous snapshot, so the transition
    /// is simultaneous, never sequential-in-place.
    pub fn next(&self, table: &RuleTable) -> Self {
        let cells = (0..self.cells.len())
            .map(|i| table.next_state(self.neighborhood(i)))
            .collect();
        Self { cells }
    }

    /// Parallel successor using rayon, for very wide rows.
    /// Produces exactly the same row as `next`.
    pub fn next_parallel(&self, table: &RuleTable) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|i| table.next_state(self.neighborhood(i)))
            .collect();
        Self { cells }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}
