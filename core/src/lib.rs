#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use ndarray::Array2;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use nav::*;
pub use styling::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod nav;
mod styling;
mod types;

/// A generated puzzle as served by the generator endpoint: a fixed 9x9
/// row-major grid of clue and hidden cells.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleLayout {
    cells: Array2<PuzzleCell>,
}

impl PuzzleLayout {
    pub fn from_rows(rows: Vec<Vec<PuzzleCell>>) -> Result<Self> {
        let size = GRID_SIZE as usize;
        if rows.len() != size || rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidDimensions);
        }

        let flat: Vec<PuzzleCell> = rows.into_iter().flatten().collect();
        let cells =
            Array2::from_shape_vec((size, size), flat).map_err(|_| GameError::InvalidDimensions)?;
        Ok(Self { cells })
    }

    /// Parse the JSON body served by the generator endpoint.
    pub fn from_json(body: &str) -> Result<Self> {
        let rows: Vec<Vec<PuzzleCell>> = serde_json::from_str(body).map_err(|err| {
            log::warn!("puzzle body did not parse: {}", err);
            GameError::MalformedPuzzle
        })?;
        Self::from_rows(rows)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < GRID_SIZE && coords.1 < GRID_SIZE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> PuzzleCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn hidden_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_hidden)
            .count()
            .try_into()
            .unwrap()
    }
}
