use ndarray::Array2;

use crate::*;

/// Valid transitions:
/// - Filling -> Revealed
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EngineState {
    /// Puzzle on screen, hidden cells accept entries
    Filling,
    /// Solution shown, board locked
    Revealed,
}

impl EngineState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Filling
    }
}

/// How a hidden cell compared against its solution at reveal time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Judgement {
    Correct,
    Incorrect,
}

/// Counts reported by a successful reveal.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RevealSummary {
    pub correct: CellCount,
    pub incorrect: CellCount,
}

/// A puzzle being played: the served layout plus the user's entries and,
/// once revealed, the per-cell judgements.
///
/// Solutions are looked up here by position; widgets never carry them.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    layout: PuzzleLayout,
    entries: Array2<Option<char>>,
    judgements: Array2<Option<Judgement>>,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(layout: PuzzleLayout) -> Self {
        let size = (GRID_SIZE as usize, GRID_SIZE as usize);
        Self {
            layout,
            entries: Array2::default(size),
            judgements: Array2::default(size),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn hidden_at(&self, coords: Coord2) -> bool {
        self.layout.cell_at(coords).is_hidden
    }

    pub fn entry_at(&self, coords: Coord2) -> Option<char> {
        self.entries[coords.to_nd_index()]
    }

    pub fn judgement_at(&self, coords: Coord2) -> Option<Judgement> {
        self.judgements[coords.to_nd_index()]
    }

    /// What the cell's widget displays.
    pub fn shown_at(&self, coords: Coord2) -> Option<char> {
        let cell = self.layout.cell_at(coords);
        if !cell.is_hidden {
            return Some(cell.value);
        }
        match self.judgements[coords.to_nd_index()] {
            // wrong or blank entries were overwritten with the solution
            Some(Judgement::Incorrect) => Some(cell.value),
            _ => self.entries[coords.to_nd_index()],
        }
    }

    /// Whether the cell's widget rejects input.
    pub fn locked_at(&self, coords: Coord2) -> bool {
        !self.hidden_at(coords) || self.is_revealed()
    }

    /// Record what the user typed into a hidden cell.
    pub fn set_entry(&mut self, coords: Coord2, entry: Option<char>) -> Result<()> {
        let coords = self.layout.validate_coords(coords)?;
        if self.is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }
        if !self.hidden_at(coords) {
            return Err(GameError::CellNotEditable);
        }
        self.entries[coords.to_nd_index()] = entry;
        Ok(())
    }

    /// Judge every hidden cell against its solution and lock the board.
    pub fn reveal(&mut self) -> Result<RevealSummary> {
        if self.is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }

        let mut summary = RevealSummary::default();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coords = (row, col);
                let cell = self.layout.cell_at(coords);
                if !cell.is_hidden {
                    continue;
                }
                let judgement = if self.entries[coords.to_nd_index()] == Some(cell.value) {
                    summary.correct += 1;
                    Judgement::Correct
                } else {
                    summary.incorrect += 1;
                    Judgement::Incorrect
                };
                self.judgements[coords.to_nd_index()] = Some(judgement);
            }
        }
        self.state = EngineState::Revealed;
        Ok(summary)
    }
}
