use crate::*;

/// Width class of a single grid line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LineWeight {
    Thin,
    Thick,
}

/// Border widths applied to a whole table row.
///
/// `None` means the property is left untouched; only the widths the
/// renderer actually writes are modeled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowBorders {
    pub top: Option<LineWeight>,
    pub bottom: LineWeight,
}

/// Border widths applied to a single cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellBorders {
    pub top: Option<LineWeight>,
    pub right: LineWeight,
    pub bottom: Option<LineWeight>,
    pub left: Option<LineWeight>,
}

/// Background shade of a cell while a row/column/block is highlighted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shade {
    /// The focused cell's block
    Block,
    /// The focused cell's row and column, painted over the block
    Line,
}

/// Heavy line below every third row; the outer frame is heavy on the
/// first and last row.
pub fn row_borders(row: Coord) -> RowBorders {
    use LineWeight::*;

    let bottom = if row % BLOCK_SIZE == BLOCK_SIZE - 1 {
        Thick
    } else {
        Thin
    };
    let top = (row == 0 || row == GRID_SIZE - 1).then_some(Thick);

    RowBorders { top, bottom }
}

/// Per-cell widths; the bottom rule repeats [`row_borders`] so the heavy
/// line lands on both the row and its cells.
pub fn cell_borders((row, col): Coord2) -> CellBorders {
    use LineWeight::*;

    CellBorders {
        top: (row == 0).then_some(Thick),
        right: if (col + 1) % BLOCK_SIZE == 0 {
            Thick
        } else {
            Thin
        },
        bottom: (row % BLOCK_SIZE == BLOCK_SIZE - 1).then_some(Thick),
        left: (col == 0).then_some(Thick),
    }
}

/// Top-left corner of the block containing `coords`
pub const fn block_origin((row, col): Coord2) -> Coord2 {
    (row / BLOCK_SIZE * BLOCK_SIZE, col / BLOCK_SIZE * BLOCK_SIZE)
}

/// Shade of `pos` while `anchor` holds the focus. Row and column win over
/// the block at intersections.
pub fn highlight_shade(anchor: Coord2, pos: Coord2) -> Option<Shade> {
    if pos.0 == anchor.0 || pos.1 == anchor.1 {
        Some(Shade::Line)
    } else if block_origin(pos) == block_origin(anchor) {
        Some(Shade::Block)
    } else {
        None
    }
}
