use ratatui::layout::{Position, Positions, Rect, Size};

/// The dimensions of the board.  Cells are addressed by `Position`s relative
/// to the board's top-left corner, and every edge wraps around to the
/// opposite one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Bounds {
    pub(super) width: u16,
    pub(super) height: u16,
}

impl Bounds {
    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Return all cells on the board in row-major order
    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(super) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(super) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Convert a row-major cell index to a position.  Returns `None` if the
    /// index is off the board.
    pub(super) fn position_at(self, index: usize) -> Option<Position> {
        if self.width == 0 || index >= self.cell_count() {
            return None;
        }
        let width = usize::from(self.width);
        let x = u16::try_from(index % width).ok()?;
        let y = u16::try_from(index / width).ok()?;
        Some(Position { x, y })
    }

    /// Move `pos` by `dx` columns & `dy` rows.  Each axis is treated
    /// separately: going past the far edge lands on 0, and going below 0
    /// lands on the far edge.
    pub(super) fn offset(self, pos: Position, dx: i8, dy: i8) -> Position {
        Position {
            x: shift_in_bounds(pos.x, dx, self.width),
            y: shift_in_bounds(pos.y, dy, self.height),
        }
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Bounds {
        Bounds {
            width: size.width,
            height: size.height,
        }
    }
}

fn shift_in_bounds(x: u16, delta: i8, max: u16) -> u16 {
    let shifted = i32::from(x) + i32::from(delta);
    if shifted >= i32::from(max) {
        0
    } else if shifted < 0 {
        max.saturating_sub(1)
    } else {
        // 0 <= shifted < max, so this always fits
        u16::try_from(shifted).unwrap_or_default()
    }
}
