use ratatui::layout::{Position, Positions, Rect, Size};
use std::ops::RangeInclusive;

/// The board's coordinate space.  Every occupied cell satisfies
/// `x < width && y < height`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    #[cfg(test)]
    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Where the invisible barrier sits on a board of this size: a third of
    /// the way across, leaving four rows free at the top and bottom.
    pub(crate) fn barrier(self) -> Barrier {
        Barrier {
            column: self.width / 3,
            rows: 4..=self.height.saturating_sub(5),
        }
    }
}

/// A vertical run of cells that blocks the snake's head without killing it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Barrier {
    pub(crate) column: u16,
    pub(crate) rows: RangeInclusive<u16>,
}

impl Barrier {
    pub(crate) fn blocks(&self, pos: Position) -> bool {
        pos.x == self.column && self.rows.contains(&pos.y)
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.clone().map(|y| Position::new(self.column, y))
    }
}
