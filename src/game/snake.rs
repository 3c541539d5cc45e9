use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: its cells and where it is headed.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells of the snake, tail first; the last cell is the head.
    /// Consecutive cells are always neighbors.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// The most recently requested direction, applied (or rejected) at the
    /// start of the next tick
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a snake `len` cells long lying in a straight line behind `head`
    /// and facing in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or if the body would leave the `u16`
    /// coordinate space.
    pub(crate) fn new(head: Position, direction: Direction, len: u16) -> Snake {
        assert!(len > 0, "a snake must have at least one cell");
        let behind = direction.reverse();
        let mut body = VecDeque::with_capacity(usize::from(len));
        let mut pos = head;
        body.push_front(pos);
        for _ in 1..len {
            pos = step_unbounded(pos, behind).expect("snake body should fit on the board");
            body.push_front(pos);
        }
        Snake {
            body,
            direction,
            pending: direction,
        }
    }

    /// Build a snake from explicit cells, tail first.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Position>>(
        cells: I,
        direction: Direction,
    ) -> Snake {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        assert!(!body.is_empty(), "a snake must have at least one cell");
        Snake {
            body,
            direction,
            pending: direction,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body should always contain at least one cell")
    }

    /// Return the snake's cells, tail first
    pub(crate) fn cells(&self) -> &VecDeque<Position> {
        &self.body
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Direction {
        self.pending
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Record a direction request; it takes effect on the next tick.
    pub(crate) fn request(&mut self, direction: Direction) {
        self.pending = direction;
    }

    /// Adopt the pending direction.  A request to reverse is ignored unless
    /// `allow_reversal` is true.  Returns `true` if the snake reversed.
    pub(super) fn resolve_direction(&mut self, allow_reversal: bool) -> bool {
        let reversing = self.pending == self.direction.reverse();
        if !reversing || allow_reversal {
            self.direction = self.pending;
        }
        reversing && allow_reversal
    }

    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    pub(super) fn trim_tail(&mut self) {
        let _ = self.body.pop_front();
    }

    /// Does the head share a cell with any other part of the body?
    pub(super) fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().rev().skip(1).any(|&p| p == head)
    }
}

/// Move one cell in `direction` with no upper bound on either axis
fn step_unbounded(pos: Position, direction: Direction) -> Option<Position> {
    let Position { x, y } = pos;
    Some(match direction {
        Direction::North => Position::new(x, y.checked_sub(1)?),
        Direction::East => Position::new(x.checked_add(1)?, y),
        Direction::South => Position::new(x, y.checked_add(1)?),
        Direction::West => Position::new(x.checked_sub(1)?, y),
    })
}
