use crate::game::{Barrier, Grid};
use crate::scene::Scene;
use ratatui::layout::Position;
use std::collections::VecDeque;
use std::time::Duration;

/// A read-only view of everything the front end may show for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,

    /// Snake cells, tail first
    pub(crate) snake: &'a VecDeque<Position>,

    /// Apple cells in no particular order; the same cell may appear more than
    /// once
    pub(crate) apples: &'a [Position],

    pub(crate) scene: Scene,
    pub(crate) score: u32,
    pub(crate) best: u32,

    /// Position of the speed slider in `[0, 1]`
    pub(crate) speed_setting: f64,

    /// Tick rate the slider would give if applied now
    pub(crate) preview_rate: u32,

    /// Tick rate in effect
    pub(crate) applied_rate: u32,

    /// The invisible barrier of the current round, if there is one
    pub(crate) barrier: Option<&'a Barrier>,

    pub(crate) auto_pause: Duration,
}

impl Snapshot<'_> {
    pub(crate) fn head(&self) -> Option<Position> {
        self.snake.back().copied()
    }
}
