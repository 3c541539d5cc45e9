//! Assorted constants & hard-coded configuration
use crate::game::Grid;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::ops::RangeInclusive;

/// The board.  Not configurable.
pub(crate) const GRID: Grid = Grid {
    width: 26,
    height: 20,
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one board cell
pub(crate) const TILE_WIDTH: u16 = 2;

/// Width of the panel to the right of the board
pub(crate) const SIDE_PANEL_WIDTH: u16 = 24;

/// Snake length at the start of every round
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Number of apples spawned at the start of every round
pub(crate) const INITIAL_APPLES: usize = 2;

/// Tick rate at process start, before the slider has been touched
pub(crate) const BASE_TICK_RATE: u32 = 10;

/// Slowest tick rate the slider can select
pub(crate) const MIN_TICK_RATE: u32 = 6;

/// Fastest tick rate the slider can select
pub(crate) const MAX_TICK_RATE: u32 = 22;

/// Frame rate of the main menu, which never steps the simulation
pub(crate) const MENU_FRAME_RATE: u32 = 60;

/// How far one press of a slider key moves the slider
pub(crate) const SLIDER_STEP: f64 = 1.0 / 16.0;

/// Every this many ticks, the snake is allowed to reverse into itself
pub(crate) const REVERSAL_PERIOD: u64 = 12;

/// Chance that a single apple spawn ignores cell occupancy
pub(crate) const SPAWN_BYPASS_PROBABILITY: f64 = 0.22;

/// Random cell draws made by one apple spawn before giving up
pub(crate) const SPAWN_ATTEMPTS: u32 = 200;

/// Range, in milliseconds, from which the dormant auto-pause countdown is
/// drawn
pub(crate) const AUTO_PAUSE_WINDOW_MS: RangeInclusive<u64> = 3000..=8000;

/// Tile for body segments: a lit left face and a solid right face
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▐█";

/// Tile for the head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "▟▙";

/// Tile for an apple
pub(crate) const APPLE_SYMBOL: &str = "●▗";

/// Tile for an empty board cell on the darker squares of the checkerboard
pub(crate) const FLOOR_SYMBOL: &str = "░░";

/// Tile for the invisible barrier when the debug overlay is on
pub(crate) const BARRIER_SYMBOL: &str = "╳╳";

pub(crate) const SNAKE_STYLE: Style = Style::new()
    .fg(Color::Rgb(65, 200, 120))
    .bg(Color::Rgb(30, 36, 42));

/// Green tinted towards gold
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::Rgb(112, 200, 105))
    .bg(Color::Rgb(30, 36, 42))
    .add_modifier(Modifier::BOLD);

pub(crate) const APPLE_STYLE: Style = Style::new()
    .fg(Color::Rgb(230, 60, 60))
    .bg(Color::Rgb(30, 36, 42));

pub(crate) const BOARD_STYLE: Style = Style::new()
    .fg(Color::Rgb(24, 30, 36))
    .bg(Color::Rgb(30, 36, 42));

pub(crate) const BARRIER_STYLE: Style = Style::new().fg(Color::Rgb(255, 0, 0));

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Rgb(255, 200, 60));

/// Style for panel labels such as "Score" and "Best"
pub(crate) const MUTED_STYLE: Style = Style::new().fg(Color::Rgb(150, 160, 170));

/// Style for the panel's buttons
pub(crate) const BUTTON_STYLE: Style = Style::new()
    .fg(Color::Rgb(16, 28, 34))
    .bg(Color::Rgb(70, 190, 255));

pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::Rgb(230, 60, 60))
    .add_modifier(Modifier::BOLD);

pub(crate) const TITLE_STYLE: Style = Style::new()
    .fg(Color::Rgb(235, 240, 245))
    .add_modifier(Modifier::BOLD);
