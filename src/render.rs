//! Drawing a [`Snapshot`] in the terminal
use crate::consts;
use crate::scene::Scene;
use crate::snapshot::Snapshot;
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Widget},
};
use std::borrow::Cow;

const HELP_TEXT: &str = "Steer with the arrow keys, WASD, or hjkl. Eat apples to grow. \
    Walls and your own tail end the round. Hold p to pause, r restarts, Esc goes to the menu. \
    Speed changes made while paused apply on restart.";

/// The board plus the side panel for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Screen<'a> {
    pub(crate) snapshot: Snapshot<'a>,

    /// Draw the invisible barrier and other debugging details
    pub(crate) show_barrier: bool,
}

impl Widget for &Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = &self.snapshot;
        let display = get_display_area(area);
        let board_width = snap
            .grid
            .width
            .saturating_mul(consts::TILE_WIDTH)
            .saturating_add(2);
        let [board_area, panel_area] = Layout::horizontal([
            Constraint::Length(board_width),
            Constraint::Length(consts::SIDE_PANEL_WIDTH),
        ])
        .flex(Flex::Center)
        .areas(display);
        let [board_area, panel_area] = [board_area, panel_area].map(|a| {
            let [a] = Layout::vertical([snap.grid.height.saturating_add(2)])
                .flex(Flex::Center)
                .areas(a);
            a
        });

        Block::bordered()
            .border_style(consts::MUTED_STYLE)
            .render(board_area, buf);
        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in snap.grid.positions() {
            if (pos.x + pos.y) % 2 == 0 {
                board.draw_tile(pos, consts::FLOOR_SYMBOL, consts::BOARD_STYLE);
            } else {
                board.draw_tile(pos, "  ", consts::BOARD_STYLE);
            }
        }
        if self.show_barrier {
            if let Some(barrier) = snap.barrier {
                for pos in barrier.cells() {
                    board.draw_tile(pos, consts::BARRIER_SYMBOL, consts::BARRIER_STYLE);
                }
            }
        }
        let head = snap.head();
        for &pos in snap.snake {
            if Some(pos) != head {
                board.draw_tile(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
        }
        if let Some(pos) = head {
            board.draw_tile(pos, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE);
        }
        // Apples go on top so that ones spawned onto the snake stay visible
        for &pos in snap.apples {
            board.draw_tile(pos, consts::APPLE_SYMBOL, consts::APPLE_STYLE);
        }

        SidePanel {
            snapshot: snap,
            show_details: self.show_barrier,
        }
        .render(panel_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw a board cell, which spans [`consts::TILE_WIDTH`] terminal columns
    fn draw_tile(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::TILE_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (i, ch) in (0..consts::TILE_WIDTH).zip(symbol.chars()) {
            let Some(cx) = x.checked_add(i) else {
                return;
            };
            if !self.area.contains(Position::new(cx, y)) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((cx, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SidePanel<'a> {
    snapshot: &'a Snapshot<'a>,
    show_details: bool,
}

impl SidePanel<'_> {
    const INNER_WIDTH: u16 = consts::SIDE_PANEL_WIDTH - 4;

    fn scene_lines(&self) -> Vec<Line<'static>> {
        let snap = self.snapshot;
        match snap.scene {
            Scene::Menu => vec![
                button("Enter", "Start"),
                button("?", "How to Play"),
                button("q", "Quit"),
            ],
            Scene::Play => vec![
                button("p", "Pause"),
                Line::styled(
                    format!("Speed: {} FPS", snap.applied_rate),
                    consts::MUTED_STYLE,
                ),
            ],
            Scene::Paused => vec![
                Line::styled("Paused", consts::TITLE_STYLE),
                button("p", "Resume"),
                button("r", "Restart"),
                button("Esc", "Main Menu"),
                Line::default(),
                Line::styled("Game Speed", consts::MUTED_STYLE),
                slider(snap.speed_setting, Self::INNER_WIDTH),
                Line::raw(format!("Preview: {} FPS", snap.preview_rate)),
            ],
            Scene::Help => {
                let opts = textwrap::Options::new(usize::from(Self::INNER_WIDTH));
                let mut lines = vec![Line::styled("How to Play", consts::TITLE_STYLE)];
                lines.extend(
                    textwrap::wrap(HELP_TEXT, opts)
                        .into_iter()
                        .map(|ln| Line::raw(Cow::into_owned(ln))),
                );
                lines.push(Line::default());
                lines.push(button("Esc", "Back"));
                lines
            }
            Scene::GameOver => vec![
                Line::styled("GAME OVER", consts::GAME_OVER_STYLE),
                button("r", "Restart"),
                button("Esc", "Main Menu"),
                button("q", "Quit"),
            ],
        }
    }
}

impl Widget for SidePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        let block = Block::bordered()
            .border_style(consts::MUTED_STYLE)
            .title(Line::styled(" Snake 3D ", consts::TITLE_STYLE).centered());
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);
        let mut lines = vec![
            Line::from_iter([
                Span::styled("Score  ", consts::MUTED_STYLE),
                Span::raw(snap.score.to_string()),
            ]),
            Line::from_iter([
                Span::styled("Best   ", consts::MUTED_STYLE),
                Span::raw(snap.best.to_string()),
            ]),
            Line::default(),
        ];
        lines.extend(self.scene_lines());
        if self.show_details {
            lines.push(Line::default());
            if let Some(barrier) = snap.barrier {
                lines.push(Line::styled(
                    format!(
                        "Barrier: x={} y={}-{}",
                        barrier.column,
                        barrier.rows.start(),
                        barrier.rows.end()
                    ),
                    consts::BARRIER_STYLE,
                ));
            }
            lines.push(Line::styled(
                format!("Auto-pause: {} ms", snap.auto_pause.as_millis()),
                consts::MUTED_STYLE,
            ));
        }
        Text::from(lines).render(inner, buf);
    }
}

fn button(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(" "),
        Span::styled(format!(" {label} "), consts::BUTTON_STYLE),
    ])
}

/// Draw the speed slider as a track `width` columns wide with a knob at
/// `setting`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn slider(setting: f64, width: u16) -> Line<'static> {
    let track = width.saturating_sub(2);
    let knob = (setting.clamp(0.0, 1.0) * f64::from(track.saturating_sub(1))).round() as u16;
    let before = "━".repeat(usize::from(knob));
    let after = "─".repeat(usize::from(track.saturating_sub(knob).saturating_sub(1)));
    Line::from_iter([
        Span::styled("-", consts::KEY_STYLE),
        Span::styled(before, consts::BUTTON_STYLE),
        Span::styled("◆", consts::TITLE_STYLE),
        Span::styled(after, consts::MUTED_STYLE),
        Span::styled("+", consts::KEY_STYLE),
    ])
}
