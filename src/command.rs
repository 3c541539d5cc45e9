use crate::consts;
use crate::game::Direction;
use crate::scene::Scene;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the game core can be asked to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Command {
    /// Ask the snake to head in a direction from the next tick on
    Move(Direction),
    PauseToggle,
    Restart,
    /// Go back to the main menu
    Escape,
    Start,
    Help,
    Quit,
    /// Move the speed slider to the given position in `[0, 1]`
    SliderDrag(f64),
}

impl Command {
    /// Translate a key event into a command.  What some keys mean depends on
    /// the current `scene`, and the slider keys need the slider's current
    /// position in order to nudge it.
    ///
    /// Key repeats are ignored.  The only release that means anything is
    /// that of `p` while paused, which resumes the game, so that the game
    /// stays paused only for as long as `p` is held.
    pub(crate) fn from_key_event(ev: KeyEvent, scene: Scene, slider: f64) -> Option<Command> {
        match ev.kind {
            KeyEventKind::Press => Command::from_key_press(ev, scene, slider),
            KeyEventKind::Release => match (scene, ev.code) {
                (Scene::Paused, KeyCode::Char('p')) => Some(Command::PauseToggle),
                _ => None,
            },
            KeyEventKind::Repeat => None,
        }
    }

    fn from_key_press(ev: KeyEvent, scene: Scene, slider: f64) -> Option<Command> {
        let nudge = |delta: f64| Command::SliderDrag((slider + delta).clamp(0.0, 1.0));
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Escape),
            (_, KeyCode::F(1)) => Some(Command::Help),
            (_, KeyCode::Enter) if scene == Scene::Menu => Some(Command::Start),
            (_, KeyCode::Enter) => Some(Command::Restart),
            (m, KeyCode::Char(c)) if m.difference(KeyModifiers::SHIFT).is_empty() => match c {
                'w' | 'k' => Some(Command::Move(Direction::North)),
                's' | 'j' => Some(Command::Move(Direction::South)),
                'a' | 'h' => Some(Command::Move(Direction::West)),
                'd' | 'l' => Some(Command::Move(Direction::East)),
                'p' => Some(Command::PauseToggle),
                'r' => Some(Command::Restart),
                '?' => Some(Command::Help),
                'q' if matches!(scene, Scene::Menu | Scene::GameOver) => Some(Command::Quit),
                '-' | '[' => Some(nudge(-consts::SLIDER_STEP)),
                '+' | '=' | ']' => Some(nudge(consts::SLIDER_STEP)),
                _ => None,
            },
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Move(Direction::North)),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Move(Direction::South)),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Move(Direction::West)),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Move(Direction::East)),
            _ => None,
        }
    }
}
