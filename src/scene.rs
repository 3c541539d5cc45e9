//! Top-level game modes and the rules for moving between them
use crate::command::Command;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Scene {
    #[default]
    Menu,
    Play,
    Paused,
    Help,
    GameOver,
}

impl Scene {
    /// Decide what `cmd` does when issued in this scene.
    ///
    /// `Move` and `SliderDrag` never change the scene; their other effects
    /// are handled by the caller.
    pub(crate) fn transition(self, cmd: Command) -> Transition {
        match (self, cmd) {
            (_, Command::Quit) => Transition::Quit,
            (_, Command::Escape) => Transition::Enter(Scene::Menu),
            (Scene::Menu, Command::Start) => Transition::Enter(Scene::Play),
            (Scene::Menu, Command::Help) => Transition::Enter(Scene::Help),
            (Scene::Play, Command::PauseToggle) => Transition::Enter(Scene::Paused),
            (Scene::Paused, Command::PauseToggle) => Transition::Resume,
            (Scene::Play | Scene::Paused | Scene::GameOver, Command::Restart) => {
                Transition::Restart
            }
            (_, Command::Move(_) | Command::SliderDrag(_))
            | (Scene::Menu | Scene::Help | Scene::GameOver, Command::PauseToggle)
            | (Scene::Menu | Scene::Help, Command::Restart)
            | (
                Scene::Play | Scene::Paused | Scene::Help | Scene::GameOver,
                Command::Start | Command::Help,
            ) => Transition::Stay,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Scene::Menu => "menu",
            Scene::Play => "play",
            Scene::Paused => "paused",
            Scene::Help => "help",
            Scene::GameOver => "gameover",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The effect of a command on the current scene
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Transition {
    /// The scene does not change
    Stay,

    /// Switch to the given scene with no other effect
    Enter(Scene),

    /// Leave the pause screen and carry on playing; this reseeds the
    /// auto-pause countdown
    Resume,

    /// Start a new round (keeping the best score), apply the speed slider,
    /// reseed the auto-pause countdown, and play
    Restart,

    /// End the program
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rstest::rstest;

    const ALL_SCENES: [Scene; 5] = [
        Scene::Menu,
        Scene::Play,
        Scene::Paused,
        Scene::Help,
        Scene::GameOver,
    ];

    const ALL_COMMANDS: [Command; 9] = [
        Command::Start,
        Command::Help,
        Command::Quit,
        Command::Escape,
        Command::PauseToggle,
        Command::Restart,
        Command::Move(Direction::West),
        Command::Move(Direction::North),
        Command::SliderDrag(0.5),
    ];

    #[rstest]
    #[case(Scene::Menu, Command::Start, Transition::Enter(Scene::Play))]
    #[case(Scene::Menu, Command::Help, Transition::Enter(Scene::Help))]
    #[case(Scene::Menu, Command::Escape, Transition::Enter(Scene::Menu))]
    #[case(Scene::Play, Command::Escape, Transition::Enter(Scene::Menu))]
    #[case(Scene::Paused, Command::Escape, Transition::Enter(Scene::Menu))]
    #[case(Scene::Help, Command::Escape, Transition::Enter(Scene::Menu))]
    #[case(Scene::GameOver, Command::Escape, Transition::Enter(Scene::Menu))]
    #[case(Scene::Play, Command::PauseToggle, Transition::Enter(Scene::Paused))]
    #[case(Scene::Paused, Command::PauseToggle, Transition::Resume)]
    #[case(Scene::Play, Command::Restart, Transition::Restart)]
    #[case(Scene::Paused, Command::Restart, Transition::Restart)]
    #[case(Scene::GameOver, Command::Restart, Transition::Restart)]
    fn listed_transitions(#[case] from: Scene, #[case] cmd: Command, #[case] to: Transition) {
        assert_eq!(from.transition(cmd), to);
    }

    #[test]
    fn quit_from_anywhere() {
        for scene in ALL_SCENES {
            assert_eq!(scene.transition(Command::Quit), Transition::Quit, "{scene}");
        }
    }

    #[test]
    fn unlisted_pairs_stay() {
        let listed = |scene: Scene, cmd: Command| {
            matches!(cmd, Command::Quit | Command::Escape)
                || matches!(
                    (scene, cmd),
                    (Scene::Menu, Command::Start | Command::Help)
                        | (Scene::Play | Scene::Paused, Command::PauseToggle)
                        | (
                            Scene::Play | Scene::Paused | Scene::GameOver,
                            Command::Restart
                        )
                )
        };
        for scene in ALL_SCENES {
            for cmd in ALL_COMMANDS {
                if !listed(scene, cmd) {
                    assert_eq!(
                        scene.transition(cmd),
                        Transition::Stay,
                        "{scene} + {cmd:?} should stay put"
                    );
                }
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Scene::GameOver.to_string(), "gameover");
        assert_eq!(format!("{:8}|", Scene::Play), "play    |");
    }
}
