mod apples;
mod direction;
mod grid;
mod snake;
pub(crate) use self::apples::{ApplePool, Spawn};
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Barrier, Grid};
pub(crate) use self::snake::Snake;
use crate::anomalies::Anomalies;
use crate::command::Command;
use crate::consts;
use crate::scene::{Scene, Transition};
use crate::snapshot::Snapshot;
use crate::timing::Timing;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// The whole simulation: the board, the current round, the scene, and the
/// speed controls.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    anomalies: Anomalies,
    grid: Grid,
    snake: Snake,
    apples: ApplePool,
    /// The invisible barrier, if enabled.  Placed anew by every reset.
    barrier: Option<Barrier>,
    /// Ticks elapsed in the current round
    ticks: u64,
    score: u32,
    /// Highest score of any finished round since the program started
    best: u32,
    scene: Scene,
    timing: Timing,
    /// Countdown that is reseeded on resume and restart but never acted on
    auto_pause: Duration,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(anomalies: Anomalies) -> Self {
        Game::new_with_rng(anomalies, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game sitting at the main menu with a fresh round already set
    /// up behind it
    pub(crate) fn new_with_rng(anomalies: Anomalies, rng: R) -> Game<R> {
        let grid = consts::GRID;
        let mut game = Game {
            rng,
            anomalies,
            grid,
            snake: new_snake(grid),
            apples: ApplePool::default(),
            barrier: None,
            ticks: 0,
            score: 0,
            best: 0,
            scene: Scene::Menu,
            timing: Timing::new(),
            auto_pause: Duration::ZERO,
        };
        game.reset();
        game.reseed_auto_pause();
        game
    }

    /// Start a new round.  The best score, the scene, and the speed controls
    /// are left alone.
    fn reset(&mut self) {
        self.snake = new_snake(self.grid);
        self.ticks = 0;
        self.score = 0;
        self.apples.clear();
        for _ in 0..consts::INITIAL_APPLES {
            self.spawn_apple();
        }
        self.barrier = self
            .anomalies
            .invisible_barrier
            .then(|| self.grid.barrier());
        info!(apples = self.apples.len(), "New round");
    }

    /// Act on a command from the player.
    ///
    /// Direction requests only register while playing.  Slider drags register
    /// in every scene but only ever change the preview rate.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::Move(direction) if self.scene == Scene::Play => {
                self.snake.request(direction);
            }
            Command::SliderDrag(value) => self.timing.drag(value),
            _ => (),
        }
        match self.scene.transition(cmd) {
            Transition::Stay => (),
            Transition::Enter(scene) => self.enter(scene),
            Transition::Resume => {
                self.reseed_auto_pause();
                self.enter(Scene::Play);
            }
            Transition::Restart => {
                self.reset();
                self.timing.apply();
                self.reseed_auto_pause();
                info!(tick_rate = self.timing.applied_rate(), "Restarting");
                self.enter(Scene::Play);
            }
            Transition::Quit => {
                info!(scene = %self.scene, "Quitting");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Run one frame's worth of simulation: a single tick while playing,
    /// nothing otherwise
    pub(crate) fn frame(&mut self) -> Option<Tick> {
        (self.scene == Scene::Play).then(|| self.step())
    }

    /// Advance the round by one tick
    pub(crate) fn step(&mut self) -> Tick {
        self.ticks += 1;
        if self
            .snake
            .resolve_direction(self.anomalies.allows_reversal(self.ticks))
        {
            debug!(tick = self.ticks, direction = ?self.snake.direction(), "Scheduled reversal");
        }
        let direction = self.snake.direction();
        let Some(head) = direction.advance(self.snake.head(), self.grid) else {
            self.end_round(Tick::HitWall);
            return Tick::HitWall;
        };
        if self.barrier.as_ref().is_some_and(|b| b.blocks(head)) {
            debug!(
                tick = self.ticks,
                x = head.x,
                y = head.y,
                "Blocked by barrier"
            );
            return Tick::Blocked;
        }
        self.snake.push_head(head);
        let mut outcome = Tick::Moved;
        if let Some(i) = self.apples.find(head) {
            if self.anomalies.phantom_apples && direction == Direction::West && head.y % 2 == 0 {
                debug!(tick = self.ticks, x = head.x, y = head.y, "Phantom apple");
                self.spawn_apple();
                outcome = Tick::Phantom;
            } else {
                self.apples.remove(i);
                self.score += 1;
                self.spawn_apple();
                outcome = Tick::Ate;
            }
        }
        if outcome != Tick::Ate {
            self.snake.trim_tail();
        }
        if self.snake.head_hits_body() {
            self.end_round(Tick::HitSelf);
            return Tick::HitSelf;
        }
        outcome
    }

    fn spawn_apple(&mut self) {
        match self
            .apples
            .spawn(&mut self.rng, self.grid, &self.snake, &self.anomalies)
        {
            Spawn::Placed(_) => (),
            Spawn::Bypassed(pos) => {
                debug!(
                    x = pos.x,
                    y = pos.y,
                    on_snake = self.snake.occupies(pos),
                    "Apple spawn skipped occupancy check"
                );
            }
            Spawn::Exhausted => debug!("No free cell for a new apple"),
        }
    }

    fn reseed_auto_pause(&mut self) {
        self.auto_pause =
            Duration::from_millis(self.rng.random_range(consts::AUTO_PAUSE_WINDOW_MS));
    }
}

impl<R> Game<R> {
    pub(crate) fn scene(&self) -> Scene {
        self.scene
    }

    pub(crate) fn timing(&self) -> &Timing {
        &self.timing
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: self.snake.cells(),
            apples: self.apples.cells(),
            scene: self.scene,
            score: self.score,
            best: self.best,
            speed_setting: self.timing.setting(),
            preview_rate: self.timing.preview_rate(),
            applied_rate: self.timing.applied_rate(),
            barrier: self.barrier.as_ref(),
            auto_pause: self.auto_pause,
        }
    }

    fn enter(&mut self, scene: Scene) {
        if scene != self.scene {
            debug!(from = %self.scene, to = %scene, "Changing scene");
            self.scene = scene;
        }
    }

    fn end_round(&mut self, cause: Tick) {
        self.best = self.best.max(self.score);
        info!(score = self.score, best = self.best, ticks = self.ticks, ?cause, "Game over");
        self.enter(Scene::GameOver);
    }
}

fn new_snake(grid: Grid) -> Snake {
    Snake::new(grid.center(), Direction::East, consts::INITIAL_SNAKE_LENGTH)
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved one cell without eating
    Moved,
    /// The snake ate an apple and grew
    Ate,
    /// The snake moved onto an apple that stayed put and spawned a twin
    Phantom,
    /// The barrier stopped the snake where it was
    Blocked,
    HitWall,
    HitSelf,
}

/// Whether the program should keep running after a command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}
