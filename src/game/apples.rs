use super::grid::Grid;
use super::snake::Snake;
use crate::anomalies::Anomalies;
use rand::Rng;
use ratatui::layout::Position;

/// The apples currently on the board.
///
/// This is a list rather than a set: a bypassed spawn can land on a cell that
/// already holds an apple, and both copies are kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ApplePool {
    cells: Vec<Position>,
}

impl ApplePool {
    pub(crate) fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, pos: Position) {
        self.cells.push(pos);
    }

    pub(super) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Return the index of the first apple at `pos`
    pub(super) fn find(&self, pos: Position) -> Option<usize> {
        self.cells.iter().position(|&p| p == pos)
    }

    pub(super) fn remove(&mut self, index: usize) -> Position {
        self.cells.remove(index)
    }

    /// Try to add one apple at a random cell.
    ///
    /// The spawn first decides whether it is a bypass spawn.  A bypass spawn
    /// takes the first cell drawn, occupied or not.  Otherwise up to
    /// `spawn_attempts` cells are drawn and the first one free of both the
    /// snake and the existing apples is taken; if none is found, nothing is
    /// added.
    pub(super) fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
        anomalies: &Anomalies,
    ) -> Spawn {
        let bypass = rng.sample(anomalies.spawn_bypass);
        for _ in 0..anomalies.spawn_attempts {
            let pos = Position::new(
                rng.random_range(0..grid.width),
                rng.random_range(0..grid.height),
            );
            if bypass {
                self.cells.push(pos);
                return Spawn::Bypassed(pos);
            }
            if !snake.occupies(pos) && !self.cells.contains(&pos) {
                self.cells.push(pos);
                return Spawn::Placed(pos);
            }
        }
        Spawn::Exhausted
    }
}

/// What happened when an apple spawn was attempted
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Spawn {
    /// The apple went on a free cell
    Placed(Position),

    /// Occupancy was ignored and the apple went on the first cell drawn
    Bypassed(Position),

    /// No free cell turned up within the attempt limit
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use crate::game::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn snake() -> Snake {
        Snake::new(consts::GRID.center(), Direction::East, 3)
    }

    #[test]
    fn normal_spawn_avoids_snake_and_apples() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = snake();
        let anomalies = Anomalies::none();
        let mut pool = ApplePool::default();
        for _ in 0..200 {
            let before = pool.clone();
            match pool.spawn(&mut rng, consts::GRID, &snake, &anomalies) {
                Spawn::Placed(pos) => {
                    assert!(consts::GRID.contains(pos), "{pos:?} is off the board");
                    assert!(!snake.occupies(pos), "{pos:?} is on the snake");
                    assert!(
                        !before.cells().contains(&pos),
                        "{pos:?} already had an apple"
                    );
                }
                other => panic!("unexpected spawn outcome {other:?}"),
            }
        }
        assert_eq!(pool.len(), 200);
    }

    #[test]
    fn bypass_spawn_can_land_on_snake() {
        let grid = Grid {
            width: 2,
            height: 1,
        };
        let snake = Snake::from_cells([Position::new(0, 0)], Direction::East);
        let anomalies = Anomalies::none()
            .with_bypass_probability(1.0)
            .expect("1 should be a valid probability");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut pool = ApplePool::default();
        let mut on_snake = 0;
        for _ in 0..50 {
            let Spawn::Bypassed(pos) = pool.spawn(&mut rng, grid, &snake, &anomalies) else {
                panic!("every spawn should be a bypass spawn");
            };
            if snake.occupies(pos) {
                on_snake += 1;
            }
        }
        assert_eq!(pool.len(), 50);
        assert!(on_snake > 0, "no bypass spawn landed on the snake");
    }

    #[test]
    fn saturated_board_is_silent_noop() {
        let grid = Grid {
            width: 2,
            height: 1,
        };
        let snake = Snake::from_cells([Position::new(0, 0)], Direction::East);
        let mut pool = ApplePool::default();
        pool.insert(Position::new(1, 0));
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(
            pool.spawn(&mut rng, grid, &snake, &Anomalies::none()),
            Spawn::Exhausted
        );
        assert_eq!(pool.cells(), [Position::new(1, 0)]);
    }

    #[test]
    fn bypass_rate_matches_configuration() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = snake();
        let anomalies = Anomalies::default();
        let mut bypassed = 0u32;
        let trials = 10_000u32;
        for _ in 0..trials {
            let mut pool = ApplePool::default();
            let spawn = pool.spawn(&mut rng, consts::GRID, &snake, &anomalies);
            if matches!(spawn, Spawn::Bypassed(_)) {
                bypassed += 1;
            }
        }
        let rate = f64::from(bypassed) / f64::from(trials);
        assert!(
            (rate - consts::SPAWN_BYPASS_PROBABILITY).abs() < 0.02,
            "observed bypass rate {rate}"
        );
    }

    #[test]
    fn find_returns_first_duplicate() {
        let mut pool = ApplePool::default();
        pool.insert(Position::new(3, 3));
        pool.insert(Position::new(4, 4));
        pool.insert(Position::new(4, 4));
        assert_eq!(pool.find(Position::new(4, 4)), Some(1));
        assert_eq!(pool.remove(1), Position::new(4, 4));
        assert_eq!(pool.cells(), [Position::new(3, 3), Position::new(4, 4)]);
        assert_eq!(pool.find(Position::new(5, 5)), None);
    }
}
