use super::{
    config::GameConfig,
    direction::Direction,
    state::{Collision, GameState, Phase, Point, Snake},
};
use log::{debug, info};
use rand::Rng;

/// What one tick did to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened: not running yet, already over, or no direction set.
    Idle,
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto the food and grew.
    Ate,
    /// The snake hit a wall or itself; the game is over.
    Crashed(Collision),
}

/// The game engine: owns the update rules and the food RNG, and operates
/// on an explicitly passed `GameState`.
pub struct GameEngine<R = rand::rngs::ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<rand::rngs::ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> GameEngine<R> {
        GameEngine { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh initial state: two-segment snake, no direction,
    /// random food, zero score, not started.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::initial(self.config.cells_per_side(), self.config.cell_size);
        let food = self.spawn_food();
        GameState::new(snake, food, self.config.board_size, self.config.cell_size)
    }

    /// Buffer a directional input.
    ///
    /// Ignored while the game is over. While running, a reversal of the
    /// current direction is ignored; anything else overwrites the pending
    /// slot. The first accepted input of a game also commits the direction
    /// immediately and starts the game.
    pub fn queue_direction(&mut self, state: &mut GameState, direction: Direction) {
        match state.phase {
            Phase::GameOver => {}
            Phase::NotStarted => {
                state.direction = Some(direction);
                state.pending_direction = Some(direction);
                state.phase = Phase::Running;
                info!("game started, heading {:?}", direction);
            }
            Phase::Running => {
                if let Some(current) = state.direction {
                    if current.is_opposite(direction) {
                        debug!("ignoring reversal {:?} -> {:?}", current, direction);
                        return;
                    }
                }
                state.pending_direction = Some(direction);
            }
        }
    }

    /// Advance the game by one step.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        // Consume the pending slot exactly once per tick
        if let Some(pending) = state.pending_direction.take() {
            let reversal = state
                .direction
                .is_some_and(|current| current.is_opposite(pending));
            if !reversal {
                state.direction = Some(pending);
            }
        }

        let Some(direction) = state.direction else {
            return TickOutcome::Idle;
        };

        let new_head = state.snake.head().stepped(direction, state.cell_size);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.phase = Phase::GameOver;
            info!(
                "game over ({:?}) at {:?}, final score {}",
                collision, new_head, state.score
            );
            return TickOutcome::Crashed(collision);
        }

        state.snake.body.insert(0, new_head);

        if new_head == state.food {
            state.score += 1;
            state.food = self.spawn_food();
            debug!("ate food at {:?}, score {}", new_head, state.score);
            TickOutcome::Ate
        } else {
            state.snake.body.pop();
            TickOutcome::Moved
        }
    }

    fn check_collision(&self, state: &GameState, pos: Point) -> Option<Collision> {
        if !state.is_in_bounds(pos) {
            return Some(Collision::Wall);
        }
        // The tail has not been dropped yet, so it counts too
        if state.snake.contains(pos) {
            return Some(Collision::SelfHit);
        }
        None
    }

    /// Pick a uniform-random cell. Does not avoid the snake; food may land
    /// on an occupied cell.
    fn spawn_food(&mut self) -> Point {
        let cells = self.config.cells_per_side();
        let x = self.rng.gen_range(0..cells) * self.config.cell_size;
        let y = self.rng.gen_range(0..cells) * self.config.cell_size;
        Point::new(x, y)
    }
}
