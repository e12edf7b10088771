use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::spawn_food;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Direction the snake faces at the start of every round.
pub const START_DIRECTION: Direction = Direction::Up;

/// Why the last round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Result of one call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved without eating.
    Moved,
    /// The snake ate the food and grew by one segment.
    Ate,
    /// The move was fatal; the state is now stopped and otherwise untouched.
    Collided(DeathReason),
    /// The game was already stopped; nothing changed.
    Halted,
}

/// Complete mutable game state for one session.
///
/// `direction` is the direction of the last executed move. Key presses only
/// ever touch `pending_direction`, which the next tick commits.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub food: Position,
    pub score: u32,
    pub running: bool,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(start_position(bounds));
        let food = spawn_food(&mut rng, bounds, &snake);

        Self {
            snake,
            direction: START_DIRECTION,
            pending_direction: START_DIRECTION,
            food,
            score: 0,
            running: true,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Replaces the whole state with a freshly initialised round.
    ///
    /// The random source carries over so seeded sessions stay reproducible.
    pub fn reset(&mut self) {
        let snake = Snake::new(start_position(self.bounds));
        self.food = spawn_food(&mut self.rng, self.bounds, &snake);
        self.snake = snake;
        self.direction = START_DIRECTION;
        self.pending_direction = START_DIRECTION;
        self.score = 0;
        self.running = true;
        self.death_reason = None;
        self.tick_count = 0;
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Halted;
        }

        let direction = self.pending_direction;
        let next_head = self.snake.head().step(direction);

        let collision = if !next_head.is_within_bounds(self.bounds) {
            Some(DeathReason::Wall)
        } else if self.snake.occupies(next_head) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = collision {
            self.running = false;
            self.death_reason = Some(reason);
            return TickOutcome::Collided(reason);
        }

        self.tick_count += 1;
        let ate = next_head == self.food;
        self.snake.advance(next_head, ate);

        if ate {
            self.food = spawn_food(&mut self.rng, self.bounds, &self.snake);
            self.score += 1;
        }

        self.direction = direction;

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Buffers `requested` for the next tick unless it reverses the last
    /// committed move. Returns whether the request was accepted.
    pub fn set_pending_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.direction, requested) {
            return false;
        }

        self.pending_direction = requested;
        true
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
