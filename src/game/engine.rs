use super::{
    action::{turn, Action, Direction},
    config::{clamp_dimension, GameConfig, Variant},
    state::{grid_center, to_coord, Apple, CollisionType, GameState, Position, Snake},
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake moved at all (false while paused)
    pub moved: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// Grid dimensions outside the supported range are clamped into it.
    pub fn new(mut config: GameConfig) -> Self {
        config.grid_width = clamp_dimension(config.grid_width);
        config.grid_height = clamp_dimension(config.grid_height);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: one-cell snake in the middle heading right
    pub fn reset(&mut self) -> GameState {
        let center = grid_center(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(center, Direction::Right);
        let apple = Apple::new(self.spawn_apple_avoid_snake(&snake).unwrap_or(center));

        GameState::new(snake, apple, self.config.grid_width, self.config.grid_height)
    }

    /// Feed a direction request into the snake.
    ///
    /// Pending variants queue it for the next tick unless it reverses the
    /// current heading; the turn-table variant resolves it immediately.
    /// Requests are dropped while the game is paused.
    pub fn steer(&self, state: &mut GameState, requested: Direction) {
        if state.paused {
            return;
        }

        let snake = &mut state.snake;

        if self.config.variant.uses_turn_table() {
            snake.direction = turn(requested, snake.direction);
        } else if !snake.direction.is_opposite(requested) {
            snake.next_direction = Some(requested);
        }
    }

    pub fn toggle_pause(&self, state: &mut GameState) {
        state.paused = !state.paused;
        debug!("paused: {}", state.paused);
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.paused {
            return StepResult {
                moved: false,
                info: StepInfo::default(),
            };
        }

        if let Action::Move(direction) = action {
            self.steer(state, direction);
        }
        state.snake.update_direction();

        let info = match self.config.variant {
            Variant::Classic => self.tick_classic(state),
            Variant::Checked | Variant::TurnTable => self.tick_checked(state),
        };

        state.ticks += 1;

        StepResult { moved: true, info }
    }

    /// Probe the body before moving, eat, then probe again
    fn tick_classic(&mut self, state: &mut GameState) -> StepInfo {
        let next_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction)
            .wrapped(state.grid_width, state.grid_height);

        // The two cells nearest the head are skipped: the new head is
        // inserted before the tail is popped.
        let positions = &state.snake.positions;
        if positions.len() > 2 && positions[2..].contains(&next_head) {
            // The reset head may land on the apple
            let collision = Some(self.collide(state));
            return StepInfo {
                ate_apple: self.try_eat(state),
                collision,
            };
        }

        state.snake.advance(state.grid_width, state.grid_height);
        let ate_apple = self.try_eat(state);

        let collision = if state.snake.collides_with_body(state.snake.head()) {
            Some(self.collide(state))
        } else {
            None
        };

        StepInfo {
            ate_apple,
            collision,
        }
    }

    /// Move, then check the new head against the rest of the body
    fn tick_checked(&mut self, state: &mut GameState) -> StepInfo {
        state.snake.advance(state.grid_width, state.grid_height);

        if state.snake.collides_with_body(state.snake.head()) {
            return StepInfo {
                ate_apple: false,
                collision: Some(self.collide(state)),
            };
        }

        StepInfo {
            ate_apple: self.try_eat(state),
            collision: None,
        }
    }

    fn try_eat(&mut self, state: &mut GameState) -> bool {
        if state.snake.head() != state.apple.position {
            return false;
        }

        state.snake.length += 1;
        state.apples_eaten += 1;

        match self.spawn_apple_avoid_snake(&state.snake) {
            Some(pos) => state.apple.position = pos,
            None => debug!("no free cell left for the apple"),
        }
        debug!(
            "apple eaten, length {} -> apple at ({}, {})",
            state.snake.length, state.apple.position.x, state.apple.position.y
        );

        true
    }

    fn collide(&mut self, state: &mut GameState) -> CollisionType {
        info!(
            "self-collision at length {} after {} ticks",
            state.snake.len(),
            state.ticks
        );

        let center = state.center();
        let direction = Direction::random(&mut self.rng);
        state.snake.reset(center, direction);
        state.resets += 1;

        CollisionType::SelfCollision
    }

    /// Pick a uniformly random free cell, `None` when the snake fills the grid
    fn spawn_apple_avoid_snake(&mut self, snake: &Snake) -> Option<Position> {
        if snake.len() >= self.config.cell_count() {
            return None;
        }

        loop {
            let x = self.rng.gen_range(0..self.config.grid_width);
            let y = self.rng.gen_range(0..self.config.grid_height);
            let pos = Position::new(to_coord(x), to_coord(y));

            if !snake.positions.contains(&pos) {
                return Some(pos);
            }
        }
    }
}
