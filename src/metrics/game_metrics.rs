use std::time::{Duration, Instant};

use crate::game::{GameState, StepInfo};

/// Session-wide numbers shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub collisions: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            collisions: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Restart the clock; best length survives restarts
    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.collisions = 0;
    }

    pub fn on_step(&mut self, state: &GameState, info: &StepInfo) {
        if info.collision.is_some() {
            self.collisions += 1;
        }
        self.best_length = self.best_length.max(state.snake.length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Apple, CollisionType, Direction, Position, Snake};

    fn state_with_length(length: usize) -> GameState {
        let snake = Snake::with_length(Position::new(5, 5), Direction::Right, length);
        GameState::new(snake, Apple::new(Position::new(0, 0)), 10, 10)
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_step(&state_with_length(4), &StepInfo::default());
        assert_eq!(metrics.best_length, 4);

        let collided = StepInfo {
            collision: Some(CollisionType::SelfCollision),
            ..StepInfo::default()
        };
        metrics.on_step(&state_with_length(1), &collided);
        assert_eq!(metrics.best_length, 4); // Should not decrease
        assert_eq!(metrics.collisions, 1);

        metrics.on_game_start();
        assert_eq!(metrics.collisions, 0);
        assert_eq!(metrics.best_length, 4);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
