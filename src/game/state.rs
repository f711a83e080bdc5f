use super::action::Direction;

/// Convert a cell count or index to a coordinate, saturating at `i32::MAX`
pub fn to_coord(cells: usize) -> i32 {
    i32::try_from(cells).unwrap_or(i32::MAX)
}

/// Middle cell of a `width` x `height` grid
pub fn grid_center(width: usize, height: usize) -> Position {
    Position::new(to_coord(width / 2), to_coord(height / 2))
}

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Fold the position back onto a `width` x `height` torus
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.rem_euclid(to_coord(width)),
            y: self.y.rem_euclid(to_coord(height)),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    pub positions: Vec<Position>,
    /// Target size; the body grows toward it one cell per tick
    pub length: usize,
    /// Current direction of movement
    pub direction: Direction,
    /// Direction queued for the next tick
    pub next_direction: Option<Direction>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            positions: vec![head],
            length: 1,
            direction,
            next_direction: None,
        }
    }

    /// Create a snake whose body trails straight behind the head
    pub fn with_length(head: Position, direction: Direction, length: usize) -> Self {
        let mut snake = Self::new(head, direction);
        let (dx, dy) = direction.delta();

        for i in 1..length.max(1) {
            let prev = snake.positions[i - 1];
            snake.positions.push(prev.moved_by(-dx, -dy));
        }
        snake.length = snake.positions.len();

        snake
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.positions[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Apply the queued direction, if any
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Push a new head one cell ahead, wrapping at the grid edges.
    ///
    /// The tail is dropped once the body exceeds `length`.
    pub fn advance(&mut self, width: usize, height: usize) {
        let new_head = self
            .head()
            .moved_in_direction(self.direction)
            .wrapped(width, height);
        self.positions.insert(0, new_head);

        if self.positions.len() > self.length {
            self.positions.pop();
        }
    }

    /// Shrink back to a single cell
    pub fn reset(&mut self, head: Position, direction: Direction) {
        self.positions.clear();
        self.positions.push(head);
        self.length = 1;
        self.direction = direction;
        self.next_direction = None;
    }

    /// Get the number of occupied cells
    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake ran into itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub grid_width: usize,
    pub grid_height: usize,
    pub apples_eaten: u32,
    pub resets: u32,
    pub ticks: u32,
    pub paused: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Apple, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            apple,
            grid_width,
            grid_height,
            apples_eaten: 0,
            resets: 0,
            ticks: 0,
            paused: false,
        }
    }

    /// Cell the snake starts from and returns to after a collision
    pub fn center(&self) -> Position {
        grid_center(self.grid_width, self.grid_height)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.positions.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_position_wrapping() {
        assert_eq!(Position::new(10, 3).wrapped(10, 8), Position::new(0, 3));
        assert_eq!(Position::new(-1, 3).wrapped(10, 8), Position::new(9, 3));
        assert_eq!(Position::new(4, -1).wrapped(10, 8), Position::new(4, 7));
        assert_eq!(Position::new(4, 8).wrapped(10, 8), Position::new(4, 0));
        assert_eq!(Position::new(4, 4).wrapped(10, 8), Position::new(4, 4));
    }

    #[test]
    fn test_coordinate_conversion_saturates() {
        assert_eq!(to_coord(17), 17);
        assert_eq!(to_coord(usize::MAX), i32::MAX);
        assert_eq!(grid_center(32, 24), Position::new(16, 12));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.length, 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.positions[1], Position::new(4, 5));
        assert_eq!(snake.positions[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);

        snake.advance(10, 10);
        assert_eq!(snake.len(), 3);
        assert!(!snake.positions.contains(&Position::new(3, 5)));
        assert_eq!(snake.head(), Position::new(6, 5));

        // Growth phase keeps the tail
        snake.length += 1;
        snake.advance(10, 10);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.positions[3], Position::new(4, 5));
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_snake_advance_wraps_right_edge() {
        let mut snake = Snake::new(Position::new(9, 4), Direction::Right);
        snake.advance(10, 10);
        assert_eq!(snake.head(), Position::new(0, 4));
    }

    #[test]
    fn test_update_direction_consumes_pending() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.next_direction = Some(Direction::Up);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.next_direction, None);

        snake.update_direction();
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
    }

    #[test]
    fn test_snake_reset() {
        let mut snake = Snake::with_length(Position::new(5, 5), Direction::Right, 4);
        snake.next_direction = Some(Direction::Up);
        snake.reset(Position::new(2, 2), Direction::Down);

        assert_eq!(snake.positions, vec![Position::new(2, 2)]);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.next_direction, None);
    }

    #[test]
    fn test_center() {
        let state = GameState::new(
            Snake::new(Position::new(0, 0), Direction::Right),
            Apple::new(Position::new(3, 3)),
            32,
            24,
        );
        assert_eq!(state.center(), Position::new(16, 12));
        assert!(state.is_occupied_by_snake(Position::new(0, 0)));
        assert!(!state.is_occupied_by_snake(Position::new(3, 3)));
    }
}
