use super::direction::Direction;

/// A position on the board, in board units (multiples of the cell size).
///
/// Signed so that out-of-bounds candidates (e.g. x = -20 after a step left
/// from the edge) are representable during collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one cell away in the given direction.
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// The snake body: ordered segments with the head at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub body: Vec<Point>,
}

impl Snake {
    /// The initial two-segment snake, extending leftward from the head.
    pub fn initial(cells_per_side: i32, cell_size: i32) -> Self {
        let head_col = cells_per_side / 2 - 1;
        let row = cells_per_side / 2;
        Self {
            body: vec![
                Point::new(head_col * cell_size, row * cell_size),
                Point::new((head_col - 1) * cell_size, row * cell_size),
            ],
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Whether any segment (head included) occupies `pos`.
    pub fn contains(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle phase of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Snake is on the board but immovable; waiting for the first input.
    NotStarted,
    /// Ticks advance the snake.
    Running,
    /// Terminal state after a collision; only a restart leaves it.
    GameOver,
}

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Complete state of one game, owned and passed explicitly to the engine
/// and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    /// Committed direction of travel; unset until the first accepted input.
    pub direction: Option<Direction>,
    /// One-slot input buffer, overwritten by each input event and consumed
    /// at most once per tick.
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub phase: Phase,
    /// Board extent in board units per side.
    pub board_size: i32,
    /// Size of one grid cell in board units.
    pub cell_size: i32,
}

impl GameState {
    pub fn new(snake: Snake, food: Point, board_size: i32, cell_size: i32) -> Self {
        Self {
            snake,
            food,
            direction: None,
            pending_direction: None,
            score: 0,
            phase: Phase::NotStarted,
            board_size,
            cell_size,
        }
    }

    /// Number of cells per side of the grid.
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.cell_size
    }

    /// Check if a point lies within the board.
    pub fn is_in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.x < self.board_size && pos.y >= 0 && pos.y < self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_step() {
        let pos = Point::new(100, 100);
        assert_eq!(pos.stepped(Direction::Left, 20), Point::new(80, 100));
        assert_eq!(pos.stepped(Direction::Right, 20), Point::new(120, 100));
        assert_eq!(pos.stepped(Direction::Up, 20), Point::new(100, 80));
        assert_eq!(pos.stepped(Direction::Down, 20), Point::new(100, 120));
    }

    #[test]
    fn test_initial_snake() {
        // 20 cells of 20 units: head at (180, 200), tail at (160, 200)
        let snake = Snake::initial(20, 20);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(180, 200));
        assert_eq!(snake.body[1], Point::new(160, 200));
    }

    #[test]
    fn test_snake_occupancy() {
        let snake = Snake::initial(20, 20);
        assert!(snake.contains(Point::new(180, 200)));
        assert!(snake.contains(Point::new(160, 200)));
        assert!(!snake.contains(Point::new(200, 200)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Snake::initial(20, 20), Point::new(0, 0), 400, 20);

        assert!(state.is_in_bounds(Point::new(0, 0)));
        assert!(state.is_in_bounds(Point::new(380, 380)));
        assert!(!state.is_in_bounds(Point::new(-20, 200)));
        assert!(!state.is_in_bounds(Point::new(400, 0)));
        assert!(!state.is_in_bounds(Point::new(0, 400)));
    }
}
