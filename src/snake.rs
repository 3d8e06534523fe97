use std::collections::VecDeque;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Seed body length at session start.
pub const SEED_LENGTH: usize = 3;

/// Mutable snake state: body, heading, growth debt and liveness.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending_heading: Option<Direction>,
    growth_debt: u32,
    alive: bool,
}

impl Snake {
    /// Creates the seed snake: three horizontally adjacent cells centered
    /// on the grid, heading right.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        debug_assert!(usize::from(bounds.width) >= SEED_LENGTH && bounds.height > 0);

        Self::from_segments(Self::seed_cells(bounds), Direction::Right)
    }

    /// Returns the seed body footprint (head first) for `bounds`.
    ///
    /// Obstacle generation keeps exactly these cells clear.
    #[must_use]
    pub fn seed_cells(bounds: GridSize) -> Vec<Position> {
        let center = bounds.center();
        (0..SEED_LENGTH as i32)
            .map(|i| Position {
                x: center.x - i,
                y: center.y,
            })
            .collect()
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            heading,
            pending_heading: None,
            growth_debt: 0,
            alive: true,
        }
    }

    /// Requests a direction change for the next step.
    ///
    /// The exact reverse of the current heading is rejected; the current
    /// heading itself is a harmless no-op. Turns never apply mid-step: the
    /// last accepted request wins when the next step begins.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.heading || direction == self.heading.opposite() {
            return;
        }

        self.pending_heading = Some(direction);
    }

    /// Advances the snake one cell. No-op when dead.
    ///
    /// The new head wraps around the grid edges. On self-collision the
    /// snake dies and the body is left untouched.
    pub fn step(&mut self, bounds: GridSize) {
        if !self.alive {
            return;
        }

        if let Some(next) = self.pending_heading.take() {
            self.heading = next;
        }

        let new_head = self.head().offset(self.heading).wrapped(bounds);

        // The tail cell vacates this step unless growth keeps it in place,
        // so it only counts as solid while growth debt is pending.
        let solid = if self.growth_debt > 0 {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        if self.body.iter().take(solid).any(|cell| *cell == new_head) {
            self.alive = false;
            return;
        }

        self.body.push_front(new_head);
        if self.growth_debt > 0 {
            self.growth_debt -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Adds `segments` to the growth debt, realized one cell per later step.
    pub fn grow(&mut self, segments: u32) {
        self.growth_debt += segments;
    }

    /// Marks the snake dead without touching the body.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Returns true while the snake has not collided.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current movement heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Returns the pending growth debt.
    #[must_use]
    pub fn growth_debt(&self) -> u32 {
        self.growth_debt
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::grid::{GridSize, Position};
    use crate::input::Direction;

    use super::Snake;

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    #[test]
    fn seed_body_is_three_cells_centered_heading_right() {
        let snake = Snake::centered(BOUNDS);

        let body: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ]
        );
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.growth_debt(), 0);
        assert!(snake.is_alive());
    }

    #[test]
    fn step_translates_without_growth() {
        let mut snake = Snake::centered(BOUNDS);

        snake.step(BOUNDS);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn step_wraps_around_the_edge() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 9, y: 5 }, Position { x: 8, y: 5 }],
            Direction::Right,
        );

        snake.step(BOUNDS);

        assert_eq!(snake.head(), Position { x: 0, y: 5 });
        assert!(snake.is_alive());
    }

    #[test]
    fn growth_debt_is_consumed_one_segment_per_step() {
        let mut snake = Snake::centered(BOUNDS);

        snake.grow(2);
        assert_eq!(snake.growth_debt(), 2);

        snake.step(BOUNDS);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.growth_debt(), 1);

        snake.step(BOUNDS);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.growth_debt(), 0);

        snake.step(BOUNDS);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn reverse_steer_is_rejected() {
        let mut snake = Snake::centered(BOUNDS);

        snake.steer(Direction::Left);
        snake.step(BOUNDS);

        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn same_direction_steer_keeps_pending_turn() {
        let mut snake = Snake::centered(BOUNDS);

        snake.steer(Direction::Up);
        snake.steer(Direction::Right);
        snake.step(BOUNDS);

        assert_eq!(snake.heading(), Direction::Up);
        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn last_valid_steer_before_a_step_wins() {
        let mut snake = Snake::centered(BOUNDS);

        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        snake.step(BOUNDS);

        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn turns_apply_only_at_step_boundaries() {
        let mut snake = Snake::centered(BOUNDS);

        snake.steer(Direction::Up);
        assert_eq!(snake.heading(), Direction::Right);

        snake.step(BOUNDS);
        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn self_collision_kills_without_mutating_the_body() {
        // Head at (2,2) turning left into its own body.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 1 },
            ],
            Direction::Up,
        );

        snake.steer(Direction::Left);
        snake.step(BOUNDS);

        assert!(!snake.is_alive());
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Position { x: 2, y: 2 });
    }

    #[test]
    fn vacating_tail_cell_is_not_solid() {
        // Square loop: the new head lands exactly on the current tail.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
            ],
            Direction::Up,
        );

        snake.step(BOUNDS);

        assert!(snake.is_alive());
        assert_eq!(snake.head(), Position { x: 1, y: 0 });
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn tail_cell_is_solid_while_growth_is_pending() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
            ],
            Direction::Up,
        );

        snake.grow(1);
        snake.step(BOUNDS);

        assert!(!snake.is_alive());
    }

    #[test]
    fn dead_snake_ignores_steps() {
        let mut snake = Snake::centered(BOUNDS);
        snake.kill();

        snake.step(BOUNDS);

        assert_eq!(snake.head(), Position { x: 5, y: 5 });
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn body_never_contains_duplicates_while_alive() {
        let mut snake = Snake::centered(BOUNDS);
        snake.grow(4);

        // Walk a spiral of turns; the body must stay duplicate-free.
        let turns = [
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ];
        for turn in turns {
            snake.steer(turn);
            snake.step(BOUNDS);
            snake.step(BOUNDS);

            if !snake.is_alive() {
                break;
            }
            let unique: HashSet<_> = snake.segments().copied().collect();
            assert_eq!(unique.len(), snake.len());
        }
    }
}
