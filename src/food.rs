use rand::Rng;

use crate::config::{
    BONUS_FOOD_GROWTH, BONUS_FOOD_POINTS, BONUS_FOOD_PROBABILITY, NORMAL_FOOD_GROWTH,
    NORMAL_FOOD_POINTS,
};
use crate::grid::{GridSize, Position};
use crate::obstacles::ObstacleField;
use crate::snake::Snake;

/// Cell used when the board has no free cell left for a spawn.
pub const FALLBACK_SPAWN_CELL: Position = Position { x: 0, y: 0 };

/// Food variety.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Normal,
    Bonus,
}

impl FoodKind {
    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Normal => NORMAL_FOOD_POINTS,
            Self::Bonus => BONUS_FOOD_POINTS,
        }
    }

    /// Returns the growth debt granted when eaten.
    #[must_use]
    pub fn growth(self) -> u32 {
        match self {
            Self::Normal => NORMAL_FOOD_GROWTH,
            Self::Bonus => BONUS_FOOD_GROWTH,
        }
    }
}

/// The single pickup currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Creates a normal food at `position`.
    #[must_use]
    pub fn normal(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Normal,
        }
    }

    /// Creates a bonus food at `position`.
    #[must_use]
    pub fn bonus(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Bonus,
        }
    }

    /// Spawns food in a cell free of obstacles and snake body.
    ///
    /// The kind is `forced_kind` when given, otherwise bonus with
    /// probability [`BONUS_FOOD_PROBABILITY`].
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        obstacles: &ObstacleField,
        snake: &Snake,
        forced_kind: Option<FoodKind>,
    ) -> Self {
        let kind = forced_kind.unwrap_or_else(|| {
            if rng.gen_bool(BONUS_FOOD_PROBABILITY) {
                FoodKind::Bonus
            } else {
                FoodKind::Normal
            }
        });

        Self {
            position: spawn_position(rng, bounds, obstacles, snake),
            kind,
        }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        self.kind.points()
    }

    /// Returns the growth debt granted when eaten.
    #[must_use]
    pub fn growth(self) -> u32 {
        self.kind.growth()
    }
}

/// Draws a position uniformly from the free cells of the board.
///
/// Falls back to [`FALLBACK_SPAWN_CELL`] when every cell is taken, keeping
/// the spawn total.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    obstacles: &ObstacleField,
    snake: &Snake,
) -> Position {
    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|cell| !snake.occupies(*cell) && !obstacles.contains(*cell))
        .collect();

    if candidates.is_empty() {
        return FALLBACK_SPAWN_CELL;
    }

    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{BONUS_FOOD_GROWTH, BONUS_FOOD_POINTS};
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::obstacles::ObstacleField;
    use crate::snake::Snake;

    use super::{FALLBACK_SPAWN_CELL, Food, FoodKind, spawn_position};

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    #[test]
    fn spawn_never_lands_on_snake_or_obstacles() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let obstacles = ObstacleField::from_cells([
            Position { x: 4, y: 4 },
            Position { x: 5, y: 4 },
            Position { x: 4, y: 5 },
        ]);

        for _ in 0..200 {
            let position = spawn_position(&mut rng, BOUNDS, &obstacles, &snake);
            assert!(!snake.occupies(position));
            assert!(!obstacles.contains(position));
            assert!(position.is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn forced_kind_overrides_the_dice() {
        let mut rng = StdRng::seed_from_u64(8);
        let snake = Snake::centered(BOUNDS);
        let obstacles = ObstacleField::new();

        for _ in 0..50 {
            let food = Food::spawn(
                &mut rng,
                BOUNDS,
                &obstacles,
                &snake,
                Some(FoodKind::Bonus),
            );
            assert_eq!(food.kind, FoodKind::Bonus);
        }
    }

    #[test]
    fn random_kind_is_mostly_normal() {
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::centered(BOUNDS);
        let obstacles = ObstacleField::new();

        let bonus_count = (0..500)
            .filter(|_| {
                Food::spawn(&mut rng, BOUNDS, &obstacles, &snake, None).kind == FoodKind::Bonus
            })
            .count();

        // p = 0.08: both all-normal and majority-bonus draws indicate a bug.
        assert!(bonus_count > 0);
        assert!(bonus_count < 250);
    }

    #[test]
    fn full_board_falls_back_to_the_fixed_cell() {
        let tiny = GridSize {
            width: 2,
            height: 2,
        };
        let mut rng = StdRng::seed_from_u64(10);
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 0, y: 1 }],
            Direction::Up,
        );
        let obstacles = ObstacleField::from_cells([
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]);

        let position = spawn_position(&mut rng, tiny, &obstacles, &snake);

        assert_eq!(position, FALLBACK_SPAWN_CELL);
    }

    #[test]
    fn bonus_food_pays_and_grows_more() {
        let normal = Food::normal(Position { x: 1, y: 1 });
        let bonus = Food::bonus(Position { x: 2, y: 2 });

        assert!(bonus.points() > normal.points());
        assert!(bonus.growth() > normal.growth());
        assert_eq!(bonus.points(), BONUS_FOOD_POINTS);
        assert_eq!(bonus.growth(), BONUS_FOOD_GROWTH);
    }
}
