use crate::input::Direction;

/// Logical playfield dimensions in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, rounding toward the bottom right on even
    /// dimensions.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}

/// Grid position in logical cell coordinates. Plain value, no identity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one step in `direction`, unwrapped.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// The playfield wraps, it does not clamp: leaving one edge re-enters
    /// from the opposite edge.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 { wrapped + upper_bound } else { wrapped }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{GridSize, Position};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn wrapping_keeps_coordinates_inside_bounds() {
        let left_edge = Position { x: -1, y: 3 }.wrapped(BOUNDS);
        let bottom_edge = Position { x: 4, y: 8 }.wrapped(BOUNDS);
        let interior = Position { x: 4, y: 3 }.wrapped(BOUNDS);

        assert_eq!(left_edge, Position { x: 9, y: 3 });
        assert_eq!(bottom_edge, Position { x: 4, y: 0 });
        assert_eq!(interior, Position { x: 4, y: 3 });
    }

    #[test]
    fn offset_follows_direction_delta() {
        let origin = Position { x: 4, y: 4 };

        assert_eq!(origin.offset(Direction::Up), Position { x: 4, y: 3 });
        assert_eq!(origin.offset(Direction::Down), Position { x: 4, y: 5 });
        assert_eq!(origin.offset(Direction::Left), Position { x: 3, y: 4 });
        assert_eq!(origin.offset(Direction::Right), Position { x: 5, y: 4 });
    }

    #[test]
    fn cell_iteration_covers_the_whole_grid() {
        let cells: Vec<_> = BOUNDS.cells().collect();

        assert_eq!(cells.len(), BOUNDS.total_cells());
        assert_eq!(cells[0], Position { x: 0, y: 0 });
        assert_eq!(cells[cells.len() - 1], Position { x: 9, y: 7 });
        assert!(cells.iter().all(|cell| cell.is_within_bounds(BOUNDS)));
    }

    #[test]
    fn center_of_even_grid() {
        assert_eq!(
            GridSize {
                width: 10,
                height: 10
            }
            .center(),
            Position { x: 5, y: 5 }
        );
    }
}
