use std::collections::HashSet;

use rand::Rng;

use crate::config::OBSTACLE_CELLS_PER_LEVEL;
use crate::grid::{GridSize, Position};

/// Cap on block placements per regeneration, for degenerate grids.
const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

/// Blocked cells, regenerated whole-sale on every level change.
///
/// The generator is intentionally loose: random rectangular blocks that may
/// overlap each other, with no solvability guarantee beyond keeping the
/// snake's seed footprint clear. Only the density bound matters; any
/// reproducibility comes from the injected RNG.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    cells: HashSet<Position>,
}

impl ObstacleField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field from explicit cells.
    #[must_use]
    pub fn from_cells<I: IntoIterator<Item = Position>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Replaces the field with at least `(level - 1) * OBSTACLE_CELLS_PER_LEVEL`
    /// cells stamped from random blocks, skipping cells in `keep_clear`.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        level: u32,
        keep_clear: &[Position],
    ) {
        self.cells.clear();

        let target = level.saturating_sub(1) as usize * OBSTACLE_CELLS_PER_LEVEL;
        let mut attempts = 0;
        while self.cells.len() < target && attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            self.stamp_block(rng, bounds, keep_clear);
        }
    }

    /// Stamps one random block (width 2–6, height 1–3) fully inside the grid.
    fn stamp_block<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        keep_clear: &[Position],
    ) {
        let width = i32::from(bounds.width);
        let height = i32::from(bounds.height);

        let block_width = rng.gen_range(2..=6).min(width);
        let block_height = rng.gen_range(1..=3).min(height);
        let left = rng.gen_range(0..=width - block_width);
        let top = rng.gen_range(0..=height - block_height);

        for y in top..top + block_height {
            for x in left..left + block_width {
                let cell = Position { x, y };
                if !keep_clear.contains(&cell) {
                    self.cells.insert(cell);
                }
            }
        }
    }

    /// Returns true when `cell` is blocked.
    #[must_use]
    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterates over blocked cells in arbitrary order.
    pub fn cells(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    /// Returns the number of blocked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when no cell is blocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
