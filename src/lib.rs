//! Grid snake for the terminal.
//!
//! The simulation core (grid geometry, snake, food, obstacle field and the
//! session rules engine) lives in the library and is driven one tick at a
//! time, so every rule can be exercised deterministically in tests with a
//! seeded RNG. The binary owns the terminal runtime and the
//! poll → tick → render loop.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod obstacles;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
