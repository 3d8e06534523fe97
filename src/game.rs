use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{self, POINTS_PER_LEVEL};
use crate::food::Food;
use crate::grid::GridSize;
use crate::input::GameInput;
use crate::obstacles::ObstacleField;
use crate::snake::Snake;

/// Session lifecycle state.
///
/// `NotStarted → Running ⇄ Paused`; `Running → GameOver → Running` via the
/// reset command.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete mutable simulation state for one session.
///
/// The session is the sole owner of mutable game state; the renderer reads
/// it between updates and never writes.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub obstacles: ObstacleField,
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub status: SessionStatus,
    pub tick_count: u64,
    bounds: GridSize,
    high_score: u32,
    pending_high_score: Option<u32>,
    new_high_score: bool,
    ticks_until_step: u32,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, high_score: u32) -> Self {
        Self::with_rng(bounds, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, high_score: u32, seed: u64) -> Self {
        Self::with_rng(bounds, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, high_score: u32, mut rng: StdRng) -> Self {
        let (snake, obstacles, food) = build_board(&mut rng, bounds, 1);
        let speed = config::speed_for_level(1);

        Self {
            snake,
            food,
            obstacles,
            score: 0,
            level: 1,
            speed,
            status: SessionStatus::NotStarted,
            tick_count: 0,
            bounds,
            high_score,
            pending_high_score: None,
            new_high_score: false,
            ticks_until_step: config::ticks_per_step(speed),
            rng,
        }
    }

    /// Returns the playfield dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the best score seen so far, including this session's.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns true when this session set a new high score at game over.
    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    /// Takes the not-yet-persisted high score, if the session just set one.
    ///
    /// Armed at most once per session, at the transition into game over;
    /// the driver drains it and writes the score file.
    pub fn take_high_score_update(&mut self) -> Option<u32> {
        self.pending_high_score.take()
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            // Steering is forwarded in every state; it only takes effect on
            // the next step of a running session.
            GameInput::Direction(direction) => self.snake.steer(direction),
            GameInput::Start => {
                if self.status == SessionStatus::NotStarted {
                    self.status = SessionStatus::Running;
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    SessionStatus::Running => SessionStatus::Paused,
                    SessionStatus::Paused => SessionStatus::Running,
                    other => other,
                };
            }
            GameInput::Reset => {
                if self.status == SessionStatus::GameOver {
                    self.reset();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Fixed-rate driver entry point.
    ///
    /// Counts down the speed-derived divisor and advances the simulation by
    /// one step every [`config::ticks_per_step`] ticks, so faster levels
    /// move faster without changing the poll/render rate.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.ticks_until_step -= 1;
        if self.ticks_until_step > 0 {
            return;
        }

        self.step();
        self.ticks_until_step = config::ticks_per_step(self.speed);
    }

    /// Advances the simulation by exactly one step.
    ///
    /// No-op unless running. Applies movement, collisions, scoring,
    /// leveling and food respawn in that order.
    pub fn step(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }

        self.snake.step(self.bounds);

        if self.snake.is_alive() && self.obstacles.contains(self.snake.head()) {
            self.snake.kill();
        }

        if !self.snake.is_alive() {
            self.finish();
            return;
        }

        if self.snake.head() == self.food.position {
            self.consume_food();
        }
    }

    fn finish(&mut self) {
        self.status = SessionStatus::GameOver;

        if self.score > self.high_score {
            self.high_score = self.score;
            self.pending_high_score = Some(self.score);
            self.new_high_score = true;
        }
    }

    fn consume_food(&mut self) {
        self.score += self.food.points();
        self.snake.grow(self.food.growth());

        let level = 1 + self.score / POINTS_PER_LEVEL;
        if level > self.level {
            self.level = level;
            self.speed = config::speed_for_level(level);
            self.obstacles.regenerate(
                &mut self.rng,
                self.bounds,
                level,
                &Snake::seed_cells(self.bounds),
            );
        }

        self.food = Food::spawn(&mut self.rng, self.bounds, &self.obstacles, &self.snake, None);
    }

    /// Rebuilds the board for a fresh run, straight into `Running`.
    ///
    /// Only reachable from game over. The persisted high score carries
    /// over; the new-high flag does not.
    fn reset(&mut self) {
        let (snake, obstacles, food) = build_board(&mut self.rng, self.bounds, 1);

        self.snake = snake;
        self.obstacles = obstacles;
        self.food = food;
        self.score = 0;
        self.level = 1;
        self.speed = config::speed_for_level(1);
        self.tick_count = 0;
        self.new_high_score = false;
        self.ticks_until_step = config::ticks_per_step(self.speed);
        self.status = SessionStatus::Running;
    }
}

fn build_board(rng: &mut StdRng, bounds: GridSize, level: u32) -> (Snake, ObstacleField, Food) {
    let snake = Snake::centered(bounds);
    let mut obstacles = ObstacleField::new();
    obstacles.regenerate(rng, bounds, level, &Snake::seed_cells(bounds));
    let food = Food::spawn(rng, bounds, &obstacles, &snake, None);

    (snake, obstacles, food)
}
