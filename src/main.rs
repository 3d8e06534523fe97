use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use serpent::config::{
    self, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_SLEEP_MS, TICK_INTERVAL_MS,
};
use serpent::game::GameSession;
use serpent::grid::GridSize;
use serpent::input::{self, GameInput};
use serpent::renderer;
use serpent::score::{load_high_score, save_high_score};
use serpent::terminal_runtime::TerminalSession;
use serpent::ui::hud::HudInfo;

/// Grid snake for the terminal with levels, obstacles and bonus food.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> io::Result<()> {
    let _cli = Cli::parse();

    TerminalSession::install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal)
}

fn run(terminal: &mut TerminalSession) -> io::Result<()> {
    let bounds = GridSize {
        width: DEFAULT_GRID_WIDTH,
        height: DEFAULT_GRID_HEIGHT,
    };
    let mut session = GameSession::new(bounds, load_high_score());
    let info = HudInfo {
        theme: &config::THEMES[0],
    };

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session, &info))?;

        // Drain everything that arrived since the last poll before updating.
        while let Some(event) = input::poll_input(Duration::ZERO)? {
            if matches!(event, GameInput::Quit) {
                return Ok(());
            }
            session.apply_input(event);
        }

        if last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();

            if let Some(new_high) = session.take_high_score_update() {
                let _ = save_high_score(new_high);
            }
        }

        thread::sleep(Duration::from_millis(FRAME_SLEEP_MS));
    }
}
