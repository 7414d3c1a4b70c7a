use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use grid_snake::clock::TickClock;
use grid_snake::config::{FRAME_INTERVAL, GridSize, Mode};
use grid_snake::error::AppError;
use grid_snake::game::{Control, GameEvent, GameState, GameStatus, update};
use grid_snake::input::{InputHandler, RawEvent};
use grid_snake::log;
use grid_snake::logger::init_logger;
use grid_snake::scene::describe;
use grid_snake::settings::{Settings, SettingsLayer, load_settings, settings_path};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook, terminal_size};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Snake on a wrap-around grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Presentation: solid blocks sized to the terminal, or a fixed text grid.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Grid columns; defaults to the terminal width (blocks) or 20 (text).
    #[arg(long)]
    width: Option<u16>,

    /// Grid rows; defaults to the terminal height (blocks) or 12 (text).
    #[arg(long)]
    height: Option<u16>,

    /// Snake moves per second.
    #[arg(long = "ticks-per-second")]
    ticks_per_second: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to read instead of the per-user default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append diagnostic log lines to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings_layer(&self) -> SettingsLayer {
        SettingsLayer {
            mode: self.mode,
            ticks_per_second: self.ticks_per_second,
            width: self.width,
            height: self.height,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log!("exiting with error: {error}");
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_logger(path)?;
    }

    let settings_file = cli.config.clone().unwrap_or_else(settings_path);
    let layer = load_settings(&settings_file)?.overlaid_with(cli.settings_layer());
    let settings = Settings::resolve(layer)?;

    let (columns, rows) = terminal_size()?;
    let bounds = settings.grid_for(columns, rows)?;
    log!(
        "starting: mode={} grid={}x{} ticks_per_second={} terminal={columns}x{rows}",
        settings.mode.theme().name,
        bounds.width,
        bounds.height,
        settings.ticks_per_second,
    );

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    play(&mut session, &settings, bounds, &mut rng)
}

fn play(
    session: &mut TerminalSession,
    settings: &Settings,
    bounds: GridSize,
    rng: &mut StdRng,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut clock = TickClock::per_second(settings.ticks_per_second);
    let mut state = GameState::new(bounds, rng);
    let mut last_frame = Instant::now();
    let mut events = Vec::new();

    loop {
        events.clear();
        for raw in input.drain()? {
            match raw {
                RawEvent::Key(key) => events.push(GameEvent::KeyDown(key)),
                RawEvent::Resize { columns, rows } => {
                    log!("terminal resized to {columns}x{rows}");
                    session.clear()?;
                }
            }
        }

        let now = Instant::now();
        let running = state.status == GameStatus::Running;
        let due = clock.advance_while(running, now.duration_since(last_frame));
        last_frame = now;
        events.extend((0..due).map(|_| GameEvent::TickElapsed));

        let previous = state.status;
        let (next, control) = update(state, &events, rng);
        state = next;

        if control == Control::Quit {
            log!("quit with score {}", state.score);
            break;
        }

        if state.status != previous {
            log_transition(previous, &state);
        }

        session.draw(&describe(&state), bounds, settings.mode)?;
        thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}

fn log_transition(previous: GameStatus, state: &GameState) {
    match (previous, state.status) {
        (_, GameStatus::Paused) => log!("paused at score {}", state.score),
        (GameStatus::Paused, GameStatus::Running) => log!("resumed"),
        (GameStatus::GameOver, GameStatus::Running) => log!("restarted"),
        (_, GameStatus::GameOver) => log!(
            "game over: score {} length {}",
            state.score,
            state.snake.len()
        ),
        _ => {}
    }
}
