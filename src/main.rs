//! BLOCKFALL - a terminal falling-block puzzle game

mod bag;
mod board;
mod game;
mod input;
mod piece;
mod position;
mod score;
mod settings;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::Game;
use input::{Command, InputMap};
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // Log to a per-session file under the temp directory
    let log_dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender =
        tracing_appender::rolling::never(&log_dir, format!("{:08x}.log", session_id));
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!("blockfall starting up, session={:08x}", session_id);

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Ok(game) = &result {
        println!("Final score: {}", game.score.points);
    }

    result.map(|_| ())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<Game> {
    let input = InputMap::from_settings(settings);
    let gravity = Duration::from_millis(settings.gameplay.gravity_ms);
    let mut game = Game::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, &game, settings))?;

        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let command = input.command(key);
                    if matches!(command, Some(Command::Quit)) {
                        tracing::info!(points = game.score.points, "quit");
                        return Ok(game);
                    }

                    // After game over any key starts a fresh round, and the
                    // same press is then applied to it
                    if game.game_over {
                        game.reset();
                        last_tick = Instant::now();
                        tracing::info!("game restarted");
                    }

                    if let Some(Command::Game(action)) = command {
                        game.process_action(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            game.tick();
            last_tick = Instant::now();
        }
    }
}
