//! Terminal blockfall runner (default binary).
//!
//! Owns the timing loop: the core state machine is pure, so gravity lives
//! here as "apply `step_down` whenever the level's drop interval elapses".

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use blockfall::core::{scoring, GameState};
use blockfall::input::{action_for_key, should_quit};
use blockfall::settings::Settings;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::Status;

fn main() -> Result<()> {
    let settings = Settings::load_or_default();
    // Seed the config file on first run so bindings are discoverable.
    if !Settings::config_path().is_some_and(|path| path.exists()) {
        let _ = settings.save();
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn new_game(settings: &Settings) -> GameState {
    GameState::new(
        settings.board_width,
        settings.board_height,
        rand::random::<u32>(),
    )
}

fn drop_interval(settings: &Settings, state: &GameState) -> Duration {
    Duration::from_millis(scoring::drop_speed_with_base_ms(
        settings.base_drop_ms,
        state.level(),
    ) as u64)
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut state = new_game(settings);
    let view = GameView::new(settings);

    let mut last_drop = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Block on input until the next gravity step is due.
        let timeout = drop_interval(settings, &state)
            .checked_sub(last_drop.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if state.status() == Status::GameOver
                        && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
                    {
                        state = new_game(settings);
                        last_drop = Instant::now();
                        continue;
                    }

                    if let Some(action) = action_for_key(key, &settings.controls) {
                        state = state.apply(action);
                    }
                }
            }
        }

        if last_drop.elapsed() >= drop_interval(settings, &state) {
            last_drop = Instant::now();
            if state.status() == Status::Playing {
                state = state.step_down();
            }
        }
    }
}
