//! Arrows Runaway entry point
//!
//! Headless demo: loads a level and auto-plays it, tapping whichever arrow
//! has a clear path and logging every event. Drawing is left to a real
//! front end.
//!
//! Usage: `arrows-runaway [LEVEL_NUMBER | LEVEL.json] [--settings FILE] [--taps]`

use std::process::ExitCode;

use arrows_runaway::consts::*;
use arrows_runaway::sim::{GameState, MoveOutcome, Resolution, request_move, resolve, tick};
use arrows_runaway::{Level, Settings};

/// Give up after this many simulated seconds
const MAX_RUN_SECS: f32 = 120.0;

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    accumulator: f32,
    /// Also tap blocked arrows, to show bounces
    tap_blocked: bool,
}

impl Game {
    fn new(settings: Settings, tap_blocked: bool) -> Self {
        Self {
            state: GameState::new(settings.footprint),
            settings,
            accumulator: 0.0,
            tap_blocked,
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.settings, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Tap the first idle arrow whose path is clear, plus any blocked ones
    /// when `tap_blocked` is set. Returns whether any tap started a move.
    fn play_turn(&mut self) -> bool {
        let mut clear = None;
        let mut blocked = Vec::new();
        for arrow in self.state.board.arrows() {
            match resolve(arrow, &self.state.board) {
                Resolution::Clear { .. } if clear.is_none() => clear = Some(arrow.id),
                Resolution::Blocked { .. } => blocked.push(arrow.id),
                _ => {}
            }
        }

        let mut started = false;
        if self.tap_blocked {
            for id in blocked {
                started |= matches!(
                    request_move(&mut self.state, id, &self.settings),
                    MoveOutcome::Bouncing { .. }
                );
            }
        }
        if let Some(id) = clear {
            started |= matches!(
                request_move(&mut self.state, id, &self.settings),
                MoveOutcome::Exiting { .. }
            );
        }
        started
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match serde_json::to_string(&event) {
                Ok(json) => log::info!("{}", json),
                Err(e) => log::warn!("Cannot encode event: {}", e),
            }
        }
    }
}

struct Args {
    level: Option<String>,
    settings: Option<String>,
    taps: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        level: None,
        settings: None,
        taps: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => args.settings = iter.next(),
            "--taps" => args.taps = true,
            _ => args.level = Some(arg),
        }
    }
    args
}

fn load(game: &mut Game, level: Option<&str>) -> Result<(), String> {
    match level {
        None => game.state.load_builtin(1).map(|_| ()).map_err(|e| e.to_string()),
        Some(arg) => {
            if let Ok(number) = arg.parse::<u32>() {
                match game.state.load_builtin(number) {
                    Ok(true) => Ok(()),
                    Ok(false) => Err(format!("no built-in level {}", number)),
                    Err(e) => Err(e.to_string()),
                }
            } else {
                let json = std::fs::read_to_string(arg).map_err(|e| format!("{}: {}", arg, e))?;
                let level = Level::from_json(&json).map_err(|e| e.to_string())?;
                game.state.load_level(level).map_err(|e| e.to_string())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Arrows Runaway (headless) starting...");

    let args = parse_args();
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let mut game = Game::new(settings, args.taps);

    if let Err(e) = load(&mut game, args.level.as_deref()) {
        log::error!("Cannot load level: {}", e);
        return ExitCode::FAILURE;
    }
    game.flush_events();

    let mut elapsed = 0.0;
    while !game.state.is_solved() && elapsed < MAX_RUN_SECS {
        if !game.state.is_animating() && !game.play_turn() {
            log::warn!("Stuck: {} arrows left, none can move", game.state.board.len());
            break;
        }
        game.update(SIM_DT);
        game.flush_events();
        elapsed += SIM_DT;
    }

    if game.state.is_solved() {
        log::info!("Solved in {:.2}s of simulated time", elapsed);
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A web front end drives the library directly
}
