//! Bouncy Asep entry point
//!
//! Headless demo: loads settings, lets the autopilot play for a while at a
//! simulated 60 Hz, and reports the outcome. A windowed host drives the same
//! pieces (`InputTracker`, `FrameRunner`, `build_frame`, `AudioManager`) from
//! its own event loop.
//!
//! Usage: `bouncy-asep [settings.json] [seconds]`

use std::time::{SystemTime, UNIX_EPOCH};

use bouncy_asep::Settings;
use bouncy_asep::audio::{AudioManager, LogSink};
use bouncy_asep::platform::{FrameRunner, InputTracker, Key};
use bouncy_asep::renderer::{LogPresenter, Presenter, RenderContext, build_frame};
use bouncy_asep::sim::{GamePhase, GameState};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;

fn main() {
    env_logger::init();
    log::info!("Bouncy Asep (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seconds = match args.next().map(|s| s.parse::<f32>()) {
        Some(Ok(s)) if s > 0.0 => s,
        Some(_) => {
            log::warn!("Invalid duration, using {}s", DEFAULT_SECONDS);
            DEFAULT_SECONDS
        }
        None => DEFAULT_SECONDS,
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let ctx = RenderContext::new(settings.world.width, settings.world.height);
    let mut audio = AudioManager::new(LogSink, &settings.audio);
    let mut state = GameState::with_settings(settings, seed);
    let mut runner = FrameRunner::new();
    let mut presenter = LogPresenter::new();
    let mut input = InputTracker::new();

    input.press(Key::A);
    input.release(Key::A);

    let frames = (seconds / FRAME_DT).ceil() as u64;
    let mut runs = 0u32;
    for _ in 0..frames {
        if input.quit_requested() {
            break;
        }

        // Restart as soon as a run ends
        if state.phase == GamePhase::GameOver {
            runs += 1;
            log::info!("Run {} over with score {}", runs, state.score);
            input.press(Key::R);
            input.release(Key::R);
        }

        runner.frame(&mut state, FRAME_DT, input.take_input());
        audio.handle_events(runner.events());
        presenter.present(&build_frame(&state, &ctx));
    }

    log::info!(
        "Finished after {} frames: {} runs ended, score {}, best {}",
        presenter.frames(),
        runs,
        state.score,
        state.best_score
    );
    match serde_json::to_string_pretty(&state.debug_snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
