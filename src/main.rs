//! Rod Ball entry point
//!
//! On the web this wires the game into the page. Natively it plays a
//! headless match between two tracking rods and reports the wins.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    rod_ball::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rod_ball::render::RecordingRenderer;
    use rod_ball::{FixedGeometry, GameLoop, Settings, Viewport, WinTally};

    env_logger::init();
    log::info!("Rod Ball (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings(&path),
        None => Settings::load(),
    };

    let geometry = FixedGeometry::arena(settings.layout, Viewport::new(800.0, 600.0));
    let mut game = GameLoop::new(&settings, &geometry);
    let mut wins = WinTally::new();
    let mut out = RecordingRenderer::new();

    game.handle_key_press(&settings.keys.start, &geometry, &mut out);

    // One simulated minute, rods chasing the ball
    for _ in 0..6_000 {
        for code in demo::chase_keys(&game, &settings) {
            game.handle_key_press(code, &geometry, &mut out);
        }
        game.elapse(rod_ball::consts::TICK_MS, &geometry, &mut wins, &mut out);
        out.placements.clear();
    }

    let leader = match wins.leader() {
        Some(side) => side.as_str(),
        None => "nobody",
    };
    println!(
        "After {} ticks: Rod 1 {} - {} Rod 2, {} leads",
        game.state().time_ticks,
        wins.rod1,
        wins.rod2,
        leader
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> rod_ball::Settings {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| rod_ball::Settings::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path);
            settings
        }
        Err(e) => {
            log::warn!("Could not use {}: {}, using defaults", path, e);
            rod_ball::Settings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use rod_ball::consts::ROD_STEP;
    use rod_ball::geometry::Rect;
    use rod_ball::{GameLoop, Settings};

    /// Keys that nudge each rod toward the ball. Rods only react while the
    /// ball is in their half, so some balls get through.
    pub fn chase_keys<'a>(game: &GameLoop, settings: &'a Settings) -> Vec<&'a str> {
        let state = game.state();
        let slide = state.layout.slide_axis();
        let goal = state.layout.goal_axis();
        let ball = slide.of(state.ball.pos);
        let depth = goal.of(state.ball.pos);
        let mid = (goal.of(state.rod1.pos) + goal.of(state.rod2.pos)) / 2.0;

        let mut keys = Vec::new();
        let mut chase = |rod: &Rect, left: &'a str, right: &'a str| {
            let center = (rod.start(slide) + rod.end(slide)) / 2.0;
            if ball < center - ROD_STEP {
                keys.push(left);
            } else if ball > center + ROD_STEP {
                keys.push(right);
            }
        };
        if depth < mid {
            chase(&state.rod1, &settings.keys.rod1_left, &settings.keys.rod1_right);
        } else {
            chase(&state.rod2, &settings.keys.rod2_left, &settings.keys.rod2_right);
        }
        keys
    }
}
