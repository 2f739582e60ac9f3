//! Glow Pong entry point
//!
//! In the browser the game drives itself from requestAnimationFrame. The
//! native build runs a headless session against a recording surface:
//!
//! `glow-pong [frames] [seed] [settings.json]`

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    use glow_pong::Settings;

    console_error_panic_hook::set_once();
    let settings = Settings::default();
    let level = settings.level_filter().to_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Glow Pong starting...");
    glow_pong::platform::web::start(&settings).map_err(|e| {
        log::error!("Setup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use glow_pong::renderer::CommandList;
    use glow_pong::{GameLoop, Settings};

    /// Frame spacing for the headless run (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(rand::random);

    // RUST_LOG wins over the settings file when present
    let level_from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !level_from_env {
        log::set_max_level(log::LevelFilter::Info);
    }

    let settings = match args.next() {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    if !level_from_env {
        log::set_max_level(settings.level_filter());
    }

    log::info!("Glow Pong (native) starting...");
    log::debug!("Effective settings: {}", settings.to_json());
    log::info!("Headless run: {} frames, seed {}", frames, seed);

    let mut game = GameLoop::new(seed, &settings);
    let mut surface = CommandList::new();
    let mut score = game.state().score;

    // No one is holding keys: both paddles idle while the ball plays out
    for frame in 0..frames {
        surface.clear_commands();
        game.frame(&mut surface, frame as f64 * FRAME_MS);

        let now = game.state().score;
        if now != score {
            log::info!("Frame {}: score {}-{}", frame, now.left, now.right);
            score = now;
        }
    }

    let visible = surface
        .commands
        .iter()
        .filter(|c| c.fill().is_some_and(|f| f.is_visible()))
        .count();
    log::info!(
        "Last frame drew {} primitives ({} visible), {} glows active",
        surface.commands.len(),
        visible,
        game.state().glows.len()
    );
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Can't serialize final state: {}", e),
    }
}
