//! portalsim - headless runner
//!
//! Loads the configuration, starts the world simulation on the first map and
//! runs a fixed number of ticks without a window. Movement and portal shots
//! are scripted from the `[headless]` config section.

use std::process::ExitCode;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use portalsim::config::AppConfig;
use portalsim::input::{InputAction, InputMapper};
use portalsim::systems::{HeadlessRenderer, LogAudio, WorldSimulator};
use portalsim_core::SceneError;
use portalsim_input::KeyboardState;

fn main() -> ExitCode {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting {}", config.window.title);
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), SceneError> {
    let renderer = HeadlessRenderer::new(config.window.width, config.window.height);
    let mut sim = WorldSimulator::create(config, Box::new(renderer), Box::new(LogAudio::new()))?;

    let mut input = KeyboardState::new();
    if config.headless.walk_forward {
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    }

    if config.headless.shoot_on_start {
        for button in [MouseButton::Left, MouseButton::Right] {
            if let Some(InputAction::ShootPortal(id)) =
                InputMapper::map_mouse_button(button, ElementState::Pressed, true)
            {
                let outcome = sim.shoot_portal(id)?;
                log::info!("Portal shot: {:?}", outcome);
            }
        }
    }

    for _ in 0..config.headless.frames {
        sim.update(&input)?;
        sim.render()?;
        input.end_frame();
    }

    let scene = sim.scene()?;
    log::info!(
        "Ran {} ticks; level {} '{}', player at ({:.2}, {:.2}, {:.2}), health {}",
        config.headless.frames,
        sim.levels().current_level(),
        scene.name,
        scene.player.position.x,
        scene.player.position.y,
        scene.player.position.z,
        scene.player.health()
    );
    Ok(())
}
