//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PSIM_SECTION__KEY`, or `PSIM_MAP` / `PSIM_SEED`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use portalsim_core::Soundtrack;
use portalsim_physics::PhysicsConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Physics tuning, in units per tick
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Music and sound effect pools
    #[serde(default)]
    pub audio: AudioConfig,
    /// Data locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Headless runner settings
    #[serde(default)]
    pub headless: HeadlessConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
    /// Custom map to load instead of the level list
    #[serde(default)]
    pub map: Option<String>,
    /// Fixed RNG seed; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PSIM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PSIM_PHYSICS__GRAVITY=0.01 -> physics.gravity = 0.01
        figment = figment.merge(Env::prefixed("PSIM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Music and fall sounds resolved against the data directory
    pub fn soundtrack(&self) -> Soundtrack {
        Soundtrack {
            data_dir: self.paths.data_dir.clone(),
            music: self.audio.music.clone(),
            fall_sounds: self.audio.fall_sounds.clone(),
        }
    }

    /// Full path of the map list file
    pub fn map_list_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.map_list)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Application name, logged at startup
    pub title: String,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "portalsim".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Radians of rotation per unit of mouse motion
    pub mouse_sensitivity: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.002,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Music tracks, one is picked at random per scene load
    pub music: Vec<String>,
    /// Fall impact sounds, one is picked at random per hard landing
    pub fall_sounds: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music: vec![
                "audio/music/track1.ogg".to_string(),
                "audio/music/track2.ogg".to_string(),
                "audio/music/track3.ogg".to_string(),
            ],
            fall_sounds: vec![
                "audio/sfx/character/fall1.ogg".to_string(),
                "audio/sfx/character/fall2.ogg".to_string(),
            ],
        }
    }
}

/// Data locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of maps, textures and audio
    pub data_dir: PathBuf,
    /// Map list file, relative to `data_dir`
    pub map_list: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            map_list: "maps/maplist".to_string(),
        }
    }
}

/// Headless runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessConfig {
    /// Number of ticks to simulate
    pub frames: u32,
    /// Hold the forward key the whole run
    pub walk_forward: bool,
    /// Shoot both portals on the first tick
    pub shoot_on_start: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            walk_forward: false,
            shoot_on_start: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
