//! Game configuration resource.
//!
//! Manages simulation settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 100
//! height = 100
//! cell_size = 32
//! seed = 42
//!
//! [terrain]
//! dirt_depth = 5
//! stone_probability = 0.5
//! surface_amplitude = 5
//! surface_frequency = 0.1
//!
//! [player]
//! width = 20
//! height = 40
//! interaction_range = 5
//!
//! [physics]
//! gravity = 0.4
//! acceleration = 0.6
//! max_speed = 4
//! jump_strength = -8
//! friction = 0.8
//! air_resistance = 0.95
//! terminal_velocity = 8
//! velocity_deadzone = 0.1
//!
//! [camera]
//! viewport_width = 800
//! viewport_height = 600
//! pan_speed = 5
//!
//! [game]
//! target_fps = 60
//! ```
//!
//! Every key is optional. `interaction_range` is measured in cells.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::platformer::PlatformerParams;
use crate::error::{SandboxError, SandboxResult};
use crate::resources::camera2d::{DEFAULT_PAN_SPEED, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::resources::terrain::TerrainParams;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: i32 = 100;
const DEFAULT_WORLD_HEIGHT: i32 = 100;
const DEFAULT_CELL_SIZE: f32 = 32.0;
const DEFAULT_PLAYER_WIDTH: f32 = 20.0;
const DEFAULT_PLAYER_HEIGHT: f32 = 40.0;
const DEFAULT_INTERACTION_RANGE_CELLS: f32 = 5.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores world shape, terrain and physics tuning, the viewport, and the tick
/// rate. [`Simulation::new`](crate::game::Simulation::new) reads it once and
/// keeps it in the ECS world for reference.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Grid width in cells.
    pub world_width: i32,
    /// Grid height in cells.
    pub world_height: i32,
    /// Cell edge length in pixels.
    pub cell_size: f32,
    /// Terrain seed. `None` means entropy-seeded.
    pub seed: Option<u64>,
    pub terrain: TerrainParams,
    pub player_width: f32,
    pub player_height: f32,
    /// Block interaction reach, in cells.
    pub interaction_range: f32,
    pub physics: PlatformerParams,
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub pan_speed: f32,
    /// Fixed simulation rate in ticks per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
            terrain: TerrainParams::default(),
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            interaction_range: DEFAULT_INTERACTION_RANGE_CELLS,
            physics: PlatformerParams::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            pan_speed: DEFAULT_PAN_SPEED,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, or if a present
    /// value is malformed. On error `self` is left untouched.
    pub fn load_from_file(&mut self) -> SandboxResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|message| SandboxError::ConfigLoad {
                path: self.config_path.clone(),
                message,
            })?;
        self.commit(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} world, cell={}, seed={:?}, fps={}",
            self.config_path,
            self.world_width,
            self.world_height,
            self.cell_size,
            self.seed,
            self.target_fps
        );

        Ok(())
    }

    /// Load configuration from in-memory INI text.
    pub fn load_from_str(&mut self, text: &str) -> SandboxResult<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|message| SandboxError::ConfigLoad {
                path: PathBuf::from("<string>"),
                message,
            })?;
        self.commit(&config)
    }

    /// Like [`load_from_file`](Self::load_from_file), but a file that does not
    /// exist is not an error. Returns whether a file was read.
    pub fn load_if_present(&mut self) -> SandboxResult<bool> {
        if !self.config_path.exists() {
            return Ok(false);
        }
        self.load_from_file()?;
        Ok(true)
    }

    /// Apply parsed values to a copy and keep it only if it validates.
    fn commit(&mut self, config: &Ini) -> SandboxResult<()> {
        let mut next = self.clone();
        next.apply(config)?;
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn apply(&mut self, config: &Ini) -> SandboxResult<()> {
        // [world] section
        if let Some(width) = read_i32(config, "world", "width")? {
            self.world_width = width;
        }
        if let Some(height) = read_i32(config, "world", "height")? {
            self.world_height = height;
        }
        if let Some(cell) = read_f32(config, "world", "cell_size")? {
            self.cell_size = cell;
        }
        if let Some(seed) = config
            .getuint("world", "seed")
            .map_err(|e| value_error("world", "seed", e))?
        {
            self.seed = Some(seed);
        }

        // [terrain] section
        if let Some(depth) = read_i32(config, "terrain", "dirt_depth")? {
            self.terrain.dirt_depth = depth;
        }
        if let Some(p) = read_f64(config, "terrain", "stone_probability")? {
            self.terrain.stone_probability = p;
        }
        if let Some(a) = read_f64(config, "terrain", "surface_amplitude")? {
            self.terrain.surface_amplitude = a;
        }
        if let Some(f) = read_f64(config, "terrain", "surface_frequency")? {
            self.terrain.surface_frequency = f;
        }

        // [player] section
        if let Some(w) = read_f32(config, "player", "width")? {
            self.player_width = w;
        }
        if let Some(h) = read_f32(config, "player", "height")? {
            self.player_height = h;
        }
        if let Some(r) = read_f32(config, "player", "interaction_range")? {
            self.interaction_range = r;
        }

        // [physics] section
        let physics = &mut self.physics;
        for (key, slot) in [
            ("gravity", &mut physics.gravity),
            ("acceleration", &mut physics.acceleration),
            ("max_speed", &mut physics.max_speed),
            ("jump_strength", &mut physics.jump_strength),
            ("friction", &mut physics.friction),
            ("air_resistance", &mut physics.air_resistance),
            ("terminal_velocity", &mut physics.terminal_velocity),
            ("velocity_deadzone", &mut physics.velocity_deadzone),
        ] {
            if let Some(v) = read_f32(config, "physics", key)? {
                *slot = v;
            }
        }

        // [camera] section
        if let Some(w) = read_i32(config, "camera", "viewport_width")? {
            self.viewport_width = w;
        }
        if let Some(h) = read_i32(config, "camera", "viewport_height")? {
            self.viewport_height = h;
        }
        if let Some(s) = read_f32(config, "camera", "pan_speed")? {
            self.pan_speed = s;
        }

        // [game] section
        if let Some(fps) = config
            .getuint("game", "target_fps")
            .map_err(|e| value_error("game", "target_fps", e))?
        {
            self.target_fps = u32::try_from(fps)
                .map_err(|_| value_error("game", "target_fps", "out of range"))?;
        }

        Ok(())
    }

    /// Check ranges that the rest of the crate relies on.
    pub fn validate(&self) -> SandboxResult<()> {
        if self.world_width <= 0 {
            return Err(value_error("world", "width", "must be positive"));
        }
        if self.world_height <= 0 {
            return Err(value_error("world", "height", "must be positive"));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(value_error("world", "cell_size", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.terrain.stone_probability) {
            return Err(value_error(
                "terrain",
                "stone_probability",
                "must be within 0..=1",
            ));
        }
        if self.terrain.dirt_depth < 0 {
            return Err(value_error("terrain", "dirt_depth", "must not be negative"));
        }
        if !(self.player_width.is_finite()
            && self.player_height.is_finite()
            && self.player_width > 0.0
            && self.player_height > 0.0)
        {
            return Err(value_error("player", "width/height", "must be positive"));
        }
        if !(self.interaction_range.is_finite() && self.interaction_range >= 0.0) {
            return Err(value_error(
                "player",
                "interaction_range",
                "must not be negative",
            ));
        }
        let p = &self.physics;
        for (key, value) in [
            ("gravity", p.gravity),
            ("acceleration", p.acceleration),
            ("max_speed", p.max_speed),
            ("jump_strength", p.jump_strength),
            ("friction", p.friction),
            ("air_resistance", p.air_resistance),
            ("terminal_velocity", p.terminal_velocity),
            ("velocity_deadzone", p.velocity_deadzone),
        ] {
            if !value.is_finite() {
                return Err(value_error("physics", key, "must be finite"));
            }
        }
        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(value_error(
                "camera",
                "viewport_width/viewport_height",
                "must be positive",
            ));
        }
        if self.target_fps == 0 {
            return Err(value_error("game", "target_fps", "must be positive"));
        }
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [world] section
        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));
        config.set("world", "cell_size", Some(self.cell_size.to_string()));
        if let Some(seed) = self.seed {
            config.set("world", "seed", Some(seed.to_string()));
        }

        // [terrain] section
        let t = &self.terrain;
        config.set("terrain", "dirt_depth", Some(t.dirt_depth.to_string()));
        config.set(
            "terrain",
            "stone_probability",
            Some(t.stone_probability.to_string()),
        );
        config.set(
            "terrain",
            "surface_amplitude",
            Some(t.surface_amplitude.to_string()),
        );
        config.set(
            "terrain",
            "surface_frequency",
            Some(t.surface_frequency.to_string()),
        );

        // [player] section
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));
        config.set(
            "player",
            "interaction_range",
            Some(self.interaction_range.to_string()),
        );

        // [physics] section
        let p = &self.physics;
        for (key, value) in [
            ("gravity", p.gravity),
            ("acceleration", p.acceleration),
            ("max_speed", p.max_speed),
            ("jump_strength", p.jump_strength),
            ("friction", p.friction),
            ("air_resistance", p.air_resistance),
            ("terminal_velocity", p.terminal_velocity),
            ("velocity_deadzone", p.velocity_deadzone),
        ] {
            config.set("physics", key, Some(value.to_string()));
        }

        // [camera] section
        config.set(
            "camera",
            "viewport_width",
            Some(self.viewport_width.to_string()),
        );
        config.set(
            "camera",
            "viewport_height",
            Some(self.viewport_height.to_string()),
        );
        config.set("camera", "pan_speed", Some(self.pan_speed.to_string()));

        // [game] section
        config.set("game", "target_fps", Some(self.target_fps.to_string()));

        config
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> SandboxResult<()> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|source| SandboxError::ConfigSave {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn value_error(section: &str, key: &str, message: impl Into<String>) -> SandboxError {
    SandboxError::ConfigValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.into(),
    }
}

fn read_i32(config: &Ini, section: &str, key: &str) -> SandboxResult<Option<i32>> {
    match config
        .getint(section, key)
        .map_err(|e| value_error(section, key, e))?
    {
        Some(v) => i32::try_from(v)
            .map(Some)
            .map_err(|_| value_error(section, key, "out of range")),
        None => Ok(None),
    }
}

fn read_f64(config: &Ini, section: &str, key: &str) -> SandboxResult<Option<f64>> {
    config
        .getfloat(section, key)
        .map_err(|e| value_error(section, key, e))
}

fn read_f32(config: &Ini, section: &str, key: &str) -> SandboxResult<Option<f32>> {
    Ok(read_f64(config, section, key)?.map(|v| v as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults_match_reference_constants() {
        let cfg = GameConfig::new();
        assert_eq!((cfg.world_width, cfg.world_height), (100, 100));
        assert_eq!(cfg.cell_size, 32.0);
        assert_eq!(cfg.seed, None);
        assert_eq!((cfg.player_width, cfg.player_height), (20.0, 40.0));
        assert_eq!(cfg.interaction_range, 5.0);
        assert_eq!((cfg.viewport_width, cfg.viewport_height), (800, 600));
        assert_eq!(cfg.pan_speed, 5.0);
        assert_eq!(cfg.target_fps, 60);
        assert_eq!(cfg.physics, PlatformerParams::default());
        assert_eq!(cfg.terrain, TerrainParams::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[world]\nwidth = 40\nseed = 7\n\n[physics]\ngravity = 0.5\n")
            .unwrap();
        assert_eq!(cfg.world_width, 40);
        assert_eq!(cfg.world_height, 100);
        assert_eq!(cfg.seed, Some(7));
        assert!(approx_eq(cfg.physics.gravity, 0.5));
        assert!(approx_eq(cfg.physics.friction, 0.8));
    }

    #[test]
    fn test_all_sections_parse() {
        let text = "\
[world]
width = 64
height = 48
cell_size = 16
[terrain]
dirt_depth = 3
stone_probability = 0.25
surface_amplitude = 2
surface_frequency = 0.2
[player]
width = 10
height = 20
interaction_range = 4
[physics]
jump_strength = -6
terminal_velocity = 10
[camera]
viewport_width = 320
viewport_height = 240
pan_speed = 2
[game]
target_fps = 30
";
        let mut cfg = GameConfig::new();
        cfg.load_from_str(text).unwrap();
        assert_eq!((cfg.world_width, cfg.world_height), (64, 48));
        assert_eq!(cfg.cell_size, 16.0);
        assert_eq!(cfg.terrain.dirt_depth, 3);
        assert_eq!(cfg.terrain.stone_probability, 0.25);
        assert_eq!(cfg.interaction_range, 4.0);
        assert!(approx_eq(cfg.physics.jump_strength, -6.0));
        assert!(approx_eq(cfg.physics.terminal_velocity, 10.0));
        assert_eq!((cfg.viewport_width, cfg.viewport_height), (320, 240));
        assert_eq!(cfg.target_fps, 30);
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let mut cfg = GameConfig::new();
        let err = cfg.load_from_str("[world]\nwidth = wide\n").unwrap_err();
        match err {
            SandboxError::ConfigValue { section, key, .. } => {
                assert_eq!(section, "world");
                assert_eq!(key, "width");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let mut cfg = GameConfig::new();
        assert!(matches!(
            cfg.load_from_str("[world]\nheight = 0\n"),
            Err(SandboxError::ConfigValue { .. })
        ));

        let mut cfg = GameConfig::new();
        assert!(matches!(
            cfg.load_from_str("[terrain]\nstone_probability = 1.5\n"),
            Err(SandboxError::ConfigValue { .. })
        ));
    }

    #[test]
    fn test_ini_text_reloads_to_same_config() {
        let mut original = GameConfig::new();
        original.world_width = 77;
        original.seed = Some(1234);
        original.physics.max_speed = 6.0;

        let mut reloaded = GameConfig::new();
        reloaded.load_from_str(&original.to_ini_string()).unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_failed_load_leaves_config_untouched() {
        let mut cfg = GameConfig::new();
        cfg.world_width = 50;
        let before = cfg.clone();

        // Valid keys come before the bad one and must not stick.
        let result = cfg.load_from_str("[world]\nwidth = 30\ncell_size = 8\n[game]\ntarget_fps = 0\n");
        assert!(matches!(result, Err(SandboxError::ConfigValue { .. })));
        assert_eq!(cfg, before);

        let result = cfg.load_from_str("[world]\nheight = 12\n[physics]\ngravity = heavy\n");
        assert!(matches!(result, Err(SandboxError::ConfigValue { .. })));
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_non_finite_physics_rejected() {
        let mut cfg = GameConfig::new();
        cfg.physics.friction = f32::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(SandboxError::ConfigValue { ref key, .. }) if key == "friction"
        ));

        let mut cfg = GameConfig::new();
        cfg.player_height = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_if_present_skips_missing_file() {
        let mut cfg = GameConfig::with_path("/nonexistent/dir/burrow.ini");
        assert!(!cfg.load_if_present().unwrap());
        assert_eq!(cfg, GameConfig::with_path("/nonexistent/dir/burrow.ini"));
    }

    #[test]
    fn test_load_if_present_reports_broken_file() {
        let path = std::env::temp_dir().join(format!("burrow-broken-{}.ini", std::process::id()));
        std::fs::write(&path, "[physics\ngravity = 99\n").unwrap();

        let mut cfg = GameConfig::with_path(&path);
        let result = cfg.load_if_present();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(SandboxError::ConfigLoad { .. })));
        assert!(approx_eq(cfg.physics.gravity, 0.4));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let mut cfg = GameConfig::with_path("/nonexistent/dir/burrow.ini");
        assert!(matches!(
            cfg.load_from_file(),
            Err(SandboxError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("burrow-config-{}.ini", std::process::id()));
        let mut cfg = GameConfig::with_path(&path);
        cfg.world_height = 64;
        cfg.target_fps = 30;
        cfg.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.world_height, 64);
        assert_eq!(loaded.target_fps, 30);
    }
}
