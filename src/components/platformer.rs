//! Tunable platformer physics constants.
//!
//! All values are per tick, in pixels. Positive y points down, so
//! `jump_strength` is negative and `gravity` is positive.

use bevy_ecs::prelude::Component;

pub const DEFAULT_GRAVITY: f32 = 0.4;
pub const DEFAULT_ACCELERATION: f32 = 0.6;
pub const DEFAULT_MAX_SPEED: f32 = 4.0;
pub const DEFAULT_JUMP_STRENGTH: f32 = -8.0;
pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_AIR_RESISTANCE: f32 = 0.95;
pub const DEFAULT_TERMINAL_VELOCITY: f32 = 8.0;
pub const DEFAULT_VELOCITY_DEADZONE: f32 = 0.1;

/// Physics constants for one platformer body.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlatformerParams {
    /// Added to `vy` every airborne tick.
    pub gravity: f32,
    /// Added to `|vx|` every tick a direction is held.
    pub acceleration: f32,
    /// Horizontal speed cap while a direction is held.
    pub max_speed: f32,
    /// Vertical velocity applied on jump. Negative is upward.
    pub jump_strength: f32,
    /// `vx` multiplier on idle grounded ticks.
    pub friction: f32,
    /// `vx` multiplier on idle airborne ticks.
    pub air_resistance: f32,
    /// Maximum downward speed.
    pub terminal_velocity: f32,
    /// `|vx|` below this snaps to zero at the end of a tick.
    pub velocity_deadzone: f32,
}

impl Default for PlatformerParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            acceleration: DEFAULT_ACCELERATION,
            max_speed: DEFAULT_MAX_SPEED,
            jump_strength: DEFAULT_JUMP_STRENGTH,
            friction: DEFAULT_FRICTION,
            air_resistance: DEFAULT_AIR_RESISTANCE,
            terminal_velocity: DEFAULT_TERMINAL_VELOCITY,
            velocity_deadzone: DEFAULT_VELOCITY_DEADZONE,
        }
    }
}
