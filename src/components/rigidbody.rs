//! Kinematic platformer body.
//!
//! The [`RigidBody`] component stores per-tick velocity and the grounded
//! flag. Each velocity rule of the platformer step is a small method here so
//! the physics system reads as a sequence of named stages:
//!
//! 1. [`RigidBody::try_jump`] – only from the ground, clears `grounded`
//! 2. [`RigidBody::apply_horizontal_intent`] – accelerate or damp `vx`
//! 3. [`RigidBody::apply_gravity`] – airborne only, clamped to terminal speed
//! 4. (position integration and collision live in [`crate::systems::collision`])
//! 5. [`RigidBody::settle`] – snap tiny `vx` to zero
//!
//! `grounded` is only ever set back to true by a downward collision, which is
//! what prevents double jumps.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::inputcontrolled::MovementIntent;
use crate::components::platformer::PlatformerParams;

/// Velocity and ground contact for a platformer entity.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.grounded = true;
/// assert!(rb.try_jump(&params));
/// assert!(!rb.try_jump(&params)); // no double jump
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in pixels per tick.
    pub velocity: Vec2,
    /// Set by a downward collision, cleared by jumping and by every vertical pass.
    pub grounded: bool,
}

impl RigidBody {
    /// A body at rest, in the air.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Start a jump if standing on something.
    ///
    /// Returns whether the jump happened.
    pub fn try_jump(&mut self, params: &PlatformerParams) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.y = params.jump_strength;
        self.grounded = false;
        true
    }

    /// Accelerate toward the held direction, or damp when nothing is held.
    ///
    /// Left wins when both directions are held.
    pub fn apply_horizontal_intent(&mut self, intent: &MovementIntent, params: &PlatformerParams) {
        if intent.moving_left {
            self.velocity.x = (self.velocity.x - params.acceleration).max(-params.max_speed);
        } else if intent.moving_right {
            self.velocity.x = (self.velocity.x + params.acceleration).min(params.max_speed);
        } else if self.grounded {
            self.velocity.x *= params.friction;
        } else {
            self.velocity.x *= params.air_resistance;
        }
    }

    /// Integrate gravity while airborne.
    pub fn apply_gravity(&mut self, params: &PlatformerParams) {
        if !self.grounded {
            self.velocity.y = (self.velocity.y + params.gravity).min(params.terminal_velocity);
        }
    }

    /// Snap residual horizontal drift to exactly zero.
    pub fn settle(&mut self, params: &PlatformerParams) {
        if self.velocity.x.abs() < params.velocity_deadzone {
            self.velocity.x = 0.0;
        }
    }
}
