//! Shared 2D camera resource.
//!
//! The camera is a plain view offset: world = screen + offset. Systems agree
//! on this single transform for targeting, and the render collaborator reads
//! it to place cells and the player on screen.

use bevy_ecs::prelude::Resource;
use glam::{IVec2, Vec2};

pub const DEFAULT_VIEWPORT_WIDTH: i32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 600;
pub const DEFAULT_PAN_SPEED: f32 = 5.0;

/// ECS resource that holds the active view.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World-space position of the viewport's top-left corner.
    pub offset: Vec2,
    /// Viewport width in pixels.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
    /// World units moved per unit of [`Camera2D::pan`] input.
    pub pan_speed: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl Camera2D {
    /// Camera at the world origin with the given viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            offset: Vec2::ZERO,
            width,
            height,
            pan_speed: DEFAULT_PAN_SPEED,
        }
    }

    pub fn with_pan_speed(mut self, pan_speed: f32) -> Self {
        self.pan_speed = pan_speed;
        self
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Manual pan, scaled by `pan_speed`.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx * self.pan_speed;
        self.offset.y += dy * self.pan_speed;
    }

    /// Center the viewport on `target`.
    ///
    /// The half-viewport is taken in whole pixels, so odd viewport sizes
    /// bias the target one pixel right/down of the true centre.
    pub fn follow(&mut self, target: Vec2) {
        self.offset.x = target.x - (self.width / 2) as f32;
        self.offset.y = target.y - (self.height / 2) as f32;
    }

    pub fn screen_to_world(&self, screen: IVec2) -> Vec2 {
        screen.as_vec2() + self.offset
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
