use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::tileworld::TileWorld;

/// Axis-aligned box anchored at the entity's [`MapPosition`](super::mapposition::MapPosition)
/// (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

/// Inclusive range of grid cells overlapped by a collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Centre of the box for a given top-left position.
    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.size * 0.5
    }

    /// Cells touched by the box at `position`.
    ///
    /// The right and bottom edges are exclusive by one pixel, so a box that
    /// ends exactly on a cell boundary does not reach into the next cell.
    pub fn cell_span(&self, position: Vec2, tiles: &TileWorld) -> CellSpan {
        CellSpan {
            left: tiles.cell_of(position.x),
            right: tiles.cell_of(position.x + self.size.x - 1.0),
            top: tiles.cell_of(position.y),
            bottom: tiles.cell_of(position.y + self.size.y - 1.0),
        }
    }
}
