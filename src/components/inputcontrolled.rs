//! Input-controlled movement components.
//!
//! - [`Player`] – marker for the entity driven by [`TickIntents`](crate::resources::input::TickIntents)
//! - [`MovementIntent`] – horizontal movement flags latched from the last intents
//!
//! [`crate::systems::input`] writes these each tick and
//! [`crate::systems::physics`] consumes them.

use bevy_ecs::prelude::Component;

/// Tag for the single player-controlled entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// Horizontal movement intent for a platformer body.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub moving_left: bool,
    pub moving_right: bool,
}

impl MovementIntent {
    pub fn new(moving_left: bool, moving_right: bool) -> Self {
        Self {
            moving_left,
            moving_right,
        }
    }
}
