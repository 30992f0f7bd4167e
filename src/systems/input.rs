//! Input systems.
//!
//! [`apply_tick_intents`] copies the per-tick
//! [`TickIntents`](crate::resources::input::TickIntents) bundle onto the
//! player: the held directions become its
//! [`MovementIntent`](crate::components::inputcontrolled::MovementIntent) and
//! a jump request is resolved immediately so it lands before gravity.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::inputcontrolled::{MovementIntent, Player};
use crate::components::platformer::PlatformerParams;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::TickIntents;

/// Latch movement flags and resolve the jump request for the player.
pub fn apply_tick_intents(
    intents: Res<TickIntents>,
    mut query: Query<(Entity, &mut MovementIntent, &mut RigidBody, &PlatformerParams), With<Player>>,
) {
    for (entity, mut movement, mut body, params) in query.iter_mut() {
        movement.moving_left = intents.move_left;
        movement.moving_right = intents.move_right;

        if intents.jump && body.try_jump(params) {
            debug!("{:?} jumped, vy={}", entity, body.velocity.y);
        }
    }
}
