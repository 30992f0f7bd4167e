//! Block break and place.
//!
//! [`break_block`] and [`place_block`] are the cell rules shared by both
//! edit paths:
//!
//! - [`block_interaction`] applies the player's clicks to the targeted cell,
//!   subject to reach. Break wins when both buttons are down.
//! - [`apply_block_commands`] drains the cross-thread
//!   [`BlockCommandQueue`](crate::resources::blockqueue::BlockCommandQueue),
//!   without a reach check.
//!
//! Each effective change triggers a
//! [`BlockChangedEvent`](crate::events::blockchange::BlockChangedEvent).
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::Player;
use crate::components::mapposition::MapPosition;
use crate::components::reach::Reach;
use crate::events::blockchange::BlockChangedEvent;
use crate::resources::blockqueue::{BlockCommand, BlockCommandQueue};
use crate::resources::camera2d::Camera2D;
use crate::resources::input::TickIntents;
use crate::resources::tileworld::{BlockCoord, BlockKind, TileWorld};
use crate::systems::targeting::resolve_target;

fn write_block(tiles: &mut TileWorld, at: BlockCoord, kind: BlockKind) -> Option<BlockChangedEvent> {
    let previous = tiles.replace_block(at.x, at.y, kind)?;
    (previous != kind).then_some(BlockChangedEvent {
        at,
        previous,
        current: kind,
    })
}

/// Set the cell to Air.
///
/// Returns the change, or `None` if the cell was already Air or off the grid.
pub fn break_block(tiles: &mut TileWorld, at: BlockCoord) -> Option<BlockChangedEvent> {
    write_block(tiles, at, BlockKind::Air)
}

/// Set the cell to Dirt if it is Air and touches a solid cell orthogonally.
///
/// Returns the change, or `None` if nothing was placed.
pub fn place_block(tiles: &mut TileWorld, at: BlockCoord) -> Option<BlockChangedEvent> {
    if tiles.get_block(at.x, at.y) != BlockKind::Air {
        return None;
    }
    if !at.neighbors().iter().any(|n| tiles.is_solid(n.x, n.y)) {
        return None;
    }
    write_block(tiles, at, BlockKind::Dirt)
}

/// Apply this tick's primary/secondary click to the player's target.
pub fn block_interaction(
    mut commands: Commands,
    intents: Res<TickIntents>,
    camera: Res<Camera2D>,
    mut tiles: ResMut<TileWorld>,
    query: Query<(&MapPosition, &BoxCollider, &Reach), With<Player>>,
) {
    if !intents.primary_click && !intents.secondary_click {
        return;
    }
    for (position, collider, reach) in query.iter() {
        let Some(target) = resolve_target(
            intents.cursor_screen_pos,
            &camera,
            collider.center(position.pos),
            reach.range,
            &tiles,
        ) else {
            continue;
        };

        let change = if intents.primary_click {
            break_block(&mut tiles, target)
        } else {
            place_block(&mut tiles, target)
        };
        if let Some(ev) = change {
            commands.trigger(ev);
        }
    }
}

/// Apply every queued block command, oldest first.
pub fn apply_block_commands(
    mut commands: Commands,
    queue: Res<BlockCommandQueue>,
    mut tiles: ResMut<TileWorld>,
) {
    for cmd in queue.drain() {
        let change = match cmd {
            BlockCommand::Break(at) => break_block(&mut tiles, at),
            BlockCommand::Place(at) => place_block(&mut tiles, at),
        };
        if let Some(ev) = change {
            commands.trigger(ev);
        }
    }
}
