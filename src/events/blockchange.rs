//! Block change event and a logging observer.
//!
//! Every effective write to the [`TileWorld`](crate::resources::tileworld::TileWorld)
//! made by break, place, or a queued block command triggers a
//! [`BlockChangedEvent`]. Writes that leave the cell as it was trigger
//! nothing.
//!
//! # Usage
//!
//! ```ignore
//! fn on_block_changed(trigger: On<BlockChangedEvent>) {
//!     let ev = trigger.event();
//!     println!("{:?}: {:?} -> {:?}", ev.at, ev.previous, ev.current);
//! }
//!
//! world.add_observer(on_block_changed);
//! ```
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::tileworld::{BlockCoord, BlockKind};

/// Event fired after a cell of the tile world changed kind.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChangedEvent {
    pub at: BlockCoord,
    pub previous: BlockKind,
    pub current: BlockKind,
}

/// Global observer that logs each block change at debug level.
pub fn log_block_change(trigger: On<BlockChangedEvent>) {
    let ev = trigger.event();
    debug!(
        "Block ({}, {}) changed {:?} -> {:?}",
        ev.at.x, ev.at.y, ev.previous, ev.current
    );
}
