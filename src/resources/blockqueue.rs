//! Cross-thread block command queue.
//!
//! The tile world is owned by the simulation thread. Anything else that wants
//! to change it (a UI thread, a script, a test harness) holds a cloned
//! [`BlockCommandSender`] and sends [`BlockCommand`]s; the simulation drains
//! the queue at the start of each tick in send order.
//!
//! ```ignore
//! let tx = sim.block_commands();
//! std::thread::spawn(move || {
//!     tx.send(BlockCommand::Break(BlockCoord::new(3, 4)));
//! });
//! ```

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::resources::tileworld::BlockCoord;

/// A queued edit to the tile world.
///
/// Queued edits follow the same cell rules as click-driven ones but skip the
/// interaction range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCommand {
    /// Set the cell to Air.
    Break(BlockCoord),
    /// Set the cell to Dirt if it is Air and has a solid orthogonal neighbour.
    Place(BlockCoord),
}

/// Cloneable, `Send` handle for enqueueing block commands.
#[derive(Debug, Clone)]
pub struct BlockCommandSender {
    tx: Sender<BlockCommand>,
}

impl BlockCommandSender {
    /// Enqueue a command.
    ///
    /// Returns `false` if the simulation that owned the queue is gone.
    pub fn send(&self, cmd: BlockCommand) -> bool {
        self.tx.send(cmd).is_ok()
    }

    pub fn break_block(&self, x: i32, y: i32) -> bool {
        self.send(BlockCommand::Break(BlockCoord::new(x, y)))
    }

    pub fn place_block(&self, x: i32, y: i32) -> bool {
        self.send(BlockCommand::Place(BlockCoord::new(x, y)))
    }
}

/// ECS resource holding both ends of the command channel.
#[derive(Resource)]
pub struct BlockCommandQueue {
    tx: Sender<BlockCommand>,
    rx: Receiver<BlockCommand>,
}

impl Default for BlockCommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<BlockCommand>();
        Self { tx, rx }
    }

    /// New handle for producers.
    pub fn sender(&self) -> BlockCommandSender {
        BlockCommandSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every command queued so far, oldest first.
    pub fn drain(&self) -> Vec<BlockCommand> {
        self.rx.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
