//! Simulation systems.
//!
//! This module groups all ECS systems that advance the simulation by one
//! tick. [`crate::game::Simulation`] chains them in a fixed order.
//!
//! Submodules overview
//! - [`camera`] – center the view on the player
//! - [`collision`] – axis-separated collision of boxes against the tile grid
//! - [`input`] – copy per-tick intents onto the player and resolve jumps
//! - [`interaction`] – block break/place from clicks and from the command queue
//! - [`physics`] – per-tick platformer velocity and position update
//! - [`targeting`] – map the cursor to a reachable block
//! - [`time`] – advance the fixed-step clock

pub mod camera;
pub mod collision;
pub mod input;
pub mod interaction;
pub mod physics;
pub mod targeting;
pub mod time;
