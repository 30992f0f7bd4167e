//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the tile grid, the view, per-tick
//! input, timing, and configuration. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `blockqueue` – cross-thread queue of block edits applied between ticks
//! - `camera2d` – view offset used for world/screen transforms
//! - `gameconfig` – INI-backed configuration
//! - `input` – per-tick intent bundle from the input collaborator
//! - `target` – block currently under the cursor and within reach
//! - `terrain` – procedural terrain and the injectable random source
//! - `tileworld` – the block grid
//! - `worldtime` – fixed-step simulation clock
pub mod blockqueue;
pub mod camera2d;
pub mod gameconfig;
pub mod input;
pub mod target;
pub mod terrain;
pub mod tileworld;
pub mod worldtime;
