//! Burrow: the core of a 2D dig-and-build tile sandbox.
//!
//! This crate exposes the simulation's ECS components, resources, systems, and
//! events for use by a presentation layer, in integration tests, and by the
//! headless binary. Rendering, windowing and device polling stay outside; they
//! talk to [`game::Simulation`] through
//! [`TickIntents`](resources::input::TickIntents) and read-only queries.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
