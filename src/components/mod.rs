//! ECS components for entities.
//!
//! Components carry per-entity data only; the behavior that reads and writes
//! them lives in [`crate::systems`].
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box anchored at the entity position, plus grid span
//! - [`inputcontrolled`] – `Player` marker and held-direction movement intent
//! - [`mapposition`] – world-space position (top-left corner) for an entity
//! - [`platformer`] – tunable platformer physics constants
//! - [`reach`] – block interaction range
//! - [`rigidbody`] – velocity and grounded flag with the per-tick velocity rules

pub mod boxcollider;
pub mod inputcontrolled;
pub mod mapposition;
pub mod platformer;
pub mod reach;
pub mod rigidbody;
