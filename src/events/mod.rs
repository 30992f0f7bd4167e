//! Event types and observers used by the simulation.
//!
//! Events let systems announce world changes without knowing who listens.
//!
//! Submodules:
//! - [`blockchange`] – a tile world cell changed kind
pub mod blockchange;
