//! Procedural terrain for the [`TileWorld`].
//!
//! Each column gets a smooth sinusoidal surface row:
//!
//! ```text
//! surface(x) = surface_level + round(sin(x * frequency) * amplitude)
//! ```
//!
//! From `surface(x)` down to the bottom of the grid, the first `dirt_depth`
//! rows are Dirt and every row below is an independent coin flip between
//! Stone and Dirt. The row directly above the surface is Grass whenever it is
//! on the grid. Everything else stays Air.
//!
//! The coin flips come from a [`TerrainRng`] so tests can pin them.

use log::info;

use crate::error::SandboxResult;
use crate::resources::tileworld::{BlockKind, TileWorld};

pub const DEFAULT_DIRT_DEPTH: i32 = 5;
pub const DEFAULT_STONE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_SURFACE_AMPLITUDE: f64 = 5.0;
pub const DEFAULT_SURFACE_FREQUENCY: f64 = 0.1;

/// Source of uniform samples in `[0, 1)` for terrain detail.
pub trait TerrainRng {
    fn next_f64(&mut self) -> f64;
}

impl TerrainRng for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// Shape parameters for [`generate_terrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Rows of guaranteed Dirt starting at the surface row.
    pub dirt_depth: i32,
    /// Chance that a cell below the dirt layer is Stone.
    pub stone_probability: f64,
    pub surface_amplitude: f64,
    pub surface_frequency: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            dirt_depth: DEFAULT_DIRT_DEPTH,
            stone_probability: DEFAULT_STONE_PROBABILITY,
            surface_amplitude: DEFAULT_SURFACE_AMPLITUDE,
            surface_frequency: DEFAULT_SURFACE_FREQUENCY,
        }
    }
}

impl TerrainParams {
    /// Surface row of column `x` for a world whose baseline is `surface_level`.
    pub fn surface(&self, surface_level: i32, x: i32) -> i32 {
        let wave = (x as f64 * self.surface_frequency).sin() * self.surface_amplitude;
        surface_level + wave.round() as i32
    }
}

/// Fill `world` with terrain, column by column, top to bottom.
///
/// Exactly one sample is drawn per cell below the dirt layer.
pub fn generate_terrain<R: TerrainRng + ?Sized>(
    world: &mut TileWorld,
    params: &TerrainParams,
    rng: &mut R,
) {
    let level = world.surface_level();
    for x in 0..world.width() {
        let surface = params.surface(level, x);
        for y in surface.max(0)..world.height() {
            let kind = if y < surface + params.dirt_depth {
                BlockKind::Dirt
            } else if rng.next_f64() < params.stone_probability {
                BlockKind::Stone
            } else {
                BlockKind::Dirt
            };
            world.set_block(x, y, kind);
        }
        if surface > 0 {
            world.set_block(x, surface - 1, BlockKind::Grass);
        }
    }
}

impl TileWorld {
    /// Create a world and run terrain generation on it once.
    pub fn generate<R: TerrainRng + ?Sized>(
        width: i32,
        height: i32,
        cell_size: f32,
        params: &TerrainParams,
        rng: &mut R,
    ) -> SandboxResult<Self> {
        let mut world = TileWorld::empty(width, height, cell_size)?;
        generate_terrain(&mut world, params, rng);
        info!(
            "Generated {}x{} terrain: {} grass, {} dirt, {} stone",
            width,
            height,
            world.count(BlockKind::Grass),
            world.count(BlockKind::Dirt),
            world.count(BlockKind::Stone)
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source that always returns the same sample.
    struct FixedRoll(f64);

    impl TerrainRng for FixedRoll {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    /// Counts how many samples were requested.
    struct CountingRoll(usize);

    impl TerrainRng for CountingRoll {
        fn next_f64(&mut self) -> f64 {
            self.0 += 1;
            0.99
        }
    }

    fn seeded(w: i32, h: i32, seed: u64) -> TileWorld {
        let mut rng = fastrand::Rng::with_seed(seed);
        TileWorld::generate(w, h, 32.0, &TerrainParams::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_surface_profile() {
        let p = TerrainParams::default();
        assert_eq!(p.surface(50, 0), 50);
        // sin(1.6) * 5 = 4.998 -> 5
        assert_eq!(p.surface(50, 16), 55);
        // sin(4.7) * 5 = -4.999 -> -5
        assert_eq!(p.surface(50, 47), 45);
    }

    #[test]
    fn test_generated_world_has_every_solid_kind() {
        let w = seeded(50, 50, 7);
        assert!(w.count(BlockKind::Grass) > 0);
        assert!(w.count(BlockKind::Dirt) > 0);
        assert!(w.count(BlockKind::Stone) > 0);
    }

    #[test]
    fn test_top_rows_stay_air() {
        for seed in [1, 2, 3] {
            let w = seeded(50, 50, seed);
            let p = TerrainParams::default();
            for x in 0..w.width() {
                let surface = p.surface(w.surface_level(), x);
                for y in 0..(surface - 10) {
                    assert_eq!(w.get_block(x, y), BlockKind::Air, "column {x} row {y}");
                }
            }
            // Whole band above the lowest possible grass row.
            for y in 0..(w.surface_level() - 10) {
                for x in 0..w.width() {
                    assert_eq!(w.get_block(x, y), BlockKind::Air);
                }
            }
        }
    }

    #[test]
    fn test_column_layout() {
        let mut w = TileWorld::empty(20, 40, 32.0).unwrap();
        let p = TerrainParams::default();
        generate_terrain(&mut w, &p, &mut FixedRoll(0.0));
        for x in 0..20 {
            let s = p.surface(w.surface_level(), x);
            for y in 0..s - 1 {
                assert_eq!(w.get_block(x, y), BlockKind::Air);
            }
            assert_eq!(w.get_block(x, s - 1), BlockKind::Grass);
            for y in s..s + 5 {
                assert_eq!(w.get_block(x, y), BlockKind::Dirt);
            }
            for y in s + 5..40 {
                assert_eq!(w.get_block(x, y), BlockKind::Stone);
            }
        }
    }

    #[test]
    fn test_high_rolls_give_dirt_below_layer() {
        let mut w = TileWorld::empty(10, 30, 32.0).unwrap();
        generate_terrain(&mut w, &TerrainParams::default(), &mut FixedRoll(0.75));
        assert_eq!(w.count(BlockKind::Stone), 0);
        assert_eq!(w.count(BlockKind::Grass), 10);
    }

    #[test]
    fn test_one_sample_per_deep_cell() {
        let mut w = TileWorld::empty(1, 30, 32.0).unwrap();
        let mut rng = CountingRoll(0);
        generate_terrain(&mut w, &TerrainParams::default(), &mut rng);
        // Column 0: surface 15, dirt rows 15..20, sampled rows 20..30.
        assert_eq!(rng.0, 10);
    }

    #[test]
    fn test_same_seed_same_world() {
        assert_eq!(seeded(40, 40, 99), seeded(40, 40, 99));
    }

    #[test]
    fn test_tiny_world_without_room_for_grass() {
        // surface_level 1: columns with a negative wave start above the grid.
        let mut w = TileWorld::empty(64, 2, 32.0).unwrap();
        generate_terrain(&mut w, &TerrainParams::default(), &mut FixedRoll(0.0));
        let p = TerrainParams::default();
        for x in 0..64 {
            let s = p.surface(1, x);
            if s <= 0 {
                // no grass row, column is solid from the top
                assert!((0..2).all(|y| w.get_block(x, y) != BlockKind::Grass));
            }
        }
        assert!(w.count(BlockKind::Air) < 128);
    }
}
