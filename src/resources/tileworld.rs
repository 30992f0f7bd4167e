//! Tile world resource.
//!
//! A fixed `width x height` grid of [`BlockKind`] cells stored one byte per
//! cell in row-major order. The grid is the only shared mutable state of the
//! simulation: physics and targeting read it, block interaction writes it.
//!
//! Coordinates outside the grid are never an error. Reads return
//! [`BlockKind::Air`] and writes are silently dropped, so collision against
//! the world edge degrades to "no collision".

use std::ops::Range;

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::error::{SandboxError, SandboxResult};

/// Closed set of block kinds a cell can hold.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockKind {
    #[default]
    Air = 0,
    Dirt = 1,
    Stone = 2,
    Grass = 3,
}

impl BlockKind {
    /// Every kind, in discriminant order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Air,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Grass,
    ];

    pub fn is_solid(self) -> bool {
        self != BlockKind::Air
    }

    /// RGB fill colour used by the presentation layer.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            BlockKind::Air => (135, 206, 235),
            BlockKind::Dirt => (139, 69, 19),
            BlockKind::Stone => (128, 128, 128),
            BlockKind::Grass => (34, 139, 34),
        }
    }
}

/// Integer grid cell coordinate. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
}

impl BlockCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours: left, right, up, down.
    pub fn neighbors(self) -> [BlockCoord; 4] {
        [
            BlockCoord::new(self.x - 1, self.y),
            BlockCoord::new(self.x + 1, self.y),
            BlockCoord::new(self.x, self.y - 1),
            BlockCoord::new(self.x, self.y + 1),
        ]
    }

    /// World-space centre of this cell.
    pub fn center(self, cell_size: f32) -> Vec2 {
        Vec2::new(
            self.x as f32 * cell_size + cell_size * 0.5,
            self.y as f32 * cell_size + cell_size * 0.5,
        )
    }
}

/// Fixed-size grid of blocks.
///
/// Dimensions are validated once at construction and never change. Terrain is
/// filled by [`crate::resources::terrain`]; this type only stores and answers
/// queries.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileWorld {
    width: i32,
    height: i32,
    /// Edge length of one cell in world units (pixels).
    cell_size: f32,
    cells: Box<[BlockKind]>,
}

impl TileWorld {
    /// Create an all-Air grid.
    ///
    /// Fails fast on a non-positive dimension or a non-positive cell size,
    /// since everything downstream assumes a non-empty grid.
    pub fn empty(width: i32, height: i32, cell_size: f32) -> SandboxResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SandboxError::InvalidDimensions { width, height });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SandboxError::InvalidCellSize(cell_size));
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cell_size,
            cells: vec![BlockKind::Air; len].into_boxed_slice(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Baseline surface row: the middle of the grid.
    pub fn surface_level(&self) -> i32 {
        self.height / 2
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Stored kind, or Air for any out-of-bounds coordinate.
    pub fn get_block(&self, x: i32, y: i32) -> BlockKind {
        self.index(x, y)
            .map(|i| self.cells[i])
            .unwrap_or(BlockKind::Air)
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, kind: BlockKind) {
        self.replace_block(x, y, kind);
    }

    /// Overwrite a cell and return what was there before.
    ///
    /// Returns `None` (and writes nothing) when the coordinate is outside the grid.
    pub fn replace_block(&mut self, x: i32, y: i32, kind: BlockKind) -> Option<BlockKind> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.cells[i], kind))
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_block(x, y).is_solid()
    }

    /// Cell index containing the world-space coordinate `px`.
    ///
    /// Truncates toward zero, so small negative coordinates map to cell 0.
    pub fn cell_of(&self, px: f32) -> i32 {
        (px / self.cell_size) as i32
    }

    /// Cell containing a world-space point.
    pub fn block_at(&self, point: Vec2) -> BlockCoord {
        BlockCoord::new(self.cell_of(point.x), self.cell_of(point.y))
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Cell ranges overlapped by a viewport whose top-left corner sits at
    /// `offset` in world space, clamped to the grid.
    pub fn visible_range(&self, offset: Vec2, viewport: Vec2) -> (Range<i32>, Range<i32>) {
        let axis = |start: f32, extent: f32, limit: i32| {
            let first = ((start / self.cell_size).floor() as i32).max(0);
            // Float to int casts saturate, so the +1 must too.
            let last = (((start + extent) / self.cell_size).floor() as i32)
                .saturating_add(1)
                .min(limit);
            first..last.max(first)
        };
        (
            axis(offset.x, viewport.x, self.width),
            axis(offset.y, viewport.y, self.height),
        )
    }

    /// Iterate every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockCoord, BlockKind)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| (BlockCoord::new(i as i32 % w, i as i32 / w), k))
    }
}
