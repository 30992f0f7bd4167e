//! Top-level simulation context.
//!
//! [`Simulation`] owns the ECS [`World`] with the tile grid, camera and player,
//! plus the tick [`Schedule`]. A presentation layer drives it with one
//! [`TickIntents`] per frame and reads back the render queries.
//!
//! Tick order:
//!
//! 1. advance the fixed-step clock
//! 2. drain queued block commands
//! 3. latch movement intent, resolve jump
//! 4. click break/place against the current camera
//! 5. platformer physics and collision
//! 6. camera follow
//! 7. refresh the highlight target

use bevy_ecs::prelude::*;
use glam::{IVec2, Vec2};
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::{MovementIntent, Player};
use crate::components::mapposition::MapPosition;
use crate::components::reach::Reach;
use crate::components::rigidbody::RigidBody;
use crate::error::SandboxResult;
use crate::events::blockchange::log_block_change;
use crate::resources::blockqueue::{BlockCommandQueue, BlockCommandSender};
use crate::resources::camera2d::Camera2D;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::TickIntents;
use crate::resources::target::TargetedBlock;
use crate::resources::terrain::TerrainRng;
use crate::resources::tileworld::{BlockCoord, BlockKind, TileWorld};
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow;
use crate::systems::input::apply_tick_intents;
use crate::systems::interaction::{apply_block_commands, block_interaction};
use crate::systems::physics::platformer_physics;
use crate::systems::targeting::{resolve_target, update_targeted_block};
use crate::systems::time::advance_world_time;

/// One running sandbox session.
pub struct Simulation {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Simulation {
    /// Build a session from configuration, generating fresh terrain.
    ///
    /// Uses `config.seed` when present, otherwise an entropy-seeded RNG.
    pub fn new(config: &GameConfig) -> SandboxResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Build a session whose terrain detail comes from `rng`.
    pub fn with_rng<R: TerrainRng + ?Sized>(config: &GameConfig, rng: &mut R) -> SandboxResult<Self> {
        config.validate()?;
        let tiles = TileWorld::generate(
            config.world_width,
            config.world_height,
            config.cell_size,
            &config.terrain,
            rng,
        )?;
        Ok(Self::assemble(config, tiles))
    }

    /// Build a session around an existing grid.
    ///
    /// Grid dimensions and cell size come from `tiles`; everything else comes
    /// from `config`, which is validated as a whole.
    pub fn from_tiles(config: &GameConfig, tiles: TileWorld) -> SandboxResult<Self> {
        config.validate()?;
        Ok(Self::assemble(config, tiles))
    }

    fn assemble(config: &GameConfig, tiles: TileWorld) -> Self {
        let spawn_x = tiles.width() as f32 * tiles.cell_size() / 2.0;
        let reach = config.interaction_range * tiles.cell_size();

        let mut world = World::new();
        world.insert_resource(tiles);
        world.insert_resource(
            Camera2D::new(config.viewport_width, config.viewport_height)
                .with_pan_speed(config.pan_speed),
        );
        world.insert_resource(TickIntents::default());
        world.insert_resource(TargetedBlock::default());
        world.insert_resource(BlockCommandQueue::new());
        world.insert_resource(WorldTime::with_rate(config.target_fps));
        world.insert_resource(config.clone());

        world.add_observer(log_block_change);

        let player = world
            .spawn((
                Player,
                MapPosition::new(spawn_x, 0.0),
                BoxCollider::new(config.player_width, config.player_height),
                RigidBody::new(),
                MovementIntent::default(),
                config.physics,
                Reach::new(reach),
            ))
            .id();
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                advance_world_time,
                apply_block_commands,
                apply_tick_intents,
                block_interaction,
                platformer_physics,
                camera_follow,
                update_targeted_block,
            )
                .chain(),
        );

        info!(
            "Simulation ready: player {:?} spawned at ({}, 0), reach {} px",
            player, spawn_x, reach
        );

        Self {
            world,
            schedule,
            player,
        }
    }

    /// Advance the simulation by one tick with this frame's input.
    pub fn tick(&mut self, intents: TickIntents) {
        *self.world.resource_mut::<TickIntents>() = intents;
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    // ==================== TILE WORLD ====================

    pub fn tiles(&self) -> &TileWorld {
        self.world.resource::<TileWorld>()
    }

    /// Direct grid access. Writes made here trigger no block change events.
    pub fn tiles_mut(&mut self) -> Mut<'_, TileWorld> {
        self.world.resource_mut::<TileWorld>()
    }

    /// Handle for queueing block edits from any thread.
    pub fn block_commands(&self) -> BlockCommandSender {
        self.world.resource::<BlockCommandQueue>().sender()
    }

    /// Non-Air cells inside the camera viewport, row by row.
    pub fn visible_blocks(&self) -> impl Iterator<Item = (BlockCoord, BlockKind)> + '_ {
        let tiles = self.tiles();
        let camera = self.camera();
        let (xs, ys) = tiles.visible_range(camera.offset, camera.viewport());
        ys.flat_map(move |y| xs.clone().map(move |x| BlockCoord::new(x, y)))
            .filter_map(move |at| {
                let kind = tiles.get_block(at.x, at.y);
                kind.is_solid().then_some((at, kind))
            })
    }

    // ==================== PLAYER ====================

    pub fn player(&self) -> Entity {
        self.player
    }

    /// Top-left corner of the player box.
    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<MapPosition>(self.player)
            .map(|p| p.pos)
            .unwrap_or_default()
    }

    pub fn set_player_position(&mut self, pos: Vec2) {
        if let Some(mut p) = self.world.get_mut::<MapPosition>(self.player) {
            p.pos = pos;
        }
    }

    pub fn player_size(&self) -> Vec2 {
        self.world
            .get::<BoxCollider>(self.player)
            .map(|c| c.size)
            .unwrap_or_default()
    }

    /// Centre of the player box, computed from position and size.
    pub fn player_center(&self) -> Vec2 {
        self.player_position() + self.player_size() * 0.5
    }

    pub fn player_body(&self) -> RigidBody {
        self.world
            .get::<RigidBody>(self.player)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_player_velocity(&mut self, velocity: Vec2) {
        if let Some(mut body) = self.world.get_mut::<RigidBody>(self.player) {
            body.velocity = velocity;
        }
    }

    pub fn player_reach(&self) -> f32 {
        self.world
            .get::<Reach>(self.player)
            .map(|r| r.range)
            .unwrap_or_default()
    }

    // ==================== VIEW ====================

    pub fn camera(&self) -> &Camera2D {
        self.world.resource::<Camera2D>()
    }

    /// Manual pan; the next tick's follow step overrides it.
    pub fn pan_camera(&mut self, dx: f32, dy: f32) {
        self.world.resource_mut::<Camera2D>().pan(dx, dy);
    }

    /// Highlight target as of the end of the last tick.
    pub fn targeted_block(&self) -> Option<BlockCoord> {
        self.world.resource::<TargetedBlock>().block
    }

    /// Block the player could reach at `cursor` with the current camera.
    pub fn target_at(&self, cursor: IVec2) -> Option<BlockCoord> {
        resolve_target(
            cursor,
            self.camera(),
            self.player_center(),
            self.player_reach(),
            self.tiles(),
        )
    }

    // ==================== MISC ====================

    pub fn time(&self) -> &WorldTime {
        self.world.resource::<WorldTime>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Raw ECS access, e.g. to add observers.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
