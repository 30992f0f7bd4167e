//! Cursor targeting.
//!
//! Maps a screen-space cursor to the grid cell under it and keeps the cell
//! only if its centre is within reach of the entity's centre:
//!
//! ```text
//! world  = screen + camera.offset
//! cell   = world / cell_size            (truncated)
//! target = cell  if |centre(entity) - centre(cell)| <= reach
//! ```
use bevy_ecs::prelude::*;
use glam::{IVec2, Vec2};

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::Player;
use crate::components::mapposition::MapPosition;
use crate::components::reach::Reach;
use crate::resources::camera2d::Camera2D;
use crate::resources::input::TickIntents;
use crate::resources::target::TargetedBlock;
use crate::resources::tileworld::{BlockCoord, TileWorld};

/// Cell under `screen`, if it is within `range` pixels of `center`.
///
/// The cell does not have to be on the grid; edits to off-grid cells are
/// ignored later by the tile world itself.
pub fn resolve_target(
    screen: IVec2,
    camera: &Camera2D,
    center: Vec2,
    range: f32,
    tiles: &TileWorld,
) -> Option<BlockCoord> {
    let world = camera.screen_to_world(screen);
    let block = tiles.block_at(world);
    let distance = center.distance(block.center(tiles.cell_size()));
    (distance <= range).then_some(block)
}

/// Recompute the highlight target from the latest cursor and camera.
pub fn update_targeted_block(
    intents: Res<TickIntents>,
    camera: Res<Camera2D>,
    tiles: Res<TileWorld>,
    mut target: ResMut<TargetedBlock>,
    query: Query<(&MapPosition, &BoxCollider, &Reach), With<Player>>,
) {
    let block = query.single().ok().and_then(|(position, collider, reach)| {
        resolve_target(
            intents.cursor_screen_pos,
            &camera,
            collider.center(position.pos),
            reach.range,
            &tiles,
        )
    });
    if target.block != block {
        target.block = block;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles() -> TileWorld {
        TileWorld::empty(100, 100, 32.0).unwrap()
    }

    #[test]
    fn test_near_cursor_is_targeted() {
        let cam = Camera2D::default();
        let hit = resolve_target(
            IVec2::new(100, 100),
            &cam,
            Vec2::new(116.0, 70.0),
            160.0,
            &tiles(),
        );
        assert_eq!(hit, Some(BlockCoord::new(3, 3)));
    }

    #[test]
    fn test_far_cursor_is_out_of_reach() {
        let cam = Camera2D::default();
        let miss = resolve_target(
            IVec2::new(1000, 1000),
            &cam,
            Vec2::new(116.0, 70.0),
            160.0,
            &tiles(),
        );
        assert_eq!(miss, None);
    }

    #[test]
    fn test_camera_offset_is_applied() {
        let mut cam = Camera2D::default();
        cam.offset = Vec2::new(1000.0, 500.0);
        let t = tiles();
        // Screen (10, 20) -> world (1010, 520) -> cell (31, 16).
        let hit = resolve_target(IVec2::new(10, 20), &cam, Vec2::new(1010.0, 520.0), 160.0, &t);
        assert_eq!(hit, Some(BlockCoord::new(31, 16)));
    }

    #[test]
    fn test_range_boundary_is_inclusive() {
        let cam = Camera2D::default();
        let t = tiles();
        // Cell (5, 0) centre is (176, 16); 160 px to the right of (16, 16).
        let at_edge = resolve_target(IVec2::new(170, 10), &cam, Vec2::new(16.0, 16.0), 160.0, &t);
        assert_eq!(at_edge, Some(BlockCoord::new(5, 0)));
        let beyond = resolve_target(IVec2::new(170, 10), &cam, Vec2::new(15.0, 16.0), 160.0, &t);
        assert_eq!(beyond, None);
    }

    #[test]
    fn test_update_targeted_block_system() {
        let mut world = World::new();
        world.insert_resource(tiles());
        world.insert_resource(Camera2D::default());
        world.insert_resource(TargetedBlock::default());
        world.insert_resource(TickIntents::idle().with_cursor(100, 100));
        world.spawn((
            Player,
            MapPosition::new(106.0, 50.0),
            BoxCollider::new(20.0, 40.0),
            Reach::new(160.0),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(update_targeted_block);
        schedule.run(&mut world);
        assert_eq!(
            world.resource::<TargetedBlock>().block,
            Some(BlockCoord::new(3, 3))
        );

        world.insert_resource(TickIntents::idle().with_cursor(1000, 1000));
        schedule.run(&mut world);
        assert_eq!(world.resource::<TargetedBlock>().block, None);
    }
}
