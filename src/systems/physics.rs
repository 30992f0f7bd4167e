//! Per-tick platformer physics.
//!
//! [`platformer_step`] is the whole velocity/position update for one body
//! and one tick, as a plain function over borrowed state. The
//! [`platformer_physics`] system runs it for every platformer entity against
//! the shared [`TileWorld`].
//!
//! Jumping is not part of the step: it is resolved earlier in the tick by
//! [`crate::systems::input::apply_tick_intents`], so a jump always precedes
//! gravity.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::MovementIntent;
use crate::components::mapposition::MapPosition;
use crate::components::platformer::PlatformerParams;
use crate::components::rigidbody::RigidBody;
use crate::resources::tileworld::TileWorld;
use crate::systems::collision::move_and_collide;

/// Advance one body by one tick.
///
/// Horizontal intent, then gravity, then x/y integration with collision,
/// then the horizontal deadzone.
pub fn platformer_step(
    pos: &mut Vec2,
    body: &mut RigidBody,
    intent: &MovementIntent,
    collider: &BoxCollider,
    params: &PlatformerParams,
    tiles: &TileWorld,
) {
    body.apply_horizontal_intent(intent, params);
    body.apply_gravity(params);
    move_and_collide(pos, body, collider, tiles);
    body.settle(params);
}

/// Run [`platformer_step`] for every platformer entity.
pub fn platformer_physics(
    tiles: Res<TileWorld>,
    mut query: Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        &MovementIntent,
        &BoxCollider,
        &PlatformerParams,
    )>,
) {
    for (entity, mut position, mut body, intent, collider, params) in query.iter_mut() {
        platformer_step(
            &mut position.pos,
            &mut body,
            intent,
            collider,
            params,
            &tiles,
        );
        trace!(
            "{:?} pos=({}, {}) vel=({:.3}, {:.3}) grounded={}",
            entity,
            position.pos.x,
            position.pos.y,
            body.velocity.x,
            body.velocity.y,
            body.grounded
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tileworld::BlockKind;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// 20x20 world with a solid floor on row 10.
    fn floor_world() -> TileWorld {
        let mut t = TileWorld::empty(20, 20, 32.0).unwrap();
        for x in 0..20 {
            t.set_block(x, 10, BlockKind::Dirt);
        }
        t
    }

    fn step(pos: &mut Vec2, body: &mut RigidBody, intent: MovementIntent, tiles: &TileWorld) {
        platformer_step(
            pos,
            body,
            &intent,
            &BoxCollider::new(20.0, 40.0),
            &PlatformerParams::default(),
            tiles,
        );
    }

    #[test]
    fn test_free_fall_accumulates_gravity() {
        let t = TileWorld::empty(20, 20, 32.0).unwrap();
        let mut pos = Vec2::new(100.0, 0.0);
        let mut body = RigidBody::new();
        step(&mut pos, &mut body, MovementIntent::default(), &t);
        assert!(approx_eq(body.velocity.y, 0.4));
        assert_eq!(pos.y, 0.0);
        step(&mut pos, &mut body, MovementIntent::default(), &t);
        assert!(approx_eq(body.velocity.y, 0.8));
        assert_eq!(pos.y, 1.0);
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let t = floor_world();
        let mut pos = Vec2::new(100.0, 0.0);
        let mut body = RigidBody::new();
        let mut landed = false;
        for _ in 0..120 {
            step(&mut pos, &mut body, MovementIntent::default(), &t);
            if body.grounded {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(pos.y, 280.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_never_exceeds_terminal_velocity() {
        let t = TileWorld::empty(4, 4, 32.0).unwrap();
        let mut pos = Vec2::new(0.0, 0.0);
        let mut body = RigidBody::new();
        for _ in 0..100 {
            step(&mut pos, &mut body, MovementIntent::default(), &t);
            assert!(body.velocity.y <= 8.0 + EPSILON);
        }
        assert!(approx_eq(body.velocity.y, 8.0));
    }

    #[test]
    fn test_walk_right_accelerates_to_cap() {
        let t = floor_world();
        let mut pos = Vec2::new(100.0, 280.0);
        let mut body = RigidBody::new();
        body.grounded = true;
        for _ in 0..10 {
            step(&mut pos, &mut body, MovementIntent::new(false, true), &t);
        }
        assert!(approx_eq(body.velocity.x, 4.0));
        assert!(pos.x > 100.0);
    }

    #[test]
    fn test_friction_decays_to_exact_zero() {
        let t = floor_world();
        let mut pos = Vec2::new(100.0, 280.0);
        let mut body = RigidBody::new().with_velocity(4.0, 0.0);
        body.grounded = true;
        step(&mut pos, &mut body, MovementIntent::default(), &t);
        assert!(body.velocity.x.abs() < 4.0);

        for _ in 0..200 {
            step(&mut pos, &mut body, MovementIntent::default(), &t);
        }
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_deadzone_snaps_after_step() {
        let t = TileWorld::empty(20, 20, 32.0).unwrap();
        let mut pos = Vec2::new(100.0, 0.0);
        // 0.1 * 0.95 = 0.095 < 0.1
        let mut body = RigidBody::new().with_velocity(0.1, 0.0);
        step(&mut pos, &mut body, MovementIntent::default(), &t);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_system_moves_every_platformer() {
        let mut world = World::new();
        world.insert_resource(TileWorld::empty(20, 20, 32.0).unwrap());
        let a = world
            .spawn((
                MapPosition::new(10.0, 0.0),
                RigidBody::new().with_velocity(2.0, 0.0),
                MovementIntent::default(),
                BoxCollider::new(20.0, 40.0),
                PlatformerParams::default(),
            ))
            .id();
        let b = world
            .spawn((
                MapPosition::new(200.0, 0.0),
                RigidBody::new().with_velocity(-2.0, 0.0),
                MovementIntent::default(),
                BoxCollider::new(20.0, 40.0),
                PlatformerParams::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(platformer_physics);
        schedule.run(&mut world);

        assert_eq!(world.get::<MapPosition>(a).unwrap().pos.x, 12.0);
        assert_eq!(world.get::<MapPosition>(b).unwrap().pos.x, 198.0);
    }
}
