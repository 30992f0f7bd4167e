//! Axis-separated collision against the tile world.
//!
//! A body moves along x first and is pushed out of any solid column it
//! entered, then moves along y and is pushed out of any solid row. Resolving
//! the axes in this fixed order avoids ambiguous corner hits.
//!
//! Each pass scans the cells along the leading edge and stops at the first
//! solid one. It does not search for the smallest penetration, so a box that
//! clips an uneven corner snaps to whichever cell the scan reaches first.

use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::rigidbody::RigidBody;
use crate::resources::tileworld::TileWorld;

/// Push the box out of a solid column on its leading horizontal edge.
///
/// Zeroes `vx` on contact. Does nothing when `vx` is zero.
pub fn resolve_horizontal(
    pos: &mut Vec2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    tiles: &TileWorld,
) {
    let span = collider.cell_span(*pos, tiles);
    let cell = tiles.cell_size();
    for y in span.top..=span.bottom {
        if body.velocity.x > 0.0 {
            if tiles.is_solid(span.right, y) {
                pos.x = span.right as f32 * cell - collider.width();
                body.velocity.x = 0.0;
                break;
            }
        } else if body.velocity.x < 0.0 && tiles.is_solid(span.left, y) {
            pos.x = (span.left + 1) as f32 * cell;
            body.velocity.x = 0.0;
            break;
        }
    }
}

/// Push the box out of a solid row on its leading vertical edge.
///
/// Clears `grounded` first. A downward hit sets it again; an upward hit only
/// zeroes `vy`.
pub fn resolve_vertical(
    pos: &mut Vec2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    tiles: &TileWorld,
) {
    let span = collider.cell_span(*pos, tiles);
    let cell = tiles.cell_size();
    body.grounded = false;
    for x in span.left..=span.right {
        if body.velocity.y > 0.0 {
            if tiles.is_solid(x, span.bottom) {
                pos.y = span.bottom as f32 * cell - collider.height();
                body.velocity.y = 0.0;
                body.grounded = true;
                break;
            }
        } else if body.velocity.y < 0.0 && tiles.is_solid(x, span.top) {
            pos.y = (span.top + 1) as f32 * cell;
            body.velocity.y = 0.0;
            break;
        }
    }
}

/// Integrate one tick of velocity with collision, x then y.
///
/// Each displacement is the velocity rounded to a whole pixel, half to even.
pub fn move_and_collide(
    pos: &mut Vec2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    tiles: &TileWorld,
) {
    pos.x += body.velocity.x.round_ties_even();
    resolve_horizontal(pos, body, collider, tiles);

    pos.y += body.velocity.y.round_ties_even();
    resolve_vertical(pos, body, collider, tiles);
}
