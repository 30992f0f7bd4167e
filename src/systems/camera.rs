use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::Player;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2D;

/// Center the camera on the player's box.
pub fn camera_follow(
    mut camera: ResMut<Camera2D>,
    query: Query<(&MapPosition, &BoxCollider), With<Player>>,
) {
    if let Ok((position, collider)) = query.single() {
        camera.follow(collider.center(position.pos));
    }
}
