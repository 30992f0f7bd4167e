use bevy_ecs::prelude::Component;

/// How far from its centre an entity can break or place blocks, in pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Reach {
    pub range: f32,
}

impl Reach {
    pub fn new(range: f32) -> Self {
        Self { range }
    }
}
