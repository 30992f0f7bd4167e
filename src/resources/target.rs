use bevy_ecs::prelude::Resource;

use crate::resources::tileworld::BlockCoord;

/// Block under the cursor and within reach, for the render highlight.
///
/// Refreshed at the end of every tick by
/// [`update_targeted_block`](crate::systems::targeting::update_targeted_block).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetedBlock {
    pub block: Option<BlockCoord>,
}
