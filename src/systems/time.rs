//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource by one fixed step at the start of every tick.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Count the tick and add one fixed step to `elapsed`.
pub fn advance_world_time(mut wt: ResMut<WorldTime>) {
    wt.ticks += 1;
    wt.elapsed += wt.delta;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_world_time() {
        let mut world = World::new();
        world.insert_resource(WorldTime::with_rate(50));
        let mut schedule = Schedule::default();
        schedule.add_systems(advance_world_time);
        for _ in 0..50 {
            schedule.run(&mut world);
        }
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.ticks, 50);
        assert!((wt.elapsed - 1.0).abs() < 1e-4);
    }
}
