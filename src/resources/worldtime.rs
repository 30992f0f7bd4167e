use bevy_ecs::prelude::Resource;

/// Fixed-step simulation clock.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Ticks run so far.
    pub ticks: u64,
    /// Simulated seconds so far.
    pub elapsed: f32,
    /// Seconds per tick.
    pub delta: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime::with_rate(60)
    }
}

impl WorldTime {
    /// Clock for a fixed rate of `fps` ticks per second.
    pub fn with_rate(fps: u32) -> Self {
        WorldTime {
            ticks: 0,
            elapsed: 0.0,
            delta: 1.0 / fps.max(1) as f32,
        }
    }
}
