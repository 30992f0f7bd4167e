//! Per-tick input intent resource.
//!
//! The presentation layer polls its own devices and hands the simulation one
//! [`TickIntents`] bundle per tick. Systems only ever see this bundle, never
//! raw key codes, so the core stays independent of any windowing library.
use bevy_ecs::prelude::*;
use glam::IVec2;

/// Everything the input collaborator reports for one tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickIntents {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Break the targeted block.
    pub primary_click: bool,
    /// Place a block at the targeted cell.
    pub secondary_click: bool,
    /// Cursor position in screen pixels.
    pub cursor_screen_pos: IVec2,
}

impl TickIntents {
    /// No buttons held, cursor at the screen origin.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, x: i32, y: i32) -> Self {
        self.cursor_screen_pos = IVec2::new(x, y);
        self
    }

    pub fn left(mut self) -> Self {
        self.move_left = true;
        self
    }

    pub fn right(mut self) -> Self {
        self.move_right = true;
        self
    }

    pub fn jumping(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn breaking(mut self) -> Self {
        self.primary_click = true;
        self
    }

    pub fn placing(mut self) -> Self {
        self.secondary_click = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_intents_all_inactive() {
        let i = TickIntents::idle();
        assert!(!i.move_left);
        assert!(!i.move_right);
        assert!(!i.jump);
        assert!(!i.primary_click);
        assert!(!i.secondary_click);
        assert_eq!(i.cursor_screen_pos, IVec2::ZERO);
    }

    #[test]
    fn test_builder_sets_flags() {
        let i = TickIntents::idle().right().jumping().placing().with_cursor(10, 20);
        assert!(i.move_right && i.jump && i.secondary_click);
        assert!(!i.move_left && !i.primary_click);
        assert_eq!(i.cursor_screen_pos, IVec2::new(10, 20));
    }
}
