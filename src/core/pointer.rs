use glam::Vec2;

/// Last pointer position in viewport pixels; `None` while the pointer is
/// outside the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    #[inline]
    pub fn leave(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}
