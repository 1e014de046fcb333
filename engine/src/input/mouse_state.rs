//! FPS-style Mouse State Tracker
//!
//! Raw motion deltas accumulate between frames and are consumed once per
//! tick. Button presses are latched as edges so a click between two frames is
//! never lost.

/// Mouse buttons the sandbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

/// Button press edges collected since the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clicks {
    pub left: bool,
    pub right: bool,
}

/// FPS-style mouse state tracker with delta accumulation.
///
/// # Example
///
/// ```rust,ignore
/// let mut mouse = FpsMouseState::new();
///
/// // In event loop: accumulate raw mouse motion
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // In update loop: consume accumulated delta
/// let (dx, dy) = mouse.consume_delta();
/// // dx = 13.0, dy = -3.0
/// ```
#[derive(Debug, Clone)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    clicks: Clicks,
    cursor_inside: bool,
}

impl Default for FpsMouseState {
    fn default() -> Self {
        Self {
            delta_x: 0.0,
            delta_y: 0.0,
            clicks: Clicks::default(),
            cursor_inside: true,
        }
    }
}

impl FpsMouseState {
    /// Create a new mouse state with zero deltas and the cursor inside.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    /// Latch a button press.
    pub fn press_button(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.clicks.left = true,
            MouseButton::Right => self.clicks.right = true,
            MouseButton::Other => {}
        }
    }

    /// Take the latched presses, clearing them.
    pub fn take_clicks(&mut self) -> Clicks {
        std::mem::take(&mut self.clicks)
    }

    pub fn set_cursor_inside(&mut self, inside: bool) {
        self.cursor_inside = inside;
    }

    pub fn is_cursor_inside(&self) -> bool {
        self.cursor_inside
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_and_consume_delta() {
        let mut state = FpsMouseState::new();
        state.accumulate_delta(10.0, 5.0);
        state.accumulate_delta(3.0, -2.0);
        assert_eq!(state.peek_delta(), (13.0, 3.0));

        assert_eq!(state.consume_delta(), (13.0, 3.0));
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_clicks_are_latched_until_taken() {
        let mut state = FpsMouseState::new();
        state.press_button(MouseButton::Right);
        state.press_button(MouseButton::Other);
        assert_eq!(state.take_clicks(), Clicks { left: false, right: true });
        assert_eq!(state.take_clicks(), Clicks::default());
    }

    #[test]
    fn test_reset() {
        let mut state = FpsMouseState::new();
        state.accumulate_delta(10.0, 5.0);
        state.set_cursor_inside(false);

        state.reset();
        assert_eq!(state.peek_delta(), (0.0, 0.0));
        assert!(state.is_cursor_inside());
    }
}
