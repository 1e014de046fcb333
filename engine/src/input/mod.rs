//! Input Module
//!
//! Platform-agnostic input state for the sandbox. The window shell feeds
//! events in; once per frame [`InputState::frame_input`] drains them into a
//! [`FrameInput`] snapshot for [`crate::sandbox::Sandbox::tick`].

pub mod cursor_manager;
pub mod keyboard;
pub mod mouse_state;

// Re-export commonly used types at module level
pub use cursor_manager::{ClickDisposition, CursorAction, CursorManager};
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::{Clicks, FpsMouseState, MouseButton};

/// Everything one frame of the sandbox needs from the user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: MovementKeys,
    /// Raw mouse motion since the previous frame
    pub look_delta: (f32, f32),
    /// Selector slot pressed this frame (1-4)
    pub select_slot: Option<u8>,
    /// Backspace pressed this frame
    pub toggle_capture: bool,
    pub clicks: Clicks,
    pub cursor_inside: bool,
}

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: FpsMouseState,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot this frame's input and clear the per-frame edges.
    pub fn frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            movement: self.keyboard.movement,
            look_delta: self.mouse.consume_delta(),
            select_slot: self.keyboard.selected_slot(),
            toggle_capture: self.keyboard.was_just_pressed(KeyCode::Backspace),
            clicks: self.mouse.take_clicks(),
            cursor_inside: self.mouse.is_cursor_inside(),
        };
        self.keyboard.end_frame();
        input
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}
