//! Cursor Manager Module
//!
//! Mouse capture for FPS play. Starts captured; Backspace toggles. Clicks
//! only reach block placement and removal while captured, and the first click
//! after re-capturing is swallowed so the capture gesture never edits the
//! world.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new();
//!
//! if backspace_pressed {
//!     cursor.toggle_capture();
//! }
//! if cursor.handle_click(MouseButton::Left, inside) == ClickDisposition::Pass {
//!     // break the targeted block
//! }
//! if cursor.is_dirty() {
//!     apply_to_window(&window, &cursor);
//!     cursor.clear_dirty();
//! }
//! ```

use super::mouse_state::MouseButton;

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Apply cursor state to the window
    ApplyState,
}

/// What happens to a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// Forward the click to the world.
    Pass,
    /// The click was used by the cursor logic or ignored.
    Consumed,
}

/// Manages cursor state for FPS gameplay.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the cursor is captured (hidden, grabbed, mouse look active)
    captured: bool,
    /// Swallow the next left or right click
    skip_next_click: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a new CursorManager with the cursor captured.
    pub fn new() -> Self {
        Self {
            captured: true,
            skip_next_click: false,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Whether the next click will be swallowed.
    pub fn is_skip_armed(&self) -> bool {
        self.skip_next_click
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Flip capture. Re-capturing arms the click skip, releasing disarms it.
    pub fn toggle_capture(&mut self) -> CursorAction {
        self.captured = !self.captured;
        self.skip_next_click = self.captured;
        self.state_dirty = true;
        log::debug!("cursor {}", if self.captured { "captured" } else { "released" });
        CursorAction::ApplyState
    }

    /// Decide whether a click reaches the world.
    ///
    /// While released, a left click inside the window captures the cursor,
    /// arms the skip and is consumed; every other click is ignored. While
    /// captured, an armed skip swallows one click.
    pub fn handle_click(&mut self, button: MouseButton, cursor_inside: bool) -> ClickDisposition {
        if !self.captured {
            if button == MouseButton::Left && cursor_inside {
                self.captured = true;
                self.skip_next_click = true;
                self.state_dirty = true;
                log::debug!("cursor captured by click");
            }
            return ClickDisposition::Consumed;
        }

        if self.skip_next_click {
            self.skip_next_click = false;
            return ClickDisposition::Consumed;
        }

        ClickDisposition::Pass
    }

    /// Handle window focus gained event.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Handle window focus lost event.
    ///
    /// The capture preference is remembered and restored on focus gain.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.state_dirty = true;
    }

    /// Get the desired cursor visibility based on current state.
    pub fn should_cursor_be_visible(&self) -> bool {
        !self.should_cursor_be_grabbed()
    }

    /// Get whether cursor should be grabbed.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.captured && self.has_focus
    }

    /// Whether mouse motion turns the camera.
    pub fn mouse_look_enabled(&self) -> bool {
        self.captured
    }
}
