//! Keyboard Input Module
//!
//! Tracks held movement keys and per-frame press edges for the sandbox
//! controls. Decoupled from winit; the app shell maps its key codes here.

use std::collections::HashSet;

/// Generic key codes for the sandbox controls, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Block selector
    Digit1,
    Digit2,
    Digit3,
    Digit4,

    // Control keys
    Backspace,
    F11,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Selector slot (1-4) bound to this key.
    pub fn selector_slot(self) -> Option<u8> {
        match self {
            KeyCode::Digit1 => Some(1),
            KeyCode::Digit2 => Some(2),
            KeyCode::Digit3 => Some(3),
            KeyCode::Digit4 => Some(4),
            _ => None,
        }
    }
}

/// Tracks the current state of movement keys.
///
/// Held keys give continuous movement; the integrator reads them every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
    /// Space - jump when grounded
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::Space => self.jump = pressed,
            _ => return false,
        }
        true
    }

    /// Check if any horizontal movement key is pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Complete keyboard state tracking.
///
/// Holds movement keys plus the keys that went down since the last
/// [`KeyboardState::end_frame`]. OS key repeat does not produce new edges.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            if self.held.insert(key) {
                self.just_pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
        self.movement.handle_key(key, pressed)
    }

    /// Whether `key` went down this frame.
    pub fn was_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Whether `key` is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Lowest selector slot pressed this frame.
    pub fn selected_slot(&self) -> Option<u8> {
        self.just_pressed
            .iter()
            .filter_map(|key| key.selector_slot())
            .min()
    }

    /// Forget this frame's press edges.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.held.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);

        keys.handle_key(KeyCode::Space, true);
        assert!(keys.jump);
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_press_edges_ignore_repeat() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Backspace, true);
        assert!(keyboard.was_just_pressed(KeyCode::Backspace));

        keyboard.end_frame();
        keyboard.handle_key(KeyCode::Backspace, true);
        assert!(!keyboard.was_just_pressed(KeyCode::Backspace));
        assert!(keyboard.is_held(KeyCode::Backspace));

        keyboard.handle_key(KeyCode::Backspace, false);
        keyboard.handle_key(KeyCode::Backspace, true);
        assert!(keyboard.was_just_pressed(KeyCode::Backspace));
    }

    #[test]
    fn test_selected_slot() {
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.selected_slot(), None);
        keyboard.handle_key(KeyCode::Digit3, true);
        assert_eq!(keyboard.selected_slot(), Some(3));
        keyboard.end_frame();
        assert_eq!(keyboard.selected_slot(), None);
    }
}
