//! Per-frame input snapshot.
//!
//! The host adapter records this frame's events; windows only ask what
//! happened since the last `begin_frame`. Nothing is held across frames
//! except the cursor position.

use crate::layout::{Rect, Vec2};

/// Mouse buttons the host forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button. Dismisses the achievement popup.
    Left,
    /// Secondary button. Windows ignore it.
    Right,
}

/// Keys the windows react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Dismisses the popup and clears the guide search.
    Escape,
    /// Deletes the last search character.
    Backspace,
}

/// Everything the windows need to know about one frame of input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Cursor position in render space.
    pub mouse: Vec2,
    /// Characters typed this frame, in order.
    pub text_input: String,
    clicks: Vec<MouseButton>,
    keys: Vec<Key>,
}

impl InputState {
    /// Empty snapshot with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets this frame's clicks, keys and text.
    pub fn begin_frame(&mut self) {
        self.clicks.clear();
        self.keys.clear();
        self.text_input.clear();
    }

    /// Moves the cursor.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse = Vec2::new(x, y);
    }

    /// Records a button press at the current cursor position.
    pub fn click(&mut self, button: MouseButton) {
        self.clicks.push(button);
    }

    /// Records a key press. Repeats within a frame count once.
    pub fn press_key(&mut self, key: Key) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    /// Appends typed characters.
    pub fn type_text(&mut self, text: &str) {
        self.text_input.push_str(text);
    }

    /// Whether `button` was pressed this frame.
    #[must_use]
    pub fn clicked(&self, button: MouseButton) -> bool {
        self.clicks.contains(&button)
    }

    /// Whether `button` was pressed this frame with the cursor over `bounds`.
    #[must_use]
    pub fn clicked_inside(&self, button: MouseButton, bounds: Rect) -> bool {
        self.clicked(button) && bounds.contains(self.mouse)
    }

    /// Whether `key` was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_lasts_one_frame() {
        let mut input = InputState::new();
        input.click(MouseButton::Left);
        assert!(input.clicked(MouseButton::Left));
        assert!(!input.clicked(MouseButton::Right));

        input.begin_frame();
        assert!(!input.clicked(MouseButton::Left));
    }

    #[test]
    fn test_clicked_inside_uses_cursor() {
        let mut input = InputState::new();
        let bounds = Rect::new(10.0, 10.0, 20.0, 20.0);

        input.set_mouse_pos(15.0, 15.0);
        input.click(MouseButton::Left);
        assert!(input.clicked_inside(MouseButton::Left, bounds));
        assert!(!input.clicked_inside(MouseButton::Right, bounds));

        input.set_mouse_pos(50.0, 15.0);
        assert!(!input.clicked_inside(MouseButton::Left, bounds));
    }

    #[test]
    fn test_keys_and_text_reset_each_frame() {
        let mut input = InputState::new();
        input.press_key(Key::Escape);
        input.press_key(Key::Escape);
        input.type_text("ab");
        input.type_text("c");
        assert!(input.key_pressed(Key::Escape));
        assert_eq!(input.text_input, "abc");

        input.begin_frame();
        assert!(!input.key_pressed(Key::Escape));
        assert!(input.text_input.is_empty());
        assert_eq!(input.mouse, Vec2::ZERO);
    }
}
