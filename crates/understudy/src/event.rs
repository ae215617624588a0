//! Input events delivered to touch and key listeners.

/// Touch action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TouchAction {
    /// A finger went down.
    Down,
    /// A finger moved while down.
    Move,
    /// A finger lifted.
    Up,
    /// The gesture was aborted.
    Cancel,
}

/// A single-pointer touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub action: TouchAction,
    /// Horizontal position, in view coordinates.
    pub x: f32,
    /// Vertical position, in view coordinates.
    pub y: f32,
}

impl TouchEvent {
    /// Construct a touch event.
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    /// A finger-down event at a position.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    /// A finger-up event at a position.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }
}

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

/// Key action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyAction {
    /// Key pressed.
    Down,
    /// Key released.
    Up,
}

/// A key event. `code` is the platform key code, passed through untouched.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    /// Press or release.
    pub action: KeyAction,
    /// Platform key code.
    pub code: u32,
    /// Modifier state.
    pub mods: Mods,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn down(code: u32) -> Self {
        Self {
            action: KeyAction::Down,
            code,
            mods: Mods::default(),
        }
    }

    /// A key release with no modifiers.
    pub fn up(code: u32) -> Self {
        Self {
            action: KeyAction::Up,
            code,
            mods: Mods::default(),
        }
    }

    /// Replace the modifier state.
    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.mods = mods;
        self
    }
}
