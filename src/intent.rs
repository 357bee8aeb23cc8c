//! Movement intent component.
//!
//! The intent carries the already-decoded input commands: a horizontal
//! direction and the jump action state. You handle input detection in your
//! code (keyboard, gamepad, touch, AI, network), the controller systems
//! handle the motion logic.

use bevy::prelude::*;

/// Decoded movement commands for a motion-controlled body.
///
/// The plugin's systems forward the direction to the controller every tick
/// and turn the rising edge of `jump_pressed` into a genuine jump press.
/// This component is optional: hosts that call
/// [`MotionController`](crate::controller::MotionController) entry points
/// directly can omit it.
///
/// # Example
///
/// ```rust
/// use msg_platformer_motion::prelude::*;
///
/// let mut intent = MotionIntent::new();
/// intent.set_direction(1);
/// assert_eq!(intent.direction(), 1);
///
/// // Out-of-range commands are silently ignored.
/// intent.set_direction(3);
/// assert_eq!(intent.direction(), 1);
///
/// // Any source of a boolean works for jumping:
/// intent.set_jump_pressed(true);
/// assert!(intent.is_jump_pressed());
/// ```
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct MotionIntent {
    /// Commanded horizontal direction, in `{-1, 0, 1}`.
    direction: i32,
    /// Whether the jump action is currently active.
    jump_pressed: bool,
    /// Previous tick's jump state, for rising-edge detection.
    jump_pressed_prev: bool,
}

impl MotionIntent {
    /// Create a new neutral intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commanded horizontal direction.
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Set the horizontal direction command.
    ///
    /// Only `-1`, `0` and `1` are accepted; anything else is a silent no-op.
    pub fn set_direction(&mut self, direction: i32) {
        if -2 < direction && direction < 2 {
            self.direction = direction;
        }
    }

    /// Set the jump action state.
    ///
    /// Call this with the current state whenever input changes; the plugin
    /// detects the `false -> true` transition and performs a genuine press
    /// attempt (which also arms the jump buffer). Holding the button does
    /// not retrigger.
    pub fn set_jump_pressed(&mut self, pressed: bool) {
        self.jump_pressed = pressed;
    }

    /// Whether the jump action is currently active.
    pub fn is_jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    /// Consume the rising edge of the jump state, if any.
    ///
    /// Returns `true` exactly once per `false -> true` transition.
    pub(crate) fn take_press_edge(&mut self) -> bool {
        let edge = self.jump_pressed && !self.jump_pressed_prev;
        self.jump_pressed_prev = self.jump_pressed;
        edge
    }
}
