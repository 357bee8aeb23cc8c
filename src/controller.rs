//! Motion controller state and per-tick logic.
//!
//! This is the core of the crate: the jump timing state machine (press
//! buffering and coyote time), the facing state, and the velocity
//! integration math. Everything here is data-in/data-out over plain values,
//! so the same logic drives the plugin's backend-generic systems and can be
//! ticked by hand against any body representation.

use bevy::prelude::*;

use crate::config::MotionConfig;
use crate::MotionHostSettings;

/// Per-body motion controller state.
///
/// Owns the two decaying timers of the jump state machine, the facing
/// direction, and the nominal tick duration captured at construction. The
/// timers start at `f32::INFINITY`, meaning "never": no press has been
/// recorded and the body has not yet been observed on the floor, so neither
/// the buffer nor the coyote window is open until the real events happen.
///
/// The timers and facing are mutated only by this controller's own entry
/// points, on the single thread that drives the tick.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct MotionController {
    /// Seconds since the jump input was last pressed.
    time_since_jump_pressed: f32,
    /// Seconds since the body was last observed on the floor.
    time_since_grounded: f32,
    /// Last accepted horizontal command, in `{-1, 0, 1}`.
    facing_direction: i32,
    /// Parity of flips not yet applied to the presentation transform.
    flip_pending: bool,
    /// Floor flag observed at the most recent timing update.
    grounded: bool,
    /// Nominal physics step the host was configured with at construction.
    fixed_tick_duration: f32,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl MotionController {
    /// Create a controller for a host ticking at the given nominal rate.
    ///
    /// The rate is used to normalize velocities when the actual tick delta
    /// deviates from the configured step (sub/super-stepping).
    ///
    /// # Panics
    ///
    /// Panics if `physics_ticks_per_second` is not positive and finite.
    pub fn new(physics_ticks_per_second: f32) -> Self {
        assert!(
            physics_ticks_per_second.is_finite() && physics_ticks_per_second > 0.0,
            "physics tick rate must be positive and finite, got: {physics_ticks_per_second}"
        );
        Self {
            time_since_jump_pressed: f32::INFINITY,
            time_since_grounded: f32::INFINITY,
            facing_direction: 0,
            flip_pending: false,
            grounded: false,
            fixed_tick_duration: 1.0 / physics_ticks_per_second,
        }
    }

    /// Create a controller from the host settings resource.
    pub fn from_settings(settings: &MotionHostSettings) -> Self {
        Self::new(settings.physics_ticks_per_second)
    }

    /// Seconds since the jump input was last pressed.
    pub fn time_since_jump_pressed(&self) -> f32 {
        self.time_since_jump_pressed
    }

    /// Seconds since the body was last observed on the floor.
    pub fn time_since_grounded(&self) -> f32 {
        self.time_since_grounded
    }

    /// Last accepted horizontal command.
    pub fn facing_direction(&self) -> i32 {
        self.facing_direction
    }

    /// Whether the body was on the floor at the most recent timing update.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Nominal physics step captured at construction.
    pub fn fixed_tick_duration(&self) -> f32 {
        self.fixed_tick_duration
    }

    /// Accept a horizontal command.
    ///
    /// Only `-1`, `0` and `1` are accepted; anything else is a silent no-op.
    /// An exact sign inversion between two nonzero commands toggles a pending
    /// flip of the presentation transform (see [`take_pending_flip`]). Zero
    /// suppresses horizontal motion without counting as a side: it neither
    /// triggers a flip nor arms one.
    ///
    /// [`take_pending_flip`]: MotionController::take_pending_flip
    pub fn set_direction(&mut self, direction: i32) {
        if -2 < direction && direction < 2 {
            if direction != 0 && direction == -self.facing_direction {
                self.flip_pending = !self.flip_pending;
            }
            self.facing_direction = direction;
        }
    }

    /// Take the pending flip parity, resetting it.
    ///
    /// Each accepted inversion multiplies the presentation scale by `-1`, so
    /// two inversions between ticks cancel; the parity captures exactly that.
    /// The plugin's flip system calls this once per tick; hosts driving the
    /// controller manually apply the flip to their own presentation state.
    pub fn take_pending_flip(&mut self) -> bool {
        std::mem::take(&mut self.flip_pending)
    }

    /// Attempt a jump for a genuine new press event.
    ///
    /// Always resets the press timer, so an ineligible press stays "recent"
    /// for the buffer window and may still fire on a landing within
    /// `jump_buffer_time`. Returns the velocity to commit when the jump is
    /// eligible (grounded, or airborne within the coyote window): the
    /// vertical component is overwritten with the initial jump speed and the
    /// horizontal component of `velocity` is left untouched. An ineligible
    /// attempt returns `None` and changes nothing beyond the timer reset.
    pub fn try_jump_from_input(
        &mut self,
        config: &MotionConfig,
        grounded: bool,
        velocity: Vec2,
    ) -> Option<Vec2> {
        let jumped = self.jump_velocity_if_eligible(config, grounded, velocity);
        self.time_since_jump_pressed = 0.0;
        jumped
    }

    /// Fire the buffered-landing jump variant.
    ///
    /// Same eligibility and impulse as a genuine press, but deliberately does
    /// not touch the press timer: the buffered press was already consumed by
    /// the landing that triggered this call.
    pub(crate) fn fire_buffered_jump(
        &self,
        config: &MotionConfig,
        grounded: bool,
        velocity: Vec2,
    ) -> Option<Vec2> {
        self.jump_velocity_if_eligible(config, grounded, velocity)
    }

    fn jump_velocity_if_eligible(
        &self,
        config: &MotionConfig,
        grounded: bool,
        velocity: Vec2,
    ) -> Option<Vec2> {
        if grounded || self.time_since_grounded < config.jump_coyote_time() {
            Some(Vec2::new(velocity.x, config.initial_jump_speed()))
        } else {
            None
        }
    }

    /// Advance the jump timing state machine by one tick.
    ///
    /// Grounded ticks zero the grounded timer and report whether a buffered
    /// press is still pending; airborne ticks advance both timers. Returns
    /// `true` when the caller should fire the buffered jump variant.
    pub(crate) fn advance_timers(&mut self, grounded: bool, buffer_time: f32, delta: f32) -> bool {
        self.grounded = grounded;
        if grounded {
            self.time_since_grounded = 0.0;
            self.time_since_jump_pressed < buffer_time
        } else {
            self.time_since_grounded += delta;
            self.time_since_jump_pressed += delta;
            false
        }
    }

    /// Compute the velocity to commit for this tick.
    ///
    /// Horizontal is `speed * facing_direction`; vertical is the body's
    /// current vertical velocity minus the selected gravity contribution for
    /// the tick. The whole vector is then scaled by the ratio of the actual
    /// tick delta to the nominal step, and clamped to `max_velocity`
    /// preserving direction (a zero vector passes through unchanged).
    pub fn tick_velocity(&self, config: &MotionConfig, velocity: Vec2, delta: f32) -> Vec2 {
        let raw = Vec2::new(
            config.speed() * self.facing_direction as f32,
            velocity.y - config.gravity_for(velocity.y) * delta,
        );
        (raw * (delta / self.fixed_tick_duration)).clamp_length_max(config.max_velocity())
    }

    /// Run one full tick: timing update, buffered jump, velocity integration.
    ///
    /// Takes the body's live floor flag and current velocity, and returns the
    /// velocity to commit before position integration. This is the manual
    /// equivalent of the plugin's per-tick system chain for hosts that drive
    /// the controller against their own body representation.
    pub fn tick(
        &mut self,
        config: &MotionConfig,
        grounded: bool,
        velocity: Vec2,
        delta: f32,
    ) -> Vec2 {
        let velocity = if self.advance_timers(grounded, config.jump_buffer_time(), delta) {
            self.fire_buffered_jump(config, grounded, velocity)
                .unwrap_or(velocity)
        } else {
            velocity
        };
        self.tick_velocity(config, velocity, delta)
    }
}
