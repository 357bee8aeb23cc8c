//! Motion tuning parameters and the derived gravity model.
//!
//! All tunables are designer-facing. The two gravities are derived from the
//! jump-shape parameters (apex height, time to peak, time to descent) and are
//! recomputed eagerly whenever one of those parameters is written, so a read
//! mid-tick can never observe a stale value.

use bevy::prelude::*;

/// Tuning parameters for a platformer motion controller.
///
/// Fields are private and mutated only through setters that enforce the
/// validity constraints: every tunable rejects negative and non-finite
/// writes, and the two jump-time parameters additionally reject zero (a zero
/// time would make the derived gravity infinite). A rejected write is a
/// silent no-op that retains the previous value; callers that need to detect
/// rejection re-read the field.
///
/// # Gravity model
///
/// The jump arc is specified by how high it goes and how long it takes, not
/// by an acceleration. The accelerations fall out in closed form:
///
/// - `jump_gravity = 2 * jump_height / jump_time_to_peak^2`
/// - `fall_gravity = 2 * jump_height / jump_time_to_descent^2`
///
/// Using a shorter descent time than peak time gives the classic snappy
/// rise / floaty fall asymmetry.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct MotionConfig {
    /// Horizontal cruise speed (units/second).
    speed: f32,
    /// Magnitude clamp applied to the full 2D velocity before commit.
    max_velocity: f32,

    /// Target apex height of a full jump (world units).
    jump_height: f32,
    /// Seconds of upward travel to reach the apex.
    jump_time_to_peak: f32,
    /// Seconds of downward travel from apex back to the takeoff height.
    jump_time_to_descent: f32,
    /// Window during which a press before landing still fires on landing.
    jump_buffer_time: f32,
    /// Window after leaving the ground during which a press still counts as grounded.
    jump_coyote_time: f32,

    // Derived from the three jump-shape parameters above.
    jump_gravity: f32,
    fall_gravity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let mut config = Self {
            speed: 10.0,
            max_velocity: 4200.0,
            jump_height: 49.0,
            jump_time_to_peak: 1.0,
            jump_time_to_descent: 1.0,
            jump_buffer_time: 0.1,
            jump_coyote_time: 0.1,
            jump_gravity: 0.0,
            fall_gravity: 0.0,
        };
        config.recompute_gravities();
        config
    }
}

impl MotionConfig {
    /// Create a config with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    fn recompute_gravities(&mut self) {
        self.jump_gravity = 2.0 * self.jump_height / (self.jump_time_to_peak * self.jump_time_to_peak);
        self.fall_gravity =
            2.0 * self.jump_height / (self.jump_time_to_descent * self.jump_time_to_descent);
    }

    /// Horizontal cruise speed.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the horizontal cruise speed. Negative values are rejected.
    pub fn set_speed(&mut self, val: f32) {
        if val.is_finite() && val >= 0.0 {
            self.speed = val;
        }
    }

    /// Velocity magnitude clamp.
    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    /// Set the velocity magnitude clamp. Negative values are rejected.
    pub fn set_max_velocity(&mut self, val: f32) {
        if val.is_finite() && val >= 0.0 {
            self.max_velocity = val;
        }
    }

    /// Target apex height of a full jump.
    pub fn jump_height(&self) -> f32 {
        self.jump_height
    }

    /// Set the jump apex height. Negative values are rejected.
    /// Recomputes both derived gravities.
    pub fn set_jump_height(&mut self, height: f32) {
        if height.is_finite() && height >= 0.0 {
            self.jump_height = height;
            self.recompute_gravities();
        }
    }

    /// Seconds of upward travel to the apex.
    pub fn jump_time_to_peak(&self) -> f32 {
        self.jump_time_to_peak
    }

    /// Set the time to the apex. Values that are not strictly positive are
    /// rejected. Recomputes both derived gravities.
    pub fn set_jump_time_to_peak(&mut self, val: f32) {
        if val.is_finite() && val > 0.0 {
            self.jump_time_to_peak = val;
            self.recompute_gravities();
        }
    }

    /// Seconds of downward travel from the apex.
    pub fn jump_time_to_descent(&self) -> f32 {
        self.jump_time_to_descent
    }

    /// Set the descent time. Values that are not strictly positive are
    /// rejected. Recomputes both derived gravities.
    pub fn set_jump_time_to_descent(&mut self, val: f32) {
        if val.is_finite() && val > 0.0 {
            self.jump_time_to_descent = val;
            self.recompute_gravities();
        }
    }

    /// Jump buffer window in seconds.
    pub fn jump_buffer_time(&self) -> f32 {
        self.jump_buffer_time
    }

    /// Set the jump buffer window. Negative values are rejected.
    pub fn set_jump_buffer_time(&mut self, val: f32) {
        if val.is_finite() && val >= 0.0 {
            self.jump_buffer_time = val;
        }
    }

    /// Coyote window in seconds.
    pub fn jump_coyote_time(&self) -> f32 {
        self.jump_coyote_time
    }

    /// Set the coyote window. Negative values are rejected.
    pub fn set_jump_coyote_time(&mut self, val: f32) {
        if val.is_finite() && val >= 0.0 {
            self.jump_coyote_time = val;
        }
    }

    /// Gravity applied while rising (derived, read-only).
    pub fn jump_gravity(&self) -> f32 {
        self.jump_gravity
    }

    /// Gravity applied while falling (derived, read-only).
    pub fn fall_gravity(&self) -> f32 {
        self.fall_gravity
    }

    /// Select the gravity for the given vertical velocity.
    ///
    /// A strictly positive vertical velocity means the body is rising and
    /// decelerates under `jump_gravity`; anything else (including exactly
    /// zero, e.g. at the apex) accelerates downward under `fall_gravity`.
    pub fn gravity_for(&self, vertical_velocity: f32) -> f32 {
        if vertical_velocity > 0.0 {
            self.jump_gravity
        } else {
            self.fall_gravity
        }
    }

    /// Initial upward speed of a jump.
    ///
    /// The closed-form speed that, decelerating under `jump_gravity`, reaches
    /// exactly `jump_height` after `jump_time_to_peak` seconds.
    pub fn initial_jump_speed(&self) -> f32 {
        self.jump_gravity * self.jump_time_to_peak
    }

    /// Builder: set the horizontal cruise speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.set_speed(speed);
        self
    }

    /// Builder: set the velocity magnitude clamp.
    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.set_max_velocity(max_velocity);
        self
    }

    /// Builder: set the full jump arc shape.
    pub fn with_jump_arc(mut self, height: f32, time_to_peak: f32, time_to_descent: f32) -> Self {
        self.set_jump_height(height);
        self.set_jump_time_to_peak(time_to_peak);
        self.set_jump_time_to_descent(time_to_descent);
        self
    }

    /// Builder: set the jump buffer window.
    pub fn with_jump_buffer_time(mut self, time: f32) -> Self {
        self.set_jump_buffer_time(time);
        self
    }

    /// Builder: set the coyote window.
    pub fn with_jump_coyote_time(mut self, time: f32) -> Self {
        self.set_jump_coyote_time(time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gravities_match_closed_form() {
        let config = MotionConfig::default();
        // 2 * 49 / 1^2 = 98 on both sides for the default arc.
        assert_eq!(config.jump_gravity(), 98.0);
        assert_eq!(config.fall_gravity(), 98.0);
    }

    #[test]
    fn gravities_recompute_on_every_shape_write() {
        let mut config = MotionConfig::default();

        config.set_jump_height(32.0);
        assert_eq!(config.jump_gravity(), 64.0);
        assert_eq!(config.fall_gravity(), 64.0);

        config.set_jump_time_to_peak(0.5);
        assert_eq!(config.jump_gravity(), 2.0 * 32.0 / 0.25);
        assert_eq!(config.fall_gravity(), 64.0);

        config.set_jump_time_to_descent(0.25);
        assert_eq!(config.fall_gravity(), 2.0 * 32.0 / 0.0625);
    }

    #[test]
    fn negative_writes_are_rejected() {
        let mut config = MotionConfig::default();

        config.set_speed(-1.0);
        config.set_max_velocity(-1.0);
        config.set_jump_height(-1.0);
        config.set_jump_time_to_peak(-1.0);
        config.set_jump_time_to_descent(-1.0);
        config.set_jump_buffer_time(-1.0);
        config.set_jump_coyote_time(-1.0);

        let default = MotionConfig::default();
        assert_eq!(config.speed(), default.speed());
        assert_eq!(config.max_velocity(), default.max_velocity());
        assert_eq!(config.jump_height(), default.jump_height());
        assert_eq!(config.jump_time_to_peak(), default.jump_time_to_peak());
        assert_eq!(config.jump_time_to_descent(), default.jump_time_to_descent());
        assert_eq!(config.jump_buffer_time(), default.jump_buffer_time());
        assert_eq!(config.jump_coyote_time(), default.jump_coyote_time());
        assert_eq!(config.jump_gravity(), default.jump_gravity());
    }

    #[test]
    fn zero_jump_times_are_rejected() {
        let mut config = MotionConfig::default();

        config.set_jump_time_to_peak(0.0);
        config.set_jump_time_to_descent(0.0);

        assert_eq!(config.jump_time_to_peak(), 1.0);
        assert_eq!(config.jump_time_to_descent(), 1.0);
        assert!(config.jump_gravity().is_finite());
        assert!(config.fall_gravity().is_finite());
    }

    #[test]
    fn non_finite_writes_are_rejected() {
        let mut config = MotionConfig::default();

        config.set_speed(f32::NAN);
        config.set_max_velocity(f32::INFINITY);
        config.set_jump_height(f32::NAN);

        assert_eq!(config.speed(), 10.0);
        assert_eq!(config.max_velocity(), 4200.0);
        assert_eq!(config.jump_height(), 49.0);
    }

    #[test]
    fn zero_jump_height_is_allowed() {
        let mut config = MotionConfig::default();
        config.set_jump_height(0.0);
        assert_eq!(config.jump_gravity(), 0.0);
        assert_eq!(config.fall_gravity(), 0.0);
        assert_eq!(config.initial_jump_speed(), 0.0);
    }

    #[test]
    fn gravity_selector_uses_sign_of_vertical_velocity() {
        let config = MotionConfig::default().with_jump_arc(49.0, 1.0, 0.5);

        // Rising decelerates under jump gravity.
        assert_eq!(config.gravity_for(10.0), config.jump_gravity());
        // Falling, and the apex itself, use fall gravity.
        assert_eq!(config.gravity_for(0.0), config.fall_gravity());
        assert_eq!(config.gravity_for(-10.0), config.fall_gravity());
    }

    #[test]
    fn initial_jump_speed_reaches_the_apex() {
        let config = MotionConfig::default();
        // v0 = g * t_peak; for the default arc v0 = 98.
        assert_eq!(config.initial_jump_speed(), 98.0);
        // Kinematics check: v0 * t - g * t^2 / 2 == jump_height.
        let v0 = config.initial_jump_speed();
        let g = config.jump_gravity();
        let t = config.jump_time_to_peak();
        let apex = v0 * t - 0.5 * g * t * t;
        assert!((apex - config.jump_height()).abs() < 1e-4);
    }

    #[test]
    fn builders_route_through_validation() {
        let config = MotionConfig::default()
            .with_speed(-5.0)
            .with_max_velocity(300.0)
            .with_jump_arc(20.0, 0.4, 0.0);

        assert_eq!(config.speed(), 10.0); // rejected, default retained
        assert_eq!(config.max_velocity(), 300.0);
        assert_eq!(config.jump_height(), 20.0);
        assert_eq!(config.jump_time_to_peak(), 0.4);
        assert_eq!(config.jump_time_to_descent(), 1.0); // zero rejected
    }
}
