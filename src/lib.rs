//! # `msg_platformer_motion`
//!
//! A tick-driven 2D platformer motion controller with physics backend abstraction.
//!
//! This crate provides a deterministic, tuneable motion controller that:
//! - Drives horizontal locomotion with facing flips of the presentation transform
//! - Shapes the jump arc from designer parameters (apex height, time to peak, time to descent)
//! - Applies asymmetric rise/fall gravity for a snappy rise and floaty fall
//! - Buffers jump presses so a slightly-early press still fires on landing
//! - Honors coyote time after walking off a ledge
//! - Abstracts the physics body for easy swapping (Rapier2D included)
//!
//! ## Architecture
//!
//! The controller is a **velocity overwrite** design where, each fixed tick:
//! 1. Decoded commands land in [`MotionIntent`] (direction, jump press)
//! 2. The jump timing state machine updates its timers and may fire a jump impulse
//! 3. The velocity integrator combines horizontal command, gravity contribution
//!    and a magnitude clamp, commits the result to the body, and requests
//!    collision-aware integration (`move_and_slide`)
//!
//! ## Usage
//!
//! ```rust
//! use bevy::prelude::*;
//! use msg_platformer_motion::prelude::*;
//!
//! // Tuning for a floaty double-length descent
//! let config = MotionConfig::default()
//!     .with_speed(120.0)
//!     .with_jump_arc(48.0, 0.3, 0.6);
//!
//! // Controller state for a 60 Hz host
//! let controller = MotionController::new(60.0);
//!
//! // These are spawned together with the backend's body components
//! let intent = MotionIntent::new();
//! ```
//!
//! [`MotionIntent`]: intent::MotionIntent

use bevy::prelude::*;

pub mod backend;
pub mod config;
pub mod controller;
pub mod intent;
pub mod state;
pub mod systems;

#[cfg(feature = "rapier2d")]
pub mod rapier;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::backend::MotionPhysicsBackend;
    pub use crate::config::MotionConfig;
    pub use crate::controller::MotionController;
    pub use crate::intent::MotionIntent;
    pub use crate::state::{Airborne, Grounded};
    pub use crate::{MotionHostSettings, PlatformerMotionPlugin};

    #[cfg(feature = "rapier2d")]
    pub use crate::rapier::{Rapier2dBackend, Rapier2dMotionBundle};
}

/// Host context the controller would otherwise query from engine globals.
///
/// Injected explicitly: `editor_mode` gates the whole system chain (an
/// editor preview must not run gameplay motion), and
/// `physics_ticks_per_second` is the nominal rate new controllers are
/// constructed against (see [`MotionController::from_settings`]).
///
/// [`MotionController::from_settings`]: controller::MotionController::from_settings
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct MotionHostSettings {
    /// When true, the plugin's systems do not run.
    pub editor_mode: bool,
    /// Nominal fixed-tick rate of the host scheduler.
    pub physics_ticks_per_second: f32,
}

impl Default for MotionHostSettings {
    fn default() -> Self {
        Self {
            editor_mode: false,
            physics_ticks_per_second: 60.0,
        }
    }
}

/// Main plugin for the platformer motion controller.
///
/// This plugin is generic over a physics backend `B` which provides the
/// body operations (velocity access, floor contact, move-and-slide).
///
/// # Type Parameters
/// - `B`: The physics backend implementation (e.g., `Rapier2dBackend`)
///
/// # Examples
///
/// With Rapier2D backend:
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_rapier2d::prelude::*;
/// use msg_platformer_motion::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
///     .add_plugins(PlatformerMotionPlugin::<Rapier2dBackend>::default())
///     .run();
/// ```
pub struct PlatformerMotionPlugin<B: backend::MotionPhysicsBackend> {
    _marker: std::marker::PhantomData<B>,
}

impl<B: backend::MotionPhysicsBackend> Default for PlatformerMotionPlugin<B> {
    fn default() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<B: backend::MotionPhysicsBackend> Plugin for PlatformerMotionPlugin<B> {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionHostSettings>();

        // Register core types
        app.register_type::<MotionHostSettings>();
        app.register_type::<config::MotionConfig>();
        app.register_type::<controller::MotionController>();
        app.register_type::<intent::MotionIntent>();
        app.register_type::<state::Grounded>();
        app.register_type::<state::Airborne>();

        // Add the physics backend plugin
        app.add_plugins(B::plugin());

        // Per-tick control flow in FixedUpdate: commands first, then the
        // timing state machine, then velocity integration and presentation.
        app.add_systems(
            FixedUpdate,
            (
                systems::apply_direction_intents,
                systems::apply_jump_presses::<B>,
                systems::update_jump_timing::<B>,
                systems::integrate_velocity::<B>,
                systems::sync_facing_flip,
                systems::sync_state_markers,
            )
                .chain()
                .run_if(systems::motion_enabled),
        );
    }
}
