//! Physics body abstraction.
//!
//! This module defines the trait that physics backends must implement
//! to work with the motion controller. This allows easy swapping
//! between physics engines (Rapier2D, XPBD, custom, etc.).

use bevy::prelude::*;

/// Trait for physics backend implementations.
///
/// Implement this trait to integrate a physics engine with the motion
/// controller. The backend is the controller's only view of the body:
/// velocity access, the floor contact flag, and collision-aware position
/// integration all go through it.
///
/// The controller never owns the body's lifetime. The body association is a
/// precondition: implementations must fail fast (panic) when the required
/// body components are missing on a controlled entity, rather than silently
/// skipping physics updates. The one exception is [`is_on_floor`], which may
/// report `false` for state a physics engine only produces after the first
/// integration step.
///
/// # Example
///
/// For an example implementation, see the `rapier` module's `Rapier2dBackend`
/// which implements this trait for Bevy Rapier2D.
///
/// [`is_on_floor`]: MotionPhysicsBackend::is_on_floor
pub trait MotionPhysicsBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// Get the current velocity of a controlled body.
    fn get_velocity(world: &World, entity: Entity) -> Vec2;

    /// Set the velocity of a controlled body.
    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2);

    /// Whether the body is currently in contact with the floor.
    fn is_on_floor(world: &World, entity: Entity) -> bool;

    /// Perform collision-aware position integration using the velocity
    /// that was just committed with [`set_velocity`].
    ///
    /// Called once per tick, after the integrator has written the final
    /// velocity for the step.
    ///
    /// [`set_velocity`]: MotionPhysicsBackend::set_velocity
    fn move_and_slide(world: &mut World, entity: Entity);

    /// Get the elapsed time of the current fixed timestep.
    fn get_fixed_timestep(world: &World) -> f32 {
        world
            .get_resource::<Time<Fixed>>()
            .map(|t| t.delta_secs())
            .filter(|&d| d > 0.0)
            .unwrap_or(1.0 / 60.0)
    }
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}
