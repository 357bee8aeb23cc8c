//! Rapier2D physics backend implementation.
//!
//! This module provides the physics backend for Bevy Rapier2D, built on its
//! kinematic character controller. Enable with the `rapier2d` feature.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::backend::{MotionPhysicsBackend, NoOpBackendPlugin};

/// Rapier2D physics backend for the motion controller.
///
/// The body is a `KinematicPositionBased` rigid body: `move_and_slide`
/// feeds the committed velocity into rapier's
/// [`KinematicCharacterController`] as the desired translation for the
/// step, and `is_on_floor` reads the `grounded` flag from the resolved
/// [`KinematicCharacterControllerOutput`].
pub struct Rapier2dBackend;

impl MotionPhysicsBackend for Rapier2dBackend {
    fn plugin() -> impl Plugin {
        NoOpBackendPlugin
    }

    fn get_velocity(world: &World, entity: Entity) -> Vec2 {
        world
            .get::<Velocity>(entity)
            .expect("motion-controlled body must have a Velocity component")
            .linvel
    }

    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2) {
        world
            .get_mut::<Velocity>(entity)
            .expect("motion-controlled body must have a Velocity component")
            .linvel = velocity;
    }

    fn is_on_floor(world: &World, entity: Entity) -> bool {
        // The output component only exists once the first controller move
        // has been resolved; until then the body counts as airborne.
        world
            .get::<KinematicCharacterControllerOutput>(entity)
            .map(|output| output.grounded)
            .unwrap_or(false)
    }

    fn move_and_slide(world: &mut World, entity: Entity) {
        let delta = Self::get_fixed_timestep(world);
        let velocity = Self::get_velocity(world, entity);
        world
            .get_mut::<KinematicCharacterController>(entity)
            .expect("motion-controlled body must have a KinematicCharacterController")
            .translation = Some(velocity * delta);
    }
}

/// Bundle of rapier components for a motion-controlled body.
///
/// Add a `Collider` alongside; the collider shape stays the host's choice.
#[derive(Bundle)]
pub struct Rapier2dMotionBundle {
    /// Position-based kinematic body: the controller owns the velocity.
    pub rigid_body: RigidBody,
    /// Rapier's collide-and-slide mover.
    pub character_controller: KinematicCharacterController,
    /// Velocity storage read and written by the motion systems.
    pub velocity: Velocity,
}

impl Default for Rapier2dMotionBundle {
    fn default() -> Self {
        Self {
            rigid_body: RigidBody::KinematicPositionBased,
            character_controller: KinematicCharacterController::default(),
            velocity: Velocity::zero(),
        }
    }
}

impl Rapier2dMotionBundle {
    /// Create the bundle with default character-controller settings.
    pub fn new() -> Self {
        Self::default()
    }
}
