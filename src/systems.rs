//! Core controller systems.
//!
//! These systems implement the per-tick control flow: command handling,
//! the jump timing update, and velocity integration. The ones that touch
//! the body are generic over the physics backend to allow different
//! physics engines to be used.

use bevy::prelude::*;

use crate::backend::MotionPhysicsBackend;
use crate::config::MotionConfig;
use crate::controller::MotionController;
use crate::intent::MotionIntent;
use crate::state::{Airborne, Grounded};
use crate::MotionHostSettings;

/// Run condition: the host is not in editor mode.
pub fn motion_enabled(settings: Res<MotionHostSettings>) -> bool {
    !settings.editor_mode
}

/// Forward the commanded direction from the intent to the controller.
///
/// Runs every tick; the controller only reacts to changes (a repeat of the
/// current facing is a no-op, an exact inversion arms the flip).
pub fn apply_direction_intents(mut query: Query<(&MotionIntent, &mut MotionController)>) {
    for (intent, mut controller) in &mut query {
        controller.set_direction(intent.direction());
    }
}

/// Turn rising edges of the jump intent into genuine press attempts.
///
/// A press attempt always resets the press timer (arming the jump buffer);
/// when eligible it also overwrites the body's vertical velocity with the
/// initial jump speed.
pub fn apply_jump_presses<B: MotionPhysicsBackend>(world: &mut World) {
    let pressed: Vec<Entity> = world
        .query::<(Entity, &mut MotionIntent)>()
        .iter_mut(world)
        .filter_map(|(entity, mut intent)| intent.take_press_edge().then_some(entity))
        .collect();

    for entity in pressed {
        let Some(config) = world.get::<MotionConfig>(entity).copied() else {
            continue;
        };
        let grounded = B::is_on_floor(world, entity);
        let velocity = B::get_velocity(world, entity);
        let Some(mut controller) = world.get_mut::<MotionController>(entity) else {
            continue;
        };
        let jumped = controller.try_jump_from_input(&config, grounded, velocity);
        if let Some(new_velocity) = jumped {
            B::set_velocity(world, entity, new_velocity);
            debug!("jump press fired, vertical velocity set to {}", new_velocity.y);
        }
    }
}

/// Advance the jump timing state machine and fire buffered landings.
///
/// Grounded ticks zero the grounded timer and fire the non-resetting jump
/// variant while a buffered press is still pending; airborne ticks advance
/// both timers by the tick's elapsed time.
pub fn update_jump_timing<B: MotionPhysicsBackend>(world: &mut World) {
    let delta = B::get_fixed_timestep(world);

    let entities: Vec<(Entity, MotionConfig)> = world
        .query_filtered::<(Entity, &MotionConfig), With<MotionController>>()
        .iter(world)
        .map(|(entity, config)| (entity, *config))
        .collect();

    for (entity, config) in entities {
        let grounded = B::is_on_floor(world, entity);
        let velocity = B::get_velocity(world, entity);
        let Some(mut controller) = world.get_mut::<MotionController>(entity) else {
            continue;
        };
        if !controller.advance_timers(grounded, config.jump_buffer_time(), delta) {
            continue;
        }
        let fired = controller.fire_buffered_jump(&config, grounded, velocity);
        if let Some(new_velocity) = fired {
            B::set_velocity(world, entity, new_velocity);
            debug!("buffered jump fired on landing, vertical velocity set to {}", new_velocity.y);
        }
    }
}

/// Compute, clamp and commit this tick's velocity, then move the body.
///
/// Runs after the timing update. The committed vector is handed to the
/// backend's `move_and_slide` so collision response is applied externally.
pub fn integrate_velocity<B: MotionPhysicsBackend>(world: &mut World) {
    let delta = B::get_fixed_timestep(world);

    let entities: Vec<(Entity, MotionConfig, MotionController)> = world
        .query::<(Entity, &MotionConfig, &MotionController)>()
        .iter(world)
        .map(|(entity, config, controller)| (entity, *config, controller.clone()))
        .collect();

    for (entity, config, controller) in entities {
        let velocity = B::get_velocity(world, entity);
        let committed = controller.tick_velocity(&config, velocity, delta);
        B::set_velocity(world, entity, committed);
        B::move_and_slide(world, entity);
    }
}

/// Apply pending facing flips to the presentation transform.
///
/// Each accepted sign inversion multiplies `scale.x` by `-1`; inversions
/// that cancelled between ticks leave the scale untouched.
pub fn sync_facing_flip(mut query: Query<(&mut MotionController, &mut Transform)>) {
    for (mut controller, mut transform) in &mut query {
        if controller.take_pending_flip() {
            transform.scale.x *= -1.0;
        }
    }
}

/// Sync the [`Grounded`]/[`Airborne`] marker components from the floor flag
/// observed at the most recent timing update.
pub fn sync_state_markers(
    mut commands: Commands,
    query: Query<(Entity, &MotionController, Has<Grounded>, Has<Airborne>)>,
) {
    for (entity, controller, has_grounded, has_airborne) in &query {
        if controller.is_grounded() {
            if !has_grounded {
                commands.entity(entity).insert(Grounded).remove::<Airborne>();
            }
        } else if has_grounded || !has_airborne {
            commands.entity(entity).remove::<Grounded>().insert(Airborne);
        }
    }
}
