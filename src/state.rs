//! State marker components.
//!
//! These components indicate the current physical state of a
//! motion-controlled body. They are automatically added/removed by the
//! controller systems based on the backend's floor contact flag.

use bevy::prelude::*;

/// Marker component indicating the body is on the floor.
///
/// Added automatically when the backend reported floor contact at the most
/// recent timing update. Removed when the body becomes airborne.
///
/// This is a marker component - it has no data, just indicates state.
///
/// # Example
///
/// ```rust
/// use msg_platformer_motion::prelude::*;
///
/// // Grounded is a marker component - just use it in queries
/// fn check_grounded(grounded: Option<&Grounded>) -> bool {
///     grounded.is_some()
/// }
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Grounded;

/// Marker component indicating the body is airborne.
///
/// Added automatically when the body leaves floor contact.
/// Mutually exclusive with [`Grounded`].
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Airborne;
