pub mod orbit;
pub mod scene;

use bevy::prelude::*;

/// Wires the orbit camera systems into the app.
///
/// The per-frame systems are chained so input edges are seen first, the raw
/// look delta is integrated next, and the transform is resolved last within
/// the same frame. [`orbit::advance_orbit`] running before
/// [`orbit::resolve_transform`] is a hard ordering requirement; callers
/// scheduling the systems by hand must keep it.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {

    fn build(&self, app: &mut App) {
        app.add_systems(Startup, scene::setup_scene);
        app.add_systems(
            Update,
            (
                orbit::activation_input,
                orbit::accumulate_look_input,
                orbit::advance_orbit,
                orbit::resolve_transform,
            )
                .chain(),
        );
    }
}
