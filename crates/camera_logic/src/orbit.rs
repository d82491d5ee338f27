use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use camera_models::camera::{MIN_ORBIT_DISTANCE, OrbitCameraRig};
use camera_models::config::CameraConfig;
use camera_models::target::FollowTarget;

/// Tracks press/release edges of the configured activation button.
///
/// On press the cursor is locked and hidden so raw deltas keep coming while
/// the pointer would otherwise hit the window border; on release the cursor
/// is handed back. The rig itself only sees the boolean transition.
pub fn activation_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    config: Res<CameraConfig>,
    mut cameras: Query<&mut OrbitCameraRig>,
    mut cursor_options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let button = config.input.get_activation_button();
    if !mouse_buttons.just_pressed(button) && !mouse_buttons.just_released(button) {
        return;
    }

    // A press and release can land in the same frame; the button's current
    // level decides the final state.
    let active = mouse_buttons.pressed(button);

    for mut rig in cameras.iter_mut() {
        rig.set_active(active);
    }

    if let Ok(mut options) = cursor_options.single_mut() {
        if active {
            options.grab_mode = CursorGrabMode::Locked;
            options.visible = false;
        } else {
            options.grab_mode = CursorGrabMode::None;
            options.visible = true;
        }
    }
}

/// Collapses this frame's mouse motion into a single look delta per rig.
/// Last write wins; inactive rigs force the stored delta to zero.
pub fn accumulate_look_input(
    mut motion_events: MessageReader<MouseMotion>,
    mut cameras: Query<&mut OrbitCameraRig>,
) {
    let mut motion_delta = Vec2::ZERO;
    for event in motion_events.read() {
        motion_delta += event.delta;
    }

    for mut rig in cameras.iter_mut() {
        rig.set_look_input(motion_delta);
    }
}

/// Integrates the pending look input into the orbit angles. Must run before
/// [`resolve_transform`] in the same frame; the plugin chains them.
pub fn advance_orbit(
    time: Res<Time>,
    config: Res<CameraConfig>,
    mut cameras: Query<&mut OrbitCameraRig>,
) {
    for mut rig in cameras.iter_mut() {
        rig.advance(time.delta_secs(), &config.sensitivity, &config.pitch_limits);
    }
}

/// Writes the camera transform for this frame.
///
/// Position always follows the target at the fixed orbit radius. While the
/// activation button is held the orientation comes straight from the orbit
/// angles; otherwise the camera is forced to look at the target and the rig
/// reads its angles back from that rotation, so the next activation resumes
/// without a jump.
pub fn resolve_transform(
    mut cameras: Query<(&mut OrbitCameraRig, &mut Transform), With<Camera>>,
    targets: Query<&Transform, (With<FollowTarget>, Without<Camera>)>,
) {
    let target = match targets.single() {
        Ok(target) => target.translation,
        Err(_) => return,
    };

    for (mut rig, mut transform) in cameras.iter_mut() {
        transform.translation = rig.eye_position(target);

        if rig.is_active() {
            transform.rotation = rig.orbit_rotation();
        } else if transform.translation.distance_squared(target)
            > MIN_ORBIT_DISTANCE * MIN_ORBIT_DISTANCE
        {
            transform.look_at(target, Vec3::Y);
            rig.resync_from(transform.rotation);
        }
    }
}
