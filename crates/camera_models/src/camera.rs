use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Orbit radii below this are treated as degenerate. A camera sitting on top
/// of its target has no usable look direction.
pub const MIN_ORBIT_DISTANCE: f32 = 1e-4;

/// Errors raised while constructing an [`OrbitCameraRig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigError {
    /// Camera and target coincide, the orbit radius would be zero.
    DegenerateDistance,
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigError::DegenerateDistance => {
                write!(f, "camera and target coincide, orbit distance would be zero")
            }
        }
    }
}

impl std::error::Error for RigError {}

/// Orbit state of a third-person camera that circles a target at a fixed
/// radius.
///
/// While the activation button is held the rig integrates raw mouse deltas
/// into `yaw`/`pitch`; while released the owning systems force the camera to
/// look at the target and write the resulting angles back through
/// [`OrbitCameraRig::resync_from`], so the next activation resumes from where
/// the look-at left the camera instead of jumping to stale angles.
///
/// Angles are stored in degrees. Pitch is clamped by [`PitchLimits`] during
/// [`OrbitCameraRig::advance`]; yaw is left unbounded and wraps implicitly
/// through the trigonometry.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct OrbitCameraRig {
    /// Rotation about the world Y axis, in degrees. Unbounded.
    pub yaw: f32,
    /// Rotation about the camera's lateral axis, in degrees. Clamped.
    pub pitch: f32,
    /// Fixed orbit radius, computed once at construction.
    pub distance: f32,
    active: bool,
    look_input: Vec2,
}

impl OrbitCameraRig {
    /// Creates a rig from the initial camera and target positions.
    ///
    /// The orbit distance is the Euclidean distance between the two points
    /// and stays constant for the lifetime of the rig. The initial yaw/pitch
    /// are derived from the same offset so the first resolved frame keeps the
    /// camera exactly where it was spawned.
    ///
    /// # Errors
    /// [`RigError::DegenerateDistance`] when the two positions coincide.
    pub fn between(camera_pos: Vec3, target_pos: Vec3) -> Result<Self, RigError> {
        let distance = camera_pos.distance(target_pos);
        if distance <= MIN_ORBIT_DISTANCE {
            return Err(RigError::DegenerateDistance);
        }

        let mut rig = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            active: false,
            look_input: Vec2::ZERO,
        };
        let initial = Transform::from_translation(camera_pos)
            .looking_at(target_pos, Vec3::Y)
            .rotation;
        rig.resync_from(initial);
        Ok(rig)
    }

    /// Whether the activation button is currently held.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw look delta stored for the current frame.
    pub fn look_input(&self) -> Vec2 {
        self.look_input
    }

    /// Activation transition. Releasing also drops any pending look input so
    /// stale motion events cannot rotate a deactivated camera.
    pub fn set_active(&mut self, pressed: bool) {
        self.active = pressed;
        if !pressed {
            self.look_input = Vec2::ZERO;
        }
    }

    /// Stores the raw look delta for this frame. Forced to zero while
    /// inactive; between frames the last written value wins.
    pub fn set_look_input(&mut self, delta: Vec2) {
        self.look_input = if self.active { delta } else { Vec2::ZERO };
    }

    /// Integrates the stored look input into yaw/pitch, scaled by the mouse
    /// sensitivity and `dt`. No-op while inactive; the angles stay frozen
    /// until the look-at resync overwrites them.
    pub fn advance(&mut self, dt: f32, sensitivity: &MouseSensitivity, limits: &PitchLimits) {
        if !self.active {
            return;
        }
        self.yaw += self.look_input.x * sensitivity.horizontal * sensitivity.horizontal_sign() * dt;
        self.pitch += self.look_input.y * sensitivity.vertical * sensitivity.vertical_sign() * dt;
        self.pitch = self.pitch.clamp(limits.min, limits.max);
    }

    /// Orientation described by the current orbit angles, yaw about Y first,
    /// then pitch about the rotated X axis.
    pub fn orbit_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians()) * Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Camera position on the orbit sphere around `target`. Holds the radius
    /// invariant: `|eye_position(t) - t| == distance` for every frame.
    pub fn eye_position(&self, target: Vec3) -> Vec3 {
        target - self.orbit_rotation() * Vec3::NEG_Z * self.distance
    }

    /// Reads yaw/pitch back from an externally forced orientation, usually
    /// the look-at rotation applied while the rig is inactive.
    pub fn resync_from(&mut self, rotation: Quat) {
        let (yaw, pitch, _) = rotation.to_euler(EulerRot::YXZ);
        self.yaw = yaw.to_degrees();
        self.pitch = pitch.to_degrees();
    }
}

/// Mouse sensitivity settings for orbiting. Static configuration, read-only
/// at runtime.
#[derive(Deserialize, Serialize, Clone, Debug, Reflect)]
pub struct MouseSensitivity {
    /// Yaw degrees per input unit per second.
    pub horizontal: f32,
    /// Pitch degrees per input unit per second.
    pub vertical: f32,
    pub invert_horizontal: bool,
    pub invert_vertical: bool,
}

impl Default for MouseSensitivity {
    fn default() -> Self {
        Self {
            horizontal: 10.0,
            vertical: 10.0,
            invert_horizontal: false,
            invert_vertical: false,
        }
    }
}

impl MouseSensitivity {
    pub fn horizontal_sign(&self) -> f32 {
        invert_sign(self.invert_horizontal)
    }

    pub fn vertical_sign(&self) -> f32 {
        invert_sign(self.invert_vertical)
    }
}

/// Allowed pitch range in degrees. Only pitch is clamped, yaw never is.
#[derive(Deserialize, Serialize, Clone, Debug, Reflect)]
pub struct PitchLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for PitchLimits {
    fn default() -> Self {
        Self { min: -80.0, max: 80.0 }
    }
}

fn invert_sign(inverted: bool) -> f32 {
    if inverted { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn default_rig() -> OrbitCameraRig {
        OrbitCameraRig::between(Vec3::new(0.0, 3.0, 8.0), Vec3::new(0.0, 0.5, 0.0))
            .expect("positions do not coincide")
    }

    #[test]
    fn between_computes_euclidean_distance() {
        let rig = OrbitCameraRig::between(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO).unwrap();
        assert!((rig.distance - 5.0).abs() < EPS);

        let rig = OrbitCameraRig::between(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO).unwrap();
        assert!((rig.distance - 5.0).abs() < EPS);
    }

    #[test]
    fn between_rejects_coincident_positions() {
        let at = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            OrbitCameraRig::between(at, at),
            Err(RigError::DegenerateDistance)
        ));
    }

    #[test]
    fn between_preserves_initial_camera_position() {
        let camera = Vec3::new(0.0, 3.0, 8.0);
        let target = Vec3::new(0.0, 0.5, 0.0);
        let rig = OrbitCameraRig::between(camera, target).unwrap();
        let eye = rig.eye_position(target);
        assert!(eye.distance(camera) < EPS, "eye {eye:?} drifted from {camera:?}");
    }

    #[test]
    fn advance_is_noop_while_inactive() {
        let mut rig = default_rig();
        let (yaw, pitch) = (rig.yaw, rig.pitch);
        // Inactive rigs refuse look input outright.
        rig.set_look_input(Vec2::new(100.0, -40.0));
        for dt in [0.0, 0.016, 1.0, 10.0] {
            rig.advance(dt, &MouseSensitivity::default(), &PitchLimits::default());
        }
        assert_eq!(rig.look_input(), Vec2::ZERO);
        assert!((rig.yaw - yaw).abs() < EPS);
        assert!((rig.pitch - pitch).abs() < EPS);
    }

    #[test]
    fn pitch_stays_within_limits_for_any_input() {
        let mut rig = default_rig();
        rig.set_active(true);
        let sensitivity = MouseSensitivity::default();
        let limits = PitchLimits { min: -30.0, max: 45.0 };
        for delta in [
            Vec2::new(0.0, 1e6),
            Vec2::new(0.0, -1e6),
            Vec2::new(12.0, 3.5),
            Vec2::new(-7.0, -220.0),
        ] {
            rig.set_look_input(delta);
            rig.advance(0.5, &sensitivity, &limits);
            assert!(rig.pitch >= limits.min && rig.pitch <= limits.max);
        }
    }

    #[test]
    fn yaw_is_never_clamped() {
        let mut rig = default_rig();
        rig.set_active(true);
        rig.set_look_input(Vec2::new(100.0, 0.0));
        for _ in 0..100 {
            rig.advance(1.0, &MouseSensitivity::default(), &PitchLimits::default());
        }
        // 100 frames * 100 input * 10 deg/s adds up far past a full turn.
        assert!(rig.yaw.abs() > 360.0);
    }

    #[test]
    fn deactivation_zeroes_look_input() {
        let mut rig = default_rig();
        rig.set_active(true);
        rig.set_look_input(Vec2::new(500.0, -500.0));
        assert_ne!(rig.look_input(), Vec2::ZERO);
        rig.set_active(false);
        assert_eq!(rig.look_input(), Vec2::ZERO);
    }

    #[test]
    fn stale_input_after_deactivation_is_dropped() {
        let mut rig = default_rig();
        rig.set_active(true);
        rig.set_look_input(Vec2::new(3.0, 3.0));
        rig.set_active(false);
        // Event delivered after the release edge must not stick.
        rig.set_look_input(Vec2::new(9.0, 9.0));
        assert_eq!(rig.look_input(), Vec2::ZERO);
    }

    #[test]
    fn radius_invariant_across_frames() {
        let mut rig = default_rig();
        rig.set_active(true);
        let sensitivity = MouseSensitivity::default();
        let limits = PitchLimits::default();
        let mut target = Vec3::new(0.0, 0.5, 0.0);
        for frame in 0..240 {
            target.x += 0.05;
            rig.set_look_input(Vec2::new((frame as f32).sin() * 4.0, 1.5));
            rig.advance(1.0 / 60.0, &sensitivity, &limits);
            let eye = rig.eye_position(target);
            assert!((eye.distance(target) - rig.distance).abs() < EPS);
        }
    }

    #[test]
    fn horizontal_input_advances_yaw_by_scaled_amount() {
        // Camera 5 units behind the target, unit input for one second at
        // sensitivity 10 swings yaw by exactly 10 degrees.
        let target = Vec3::ZERO;
        let start = Vec3::new(0.0, 0.0, -5.0);
        let mut rig = OrbitCameraRig::between(start, target).unwrap();
        let initial_yaw = rig.yaw;

        rig.set_active(true);
        rig.set_look_input(Vec2::new(1.0, 0.0));
        rig.advance(1.0, &MouseSensitivity::default(), &PitchLimits::default());
        assert!((rig.yaw - initial_yaw - 10.0).abs() < EPS);

        // Pure yaw motion spins the eye around the world Y axis.
        let expected = Quat::from_rotation_y(10.0_f32.to_radians()) * start;
        assert!(rig.eye_position(target).distance(expected) < EPS);
    }

    #[test]
    fn inverted_axes_flip_integration_direction() {
        let mut rig = default_rig();
        rig.set_active(true);
        let (yaw, pitch) = (rig.yaw, rig.pitch);
        let sensitivity = MouseSensitivity {
            invert_horizontal: true,
            invert_vertical: true,
            ..MouseSensitivity::default()
        };
        rig.set_look_input(Vec2::new(1.0, 1.0));
        rig.advance(1.0, &sensitivity, &PitchLimits::default());
        assert!(rig.yaw < yaw);
        assert!(rig.pitch < pitch);
    }

    #[test]
    fn resync_round_trips_through_look_at() {
        let target = Vec3::new(2.0, 1.0, -3.0);
        let mut rig = OrbitCameraRig::between(Vec3::new(6.0, 4.0, 1.0), target).unwrap();

        // Orbit somewhere arbitrary, then force the inactive look-at path.
        rig.set_active(true);
        rig.set_look_input(Vec2::new(37.0, -12.0));
        rig.advance(0.25, &MouseSensitivity::default(), &PitchLimits::default());
        rig.set_active(false);

        let eye = rig.eye_position(target);
        let look_at = Transform::from_translation(eye)
            .looking_at(target, Vec3::Y)
            .rotation;
        rig.resync_from(look_at);

        // Re-deriving the rotation from the read-back angles must still aim
        // straight at the target from the same eye point.
        let rederived = rig.orbit_rotation();
        let forward = rederived * Vec3::NEG_Z;
        let to_target = (target - eye).normalize();
        assert!(forward.dot(to_target) > 1.0 - EPS);
        // And the eye itself must not move because of the resync.
        assert!(rig.eye_position(target).distance(eye) < EPS);
    }
}
