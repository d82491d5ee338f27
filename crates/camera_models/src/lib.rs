pub mod camera;
pub mod config;
pub mod target;

use bevy::prelude::*;
use crate::camera::OrbitCameraRig;
use crate::config::{CameraConfig, CONFIG_PATH};
use crate::target::FollowTarget;

/// Core of all camera relevant resources and structures. This Plugin registers
/// the reflectable component types and makes sure a [`CameraConfig`] resource
/// exists, loading it from `config/camera.toml` unless the app already
/// inserted one.
pub struct CameraCorePlugin;

impl Plugin for CameraCorePlugin {

    fn build(&self, app: &mut App) {
        app.register_type::<OrbitCameraRig>();
        app.register_type::<FollowTarget>();

        if !app.world().contains_resource::<CameraConfig>() {
            app.insert_resource(CameraConfig::load(CONFIG_PATH));
        }
    }

}
