use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use camera_logic::OrbitCameraPlugin;
use camera_models::CameraCorePlugin;
use camera_models::config::{CameraConfig, CONFIG_PATH};

fn main() {
    let config = CameraConfig::load(CONFIG_PATH);

    let present_mode = if config.window.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: WindowResolution::new(
                    config.window.get_window_width(),
                    config.window.get_window_height(),
                ),
                present_mode,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins((CameraCorePlugin, OrbitCameraPlugin))
        .run();
}
