use bevy::pbr::MeshMaterial3d;
use bevy::prelude::*;
use camera_models::camera::OrbitCameraRig;
use camera_models::target::FollowTarget;

/// Spawns the demo scene: ground, light, a stand-in target cube and the
/// orbit camera itself. The rig derives its orbit distance and initial
/// angles from the spawn transforms.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(24.0, 24.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.35, 0.25),
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        PointLight {
            intensity: 1500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    let target_pos = spawn_target_cube(&mut commands, &mut meshes, &mut materials);

    let camera_transform = Transform::from_xyz(0.0, 3.0, 8.0).looking_at(target_pos, Vec3::Y);
    let rig = match OrbitCameraRig::between(camera_transform.translation, target_pos) {
        Ok(rig) => rig,
        Err(err) => {
            error!("Skipping camera spawn: {err}");
            return;
        }
    };

    commands.spawn((
        Camera3d::default(),
        camera_transform,
        rig,
        Camera {
            order: 0,
            ..default()
        },
    ));
}

//TODO: Replace this temporary target cube with the actual player spawn pipeline.
fn spawn_target_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Vec3 {
    let target_pos = Vec3::new(0.0, 0.5, 0.0);
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cuboid::new(1.0, 1.0, 1.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.6, 0.9),
            ..default()
        })),
        Transform::from_translation(target_pos),
        FollowTarget,
    ));
    target_pos
}
