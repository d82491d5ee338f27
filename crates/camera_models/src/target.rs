use bevy::prelude::*;

/// Marks the entity the orbit camera follows. Exactly one entity should
/// carry this at a time; the camera systems bail out otherwise.
///
/// The target is an external collaborator: the camera only reads its
/// translation and never drives its lifecycle.
#[derive(Component, Debug, Default, Clone, Reflect)]
#[reflect(Component)]
pub struct FollowTarget;
