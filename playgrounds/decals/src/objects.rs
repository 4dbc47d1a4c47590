use crate::config::PlaygroundConfig;
use bevy::prelude::*;
use engine::{DecalMaterial, DecalToggle};

#[derive(Component)]
pub struct DecalObject;

pub fn spawn_decal_objects(
	mut commands: Commands,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<DecalMaterial>>,
	config: Res<PlaygroundConfig>,
) {
	// every object starts on the same asset and gets its own copy from DecalToggle
	let shared = materials.add(config.decal.material());

	for object in &config.objects {
		commands.spawn((
			Name::new(object.name.clone()),
			Mesh3d(meshes.add(object.shape.mesh())),
			MeshMaterial3d(shared.clone()),
			Transform::from_translation(Vec3::from_array(object.position)),
			DecalObject,
			DecalToggle::<DecalMaterial>::default(),
		));
	}

	log::info!("Spawned {} decal objects", config.objects.len());
}

/// Delete removes the oldest remaining object, releasing its material copy.
pub fn despawn_on_delete(
	mut commands: Commands,
	keyboard_input: Res<ButtonInput<KeyCode>>,
	objects: Query<(Entity, &Name), With<DecalObject>>,
) {
	if !keyboard_input.just_pressed(KeyCode::Delete) {
		return;
	}

	if let Some((entity, name)) = objects.iter().min_by_key(|(entity, _)| *entity) {
		log::info!("Despawning {}", name);
		commands.entity(entity).despawn();
	}
}
