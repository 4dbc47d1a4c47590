use super::{toggle::DecalToggle, uniforms::FloatUniforms, ToggleDecal};
use bevy::prelude::*;

/// Swaps the entity's shared material for a private copy owned by its [`DecalToggle`].
///
/// Runs on every insert, so a toggle inserted over an existing one rebinds to the source
/// restored by [`release_material`].
pub(crate) fn acquire_material<M: FloatUniforms>(
	insert: On<Insert, DecalToggle<M>>,
	mut toggles: Query<(&mut DecalToggle<M>, Option<&mut MeshMaterial3d<M>>)>,
	mut materials: ResMut<Assets<M>>,
) {
	let entity = insert.entity;
	let Ok((mut toggle, mesh_material)) = toggles.get_mut(entity) else {
		return;
	};

	let Some(mut mesh_material) = mesh_material else {
		log::warn!("Entity {:?} has a decal toggle but no mesh material to copy", entity);
		return;
	};

	// the source may still be loading, in which case there is nothing to copy yet
	let Some(copy) = materials.get(&mesh_material.0).cloned() else {
		log::warn!("Material for entity {:?} is not loaded, decal toggle left unbound", entity);
		return;
	};

	let instance = materials.add(copy);
	let source = std::mem::replace(&mut mesh_material.0, instance.clone());
	log::debug!("Bound decal material {:?} to entity {:?}", instance.id(), entity);
	toggle.bind(source, instance);
}

pub(crate) fn toggle_decal<M: FloatUniforms>(
	event: On<ToggleDecal>,
	mut toggles: Query<&mut DecalToggle<M>>,
	mut materials: ResMut<Assets<M>>,
) {
	// the event may target an entity toggling a different material type
	let Ok(mut toggle) = toggles.get_mut(event.entity) else {
		return;
	};

	match toggle.toggle(&mut materials) {
		Ok(shown) => log::debug!("Decal on entity {:?} shown: {}", event.entity, shown),
		Err(err) => log::warn!("Failed to toggle decal on entity {:?}: {}", event.entity, err),
	}
}

/// Drops the private copy right away and points the entity back at the shared material.
///
/// Runs on replace as well as on removal and despawn, so the copy never outlives the toggle
/// value that owns it.
pub(crate) fn release_material<M: FloatUniforms>(
	replace: On<Replace, DecalToggle<M>>,
	mut toggles: Query<(&mut DecalToggle<M>, Option<&mut MeshMaterial3d<M>>)>,
	mut materials: ResMut<Assets<M>>,
) {
	let entity = replace.entity;
	let Ok((mut toggle, mesh_material)) = toggles.get_mut(entity) else {
		return;
	};

	if toggle.release(&mut materials) {
		log::debug!("Released decal material of entity {:?}", entity);
	}

	if let (Some(source), Some(mut mesh_material)) = (toggle.take_source(), mesh_material) {
		mesh_material.0 = source;
	}
}
