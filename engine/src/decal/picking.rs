use super::{toggle::DecalToggle, uniforms::FloatUniforms, ToggleDecal};
use bevy::{
	picking::{
		events::{Click, Pointer},
		pointer::PointerButton,
	},
	prelude::*,
};

/// Turns a primary click on an entity with a [`DecalToggle<M>`] into a [`ToggleDecal`].
///
/// Register with `app.add_observer(toggle_on_primary_click::<M>)` alongside a picking backend
/// such as `MeshPickingPlugin`.
pub fn toggle_on_primary_click<M: FloatUniforms>(
	mut click: On<Pointer<Click>>,
	toggles: Query<(), With<DecalToggle<M>>>,
	mut commands: Commands,
) {
	if click.button != PointerButton::Primary || !toggles.contains(click.entity) {
		return;
	}

	let entity = click.entity;
	click.propagate(false);
	commands.trigger(ToggleDecal { entity });
}
