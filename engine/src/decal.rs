mod lifecycle;
pub mod picking;
pub mod toggle;
pub mod uniforms;

use bevy::prelude::*;
use std::marker::PhantomData;

pub use picking::toggle_on_primary_click;
pub use toggle::{DecalToggle, DecalToggleError, SHOW_DECAL};
pub use uniforms::{FloatUniforms, UniformError};

/// Asks the [`DecalToggle`] on `entity` to flip its decal.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ToggleDecal {
	pub entity: Entity,
}

/// Registers the observers driving [`DecalToggle<M>`].
///
/// The material itself still needs `MaterialPlugin::<M>` to render; this plugin only needs
/// `Assets<M>` to exist.
pub struct DecalTogglePlugin<M: FloatUniforms> {
	_material: PhantomData<M>,
}

impl<M: FloatUniforms> Default for DecalTogglePlugin<M> {
	fn default() -> Self {
		Self { _material: PhantomData }
	}
}

impl<M: FloatUniforms> Plugin for DecalTogglePlugin<M> {
	fn build(&self, app: &mut App) {
		app.add_observer(lifecycle::acquire_material::<M>)
			.add_observer(lifecycle::toggle_decal::<M>)
			.add_observer(lifecycle::release_material::<M>);
	}
}
