use super::uniforms::{FloatUniforms, UniformError};
use bevy::prelude::*;
use thiserror::Error;

/// Name of the float uniform written by [`DecalToggle::toggle`].
pub const SHOW_DECAL: &str = "_ShowDecal";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecalToggleError {
	#[error("no material instance is bound to the decal toggle")]
	MissingMaterial,
	#[error(transparent)]
	Uniform(#[from] UniformError),
}

/// Shows or hides the decal on an entity's material.
///
/// On insertion the entity's `MeshMaterial3d<M>` is swapped for a private copy of the material
/// it pointed at, so toggling one entity never affects others sharing the same asset. The copy
/// is owned by this component and removed from `Assets<M>` as soon as the component goes away
/// or is replaced by a new value.
///
/// `show_decal` only changes after the uniform write succeeded, so it always matches the last
/// value written to [`SHOW_DECAL`].
#[derive(Component, Debug)]
pub struct DecalToggle<M: FloatUniforms> {
	material: Option<Handle<M>>,
	source: Option<Handle<M>>,
	show_decal: bool,
}

impl<M: FloatUniforms> Default for DecalToggle<M> {
	fn default() -> Self {
		Self { material: None, source: None, show_decal: false }
	}
}

impl<M: FloatUniforms> DecalToggle<M> {
	pub fn is_shown(&self) -> bool {
		self.show_decal
	}

	/// The per-instance material copy, once one has been acquired.
	pub fn material(&self) -> Option<&Handle<M>> {
		self.material.as_ref()
	}

	/// The shared material the instance was copied from.
	pub fn source(&self) -> Option<&Handle<M>> {
		self.source.as_ref()
	}

	/// Flips the decal and writes `1.0` or `0.0` to [`SHOW_DECAL`]. Returns the new state.
	pub fn toggle(&mut self, materials: &mut Assets<M>) -> Result<bool, DecalToggleError> {
		let handle = self.material.as_ref().ok_or(DecalToggleError::MissingMaterial)?;
		let material = materials.get_mut(handle).ok_or(DecalToggleError::MissingMaterial)?;

		let show_decal = !self.show_decal;
		material.set_float(SHOW_DECAL, if show_decal { 1.0 } else { 0.0 })?;
		self.show_decal = show_decal;

		Ok(show_decal)
	}

	pub(crate) fn bind(&mut self, source: Handle<M>, instance: Handle<M>) {
		self.source = Some(source);
		self.material = Some(instance);
	}

	pub(crate) fn take_source(&mut self) -> Option<Handle<M>> {
		self.source.take()
	}

	/// Removes the owned copy from `materials`. Returns false if there was nothing to release.
	pub(crate) fn release(&mut self, materials: &mut Assets<M>) -> bool {
		match self.material.take() {
			Some(handle) => materials.remove(&handle).is_some(),
			None => false,
		}
	}
}
