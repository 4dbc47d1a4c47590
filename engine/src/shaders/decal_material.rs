use crate::decal::{
	toggle::SHOW_DECAL,
	uniforms::{FloatUniforms, UniformError},
};
use bevy::{
	prelude::*, reflect::TypePath, render::render_resource::AsBindGroup, shader::ShaderRef,
};

pub const DECAL_RADIUS: &str = "_DecalRadius";
pub const DECAL_SOFTNESS: &str = "_DecalSoftness";

/// A flat-coloured surface with a circular decal painted over it in uv space.
///
/// The decal is blended in by `show_decal`, so a value of `0.0` renders the bare surface.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct DecalMaterial {
	#[uniform(0)]
	pub base_color: LinearRgba,
	#[uniform(1)]
	pub decal_color: LinearRgba,
	/// uv centre (x, y), radius (z) and edge softness (w) of the decal disc.
	#[uniform(2)]
	pub decal_bounds: Vec4,
	#[uniform(3)]
	pub show_decal: f32,
}

impl Default for DecalMaterial {
	fn default() -> Self {
		Self {
			base_color: Color::srgb(0.8, 0.8, 0.8).into(),
			decal_color: Color::srgb(0.9, 0.2, 0.1).into(),
			decal_bounds: Vec4::new(0.5, 0.5, 0.25, 0.02),
			show_decal: 0.0,
		}
	}
}

impl Material for DecalMaterial {
	fn fragment_shader() -> ShaderRef {
		"shaders/decal_material.wgsl".into()
	}
}

impl FloatUniforms for DecalMaterial {
	fn set_float(&mut self, name: &str, value: f32) -> Result<(), UniformError> {
		match name {
			SHOW_DECAL => self.show_decal = value,
			DECAL_RADIUS => self.decal_bounds.z = value,
			DECAL_SOFTNESS => self.decal_bounds.w = value,
			_ => return Err(UniformError::Unknown(name.to_string())),
		}
		Ok(())
	}

	fn float(&self, name: &str) -> Option<f32> {
		match name {
			SHOW_DECAL => Some(self.show_decal),
			DECAL_RADIUS => Some(self.decal_bounds.z),
			DECAL_SOFTNESS => Some(self.decal_bounds.w),
			_ => None,
		}
	}
}
