use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniformError {
	#[error("unknown float uniform `{0}`")]
	Unknown(String),
}

/// A material whose float uniforms can be written by name.
pub trait FloatUniforms: Material {
	fn set_float(&mut self, name: &str, value: f32) -> Result<(), UniformError>;

	/// Reads back a named float uniform, if the material has one.
	fn float(&self, name: &str) -> Option<f32>;
}
