use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use engine::DecalMaterial;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "decals-playground", about = "Click objects to toggle their decals")]
pub struct Args {
	/// Scene config; defaults are used when the file does not exist.
	#[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/decals.toml"))]
	pub config: PathBuf,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
	pub window: WindowConfig,
	pub decal: DecalConfig,
	pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
	pub title: String,
	pub width: u32,
	pub height: u32,
}

/// Authored values of the material shared by every object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecalConfig {
	pub base_color: [f32; 3],
	pub decal_color: [f32; 3],
	/// Disc radius in uv units.
	pub radius: f32,
	pub softness: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectConfig {
	pub name: String,
	pub shape: Shape,
	#[serde(default)]
	pub position: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
	Cube,
	Sphere,
	Cylinder,
}

impl Default for PlaygroundConfig {
	fn default() -> Self {
		Self {
			window: WindowConfig::default(),
			decal: DecalConfig::default(),
			objects: vec![
				ObjectConfig::new("Cube", Shape::Cube, [-3.0, 1.0, 0.0]),
				ObjectConfig::new("Sphere", Shape::Sphere, [0.0, 1.0, 0.0]),
				ObjectConfig::new("Cylinder", Shape::Cylinder, [3.0, 1.0, 0.0]),
			],
		}
	}
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self { title: "Decals Playground".to_string(), width: 1280, height: 720 }
	}
}

impl Default for DecalConfig {
	fn default() -> Self {
		Self {
			base_color: [0.8, 0.8, 0.8],
			decal_color: [0.9, 0.2, 0.1],
			radius: 0.25,
			softness: 0.02,
		}
	}
}

impl ObjectConfig {
	pub fn new(name: &str, shape: Shape, position: [f32; 3]) -> Self {
		Self { name: name.to_string(), shape, position }
	}
}

impl PlaygroundConfig {
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		if !path.exists() {
			println!("No config at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read config {}", path.display()))?;
		Self::from_toml(&contents).with_context(|| format!("failed to parse config {}", path.display()))
	}

	pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(contents)
	}
}

impl DecalConfig {
	/// Builds the shared material. The decal starts hidden.
	pub fn material(&self) -> DecalMaterial {
		let [br, bg, bb] = self.base_color;
		let [dr, dg, db] = self.decal_color;
		DecalMaterial {
			base_color: Color::srgb(br, bg, bb).into(),
			decal_color: Color::srgb(dr, dg, db).into(),
			decal_bounds: Vec4::new(0.5, 0.5, self.radius, self.softness),
			show_decal: 0.0,
		}
	}
}

impl Shape {
	pub fn mesh(&self) -> Mesh {
		match self {
			Shape::Cube => Cuboid::new(2.0, 2.0, 2.0).into(),
			Shape::Sphere => Sphere::new(1.0).into(),
			Shape::Cylinder => Cylinder::new(1.0, 2.0).into(),
		}
	}
}
