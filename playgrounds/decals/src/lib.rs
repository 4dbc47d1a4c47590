use bevy::{picking::mesh_picking::MeshPickingPlugin, prelude::*};
use std::f32::consts::PI;

mod camera;
pub mod config;
mod ground;
mod objects;
mod ui;

use engine::{decal::toggle_on_primary_click, DecalMaterial, DecalTogglePlugin};

pub use camera::CameraController;
pub use config::PlaygroundConfig;

pub struct DecalsPlugin {
	pub config: PlaygroundConfig,
}

impl Plugin for DecalsPlugin {
	fn build(&self, app: &mut App) {
		app.add_plugins(bevy::pbr::MaterialPlugin::<DecalMaterial>::default());
		app.add_plugins(DecalTogglePlugin::<DecalMaterial>::default());

		// clicks are the only thing driving the toggles here
		app.add_plugins(MeshPickingPlugin);
		app.add_observer(toggle_on_primary_click::<DecalMaterial>);

		app.insert_resource(ClearColor(Color::hsla(201.0, 0.69, 0.62, 1.0)))
			.insert_resource(self.config.clone())
			.add_systems(
				Startup,
				(
					camera::setup_camera,
					setup_lighting,
					ground::setup_ground,
					objects::spawn_decal_objects,
					ui::setup_decal_ui,
				),
			)
			.add_systems(
				Update,
				(camera::camera_controller, objects::despawn_on_delete, ui::update_decal_ui),
			);
	}
}

fn setup_lighting(mut commands: Commands) {
	commands.insert_resource(AmbientLight {
		color: Color::WHITE,
		brightness: 400.0,
		affects_lightmapped_meshes: true,
	});

	commands.spawn((
		DirectionalLight { illuminance: 10000.0, shadows_enabled: true, ..default() },
		Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -PI / 4.0, PI / 4.0, 0.0)),
	));
}
