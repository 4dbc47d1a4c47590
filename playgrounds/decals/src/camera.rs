use bevy::prelude::*;
use std::f32::consts::PI;

#[derive(Component)]
pub struct CameraController {
	pub speed: f32,
	pub sensitivity: f32,
	pub yaw: f32,
	pub pitch: f32,
}

pub fn setup_camera(mut commands: Commands) {
	let camera_pos = Vec3::new(0.0, 4.0, 9.0);
	let look_at = Vec3::new(0.0, 1.0, 0.0);

	log::info!("Setting up camera at position: {:?}, looking at: {:?}", camera_pos, look_at);

	let transform = Transform::from_translation(camera_pos).looking_at(look_at, Vec3::Y);
	let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

	commands.spawn((
		Camera3d::default(),
		transform,
		CameraController { speed: 5.0, sensitivity: 0.005, yaw, pitch },
	));
}

/// WASD walk camera. Mouse look only while the right button is held so left clicks reach picking.
pub fn camera_controller(
	keyboard_input: Res<ButtonInput<KeyCode>>,
	mouse_buttons: Res<ButtonInput<MouseButton>>,
	mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
	time: Res<Time>,
	mut query: Query<(&mut Transform, &mut CameraController), With<Camera3d>>,
) {
	let Ok((mut transform, mut controller)) = query.single_mut() else {
		return;
	};

	let mut mouse_delta = Vec2::ZERO;
	for event in mouse_motion.read() {
		mouse_delta += event.delta;
	}

	if mouse_buttons.pressed(MouseButton::Right) {
		controller.yaw -= mouse_delta.x * controller.sensitivity;
		controller.pitch -= mouse_delta.y * controller.sensitivity;
		controller.pitch = controller.pitch.clamp(-PI / 2.0 + 0.1, PI / 2.0 - 0.1);
	}

	let yaw_quat = Quat::from_axis_angle(Vec3::Y, controller.yaw);
	let pitch_quat = Quat::from_axis_angle(Vec3::X, controller.pitch);
	transform.rotation = yaw_quat * pitch_quat;

	// walk in the ground plane so looking down does not dive into the floor
	let forward = transform.forward().with_y(0.0).normalize_or_zero();
	let right = transform.right().with_y(0.0).normalize_or_zero();
	let movement = forward * axis(&keyboard_input, KeyCode::KeyW, KeyCode::KeyS)
		+ right * axis(&keyboard_input, KeyCode::KeyD, KeyCode::KeyA);

	if movement != Vec3::ZERO {
		transform.translation += movement.normalize() * controller.speed * time.delta_secs();
	}
}

fn axis(keyboard_input: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
	let mut value = 0.0;
	if keyboard_input.pressed(positive) {
		value += 1.0;
	}
	if keyboard_input.pressed(negative) {
		value -= 1.0;
	}
	value
}
