use bevy::prelude::*;
use engine::{DecalMaterial, DecalToggle};

#[derive(Component)]
pub struct DecalStatusText;

pub fn setup_decal_ui(mut commands: Commands) {
	log::info!("Setting up decal UI");

	commands
		.spawn((
			Node {
				position_type: PositionType::Absolute,
				top: Val::Px(10.0),
				left: Val::Px(10.0),
				padding: UiRect::all(Val::Px(10.0)),
				..default()
			},
			BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.7)),
		))
		.with_children(|parent| {
			parent.spawn((
				Text::new(""),
				TextFont { font_size: 18.0, ..default() },
				TextColor(Color::WHITE),
				DecalStatusText,
			));
		});
}

pub fn status_lines<'a>(toggles: impl Iterator<Item = (&'a str, bool)>) -> String {
	let mut lines: Vec<(&str, bool)> = toggles.collect();
	lines.sort_by(|a, b| a.0.cmp(b.0));

	let mut text =
		String::from("Left click: toggle decal\nWASD: walk, right drag: look\nDelete: despawn\n");
	for (name, shown) in lines {
		text.push_str(&format!("\n{}: {}", name, if shown { "on" } else { "off" }));
	}
	text
}

/// Rebuilds the overlay only when a toggle changed, was added or went away.
pub fn update_decal_ui(
	toggles: Query<(&Name, &DecalToggle<DecalMaterial>)>,
	changed: Query<(), Changed<DecalToggle<DecalMaterial>>>,
	mut removed: RemovedComponents<DecalToggle<DecalMaterial>>,
	mut text_query: Query<&mut Text, With<DecalStatusText>>,
) {
	let any_removed = removed.read().count() > 0;
	if changed.is_empty() && !any_removed {
		return;
	}

	let Ok(mut text) = text_query.single_mut() else {
		return;
	};

	text.0 = status_lines(toggles.iter().map(|(name, toggle)| (name.as_str(), toggle.is_shown())));
}
