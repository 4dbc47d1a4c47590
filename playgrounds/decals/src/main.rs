use bevy::prelude::*;
use clap::Parser;
use decals_playground::{config::Args, DecalsPlugin, PlaygroundConfig};

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let config = PlaygroundConfig::load(&args.config)?;

	println!("Starting decals playground with {} objects", config.objects.len());

	App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: config.window.title.clone(),
				resolution: (config.window.width, config.window.height).into(),
				..default()
			}),
			..default()
		}))
		.add_plugins(DecalsPlugin { config })
		.run();

	Ok(())
}
