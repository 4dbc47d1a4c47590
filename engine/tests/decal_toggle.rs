//! Drives decal toggles through a headless app: material acquisition on spawn, toggling via
//! [`ToggleDecal`] and pointer clicks, isolation between entities sharing a material, and
//! release on teardown or reinsertion.

use bevy::{
	camera::{ManualTextureViewHandle, NormalizedRenderTarget},
	picking::{
		backend::HitData,
		events::{Click, Pointer},
		pointer::{Location, PointerButton, PointerId},
	},
	prelude::*,
};
use engine::{
	decal::{toggle_on_primary_click, SHOW_DECAL},
	DecalMaterial, DecalToggle, DecalTogglePlugin, FloatUniforms, ToggleDecal,
};
use std::time::Duration;

fn test_app() -> App {
	let mut app = App::new();

	// no rendering needed, only the asset storage for the material
	app.add_plugins(MinimalPlugins);
	app.add_plugins(bevy::asset::AssetPlugin::default());
	app.init_asset::<DecalMaterial>();
	app.add_plugins(DecalTogglePlugin::<DecalMaterial>::default());

	app
}

fn add_source(app: &mut App, material: DecalMaterial) -> Handle<DecalMaterial> {
	app.world_mut().resource_mut::<Assets<DecalMaterial>>().add(material)
}

fn spawn_decal(app: &mut App, source: &Handle<DecalMaterial>) -> Entity {
	let entity = app
		.world_mut()
		.spawn((MeshMaterial3d(source.clone()), DecalToggle::<DecalMaterial>::default()))
		.id();
	app.update();
	entity
}

fn toggle_of(app: &App, entity: Entity) -> &DecalToggle<DecalMaterial> {
	app.world().get::<DecalToggle<DecalMaterial>>(entity).expect("entity should have a toggle")
}

fn instance_of(app: &App, entity: Entity) -> AssetId<DecalMaterial> {
	toggle_of(app, entity).material().expect("toggle should be bound").id()
}

fn uniform(app: &App, id: AssetId<DecalMaterial>) -> f32 {
	let materials = app.world().resource::<Assets<DecalMaterial>>();
	materials.get(id).expect("material should exist").float(SHOW_DECAL).unwrap()
}

fn click(app: &mut App, entity: Entity, button: PointerButton) {
	let location = Location {
		target: NormalizedRenderTarget::TextureView(ManualTextureViewHandle(0)),
		position: Vec2::ZERO,
	};
	let hit = HitData::new(Entity::PLACEHOLDER, 1.0, None, None);
	let event = Click { button, hit, duration: Duration::from_millis(50) };

	app.world_mut().trigger(Pointer::new(PointerId::Mouse, location, event, entity));
	app.update();
}

fn toggle(app: &mut App, entity: Entity) {
	app.world_mut().trigger(ToggleDecal { entity });
	app.update();
}

#[test]
fn spawn_binds_a_private_copy_without_writing() {
	let mut app = test_app();
	let authored = DecalMaterial { decal_bounds: Vec4::new(0.5, 0.5, 0.4, 0.05), ..default() };
	let source = add_source(&mut app, authored);

	let entity = spawn_decal(&mut app, &source);

	let toggle = toggle_of(&app, entity);
	let instance = toggle.material().expect("toggle should be bound").clone();
	assert_ne!(instance.id(), source.id());
	assert_eq!(toggle.source().map(|handle| handle.id()), Some(source.id()));
	assert!(!toggle.is_shown());

	let mesh_material = app.world().get::<MeshMaterial3d<DecalMaterial>>(entity).unwrap();
	assert_eq!(mesh_material.0.id(), instance.id());

	let materials = app.world().resource::<Assets<DecalMaterial>>();
	let copy = materials.get(&instance).unwrap();
	assert_eq!(copy.decal_bounds, Vec4::new(0.5, 0.5, 0.4, 0.05));
	assert_eq!(copy.show_decal, 0.0);
	assert_eq!(materials.len(), 2);
}

#[test]
fn toggle_twice_round_trips() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let instance = instance_of(&app, entity);

	toggle(&mut app, entity);
	assert!(toggle_of(&app, entity).is_shown());
	assert_eq!(uniform(&app, instance), 1.0);

	toggle(&mut app, entity);
	assert!(!toggle_of(&app, entity).is_shown());
	assert_eq!(uniform(&app, instance), 0.0);
}

#[test]
fn state_tracks_parity_of_toggle_count() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let instance = instance_of(&app, entity);

	for n in 1..=7 {
		toggle(&mut app, entity);
		let shown = toggle_of(&app, entity).is_shown();
		assert_eq!(shown, n % 2 == 1, "after {} toggles", n);
		assert_eq!(uniform(&app, instance), if shown { 1.0 } else { 0.0 });
	}
}

#[test]
fn entities_sharing_a_material_toggle_independently() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let first = spawn_decal(&mut app, &source);
	let second = spawn_decal(&mut app, &source);

	toggle(&mut app, first);

	assert!(toggle_of(&app, first).is_shown());
	assert!(!toggle_of(&app, second).is_shown());
	assert_eq!(uniform(&app, instance_of(&app, first)), 1.0);
	assert_eq!(uniform(&app, instance_of(&app, second)), 0.0);
	assert_eq!(uniform(&app, source.id()), 0.0);
}

#[test]
fn despawn_releases_the_copy_once() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let instance = instance_of(&app, entity);

	for _ in 0..3 {
		toggle(&mut app, entity);
	}

	app.world_mut().despawn(entity);
	app.update();

	let materials = app.world().resource::<Assets<DecalMaterial>>();
	assert!(materials.get(instance).is_none());
	assert!(materials.get(&source).is_some());
	assert_eq!(materials.len(), 1);
}

#[test]
fn removing_the_toggle_restores_the_shared_material() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let instance = instance_of(&app, entity);
	toggle(&mut app, entity);

	app.world_mut().entity_mut(entity).remove::<DecalToggle<DecalMaterial>>();
	app.update();

	let mesh_material = app.world().get::<MeshMaterial3d<DecalMaterial>>(entity).unwrap();
	assert_eq!(mesh_material.0.id(), source.id());
	let materials = app.world().resource::<Assets<DecalMaterial>>();
	assert!(materials.get(instance).is_none());
	assert_eq!(materials.get(&source).unwrap().show_decal, 0.0);
}

#[test]
fn reinserting_the_toggle_rebinds_from_the_shared_material() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let old_instance = instance_of(&app, entity);
	toggle(&mut app, entity);

	app.world_mut().entity_mut(entity).insert(DecalToggle::<DecalMaterial>::default());
	app.update();

	let new_instance = instance_of(&app, entity);
	assert_ne!(new_instance, old_instance);
	assert_eq!(toggle_of(&app, entity).source().map(|handle| handle.id()), Some(source.id()));
	assert!(!toggle_of(&app, entity).is_shown());

	let mesh_material = app.world().get::<MeshMaterial3d<DecalMaterial>>(entity).unwrap();
	assert_eq!(mesh_material.0.id(), new_instance);

	let materials = app.world().resource::<Assets<DecalMaterial>>();
	assert!(materials.get(old_instance).is_none());
	assert_eq!(materials.len(), 2);
	assert_eq!(uniform(&app, new_instance), 0.0);

	toggle(&mut app, entity);
	assert!(toggle_of(&app, entity).is_shown());
	assert_eq!(uniform(&app, new_instance), 1.0);
}

#[test]
fn only_primary_clicks_toggle() {
	let mut app = test_app();
	app.add_observer(toggle_on_primary_click::<DecalMaterial>);
	let source = add_source(&mut app, DecalMaterial::default());
	let entity = spawn_decal(&mut app, &source);
	let instance = instance_of(&app, entity);

	click(&mut app, entity, PointerButton::Secondary);
	click(&mut app, entity, PointerButton::Middle);
	assert!(!toggle_of(&app, entity).is_shown());
	assert_eq!(uniform(&app, instance), 0.0);

	click(&mut app, entity, PointerButton::Primary);
	assert!(toggle_of(&app, entity).is_shown());
	assert_eq!(uniform(&app, instance), 1.0);
}

#[test]
fn click_toggles_only_the_nearest_decal_in_the_hierarchy() {
	let mut app = test_app();
	app.add_observer(toggle_on_primary_click::<DecalMaterial>);
	let source = add_source(&mut app, DecalMaterial::default());
	let parent = spawn_decal(&mut app, &source);
	let child = spawn_decal(&mut app, &source);
	app.world_mut().entity_mut(child).insert(ChildOf(parent));
	let plain = app.world_mut().spawn(ChildOf(parent)).id();
	app.update();

	click(&mut app, child, PointerButton::Primary);
	assert!(toggle_of(&app, child).is_shown());
	assert!(!toggle_of(&app, parent).is_shown());

	// a click on an entity without a toggle bubbles up to the parent
	click(&mut app, plain, PointerButton::Primary);
	assert!(toggle_of(&app, parent).is_shown());
	assert!(toggle_of(&app, child).is_shown());
}

#[test]
fn toggle_without_mesh_material_is_ignored() {
	let mut app = test_app();
	let entity = app.world_mut().spawn(DecalToggle::<DecalMaterial>::default()).id();
	app.update();

	toggle(&mut app, entity);

	let toggle = toggle_of(&app, entity);
	assert!(toggle.material().is_none());
	assert!(!toggle.is_shown());
}

#[test]
fn toggle_on_plain_entity_does_nothing() {
	let mut app = test_app();
	let source = add_source(&mut app, DecalMaterial::default());
	let plain = app.world_mut().spawn(MeshMaterial3d(source.clone())).id();
	app.update();

	toggle(&mut app, plain);

	assert_eq!(uniform(&app, source.id()), 0.0);
	assert!(app.world().get::<DecalToggle<DecalMaterial>>(plain).is_none());
}
