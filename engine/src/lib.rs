pub mod decal;
pub mod shaders;

pub use decal::{DecalToggle, DecalTogglePlugin, FloatUniforms, ToggleDecal};
pub use shaders::decal_material::DecalMaterial;

// Users should register:
// - MaterialPlugin::<M> (rendering) or at least Assets<M>
// - DecalTogglePlugin::<M>
// - toggle_on_primary_click::<M> as an observer, if clicks should drive the toggle
// Then spawn entities with MeshMaterial3d<M> and DecalToggle::<M>::default()
