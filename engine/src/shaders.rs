pub mod decal_material;
