pub mod loader;
pub mod scene_model;
