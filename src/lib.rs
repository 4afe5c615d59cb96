//! Generate a C single-header of node bounds from a design scene tree.
//!
//! Each selected root and its visible descendants become one
//! `const float <identifier>[4] = {x, y, w, h};` entry, declared under an
//! include guard and defined behind an opt-in `_IMPL` macro.

pub mod cli;
pub mod codegen;
pub mod plugin;
pub mod report;
pub mod scene;

pub use codegen::generator::{GenerateError, GeneratorOptions, generate};
pub use scene::scene_model::{NodeKind, SceneNode, Selection};
