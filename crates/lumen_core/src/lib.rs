//! Lumen Core - scene configuration for the lumen renderer.
//!
//! This crate provides:
//!
//! - **Settings**: `SceneSettings`, the serde model of a JSON scene document
//! - **Scene types**: `Scene` and `Resolution`, with the camera expressed as a
//!   `lumen_math::Transform`
//! - **Loading**: `load_scene` / `load_scene_from_str`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Camera at {}", scene.camera_position());
//! ```

pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{Resolution, Scene};
pub use settings::{CameraSettings, ResolutionSettings, SceneSettings};
