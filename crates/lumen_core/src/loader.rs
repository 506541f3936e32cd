//! Scene loading from JSON scene documents.

use std::path::Path;
use std::time::Instant;

use lumen_math::MathError;
use thiserror::Error;

use crate::scene::{Resolution, Scene};
use crate::settings::SceneSettings;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing \"{0}\" section")]
    MissingSection(&'static str),

    #[error("Invalid camera: {0}")]
    Math(#[from] MathError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

impl Scene {
    /// Build a scene from parsed settings.
    pub fn from_settings(name: impl Into<String>, settings: &SceneSettings) -> LoadResult<Scene> {
        let resolution = settings
            .resolution
            .ok_or(LoadError::MissingSection("resolution"))?;
        let camera = settings.camera.ok_or(LoadError::MissingSection("camera"))?;

        if resolution.width < 1 || resolution.height < 1 {
            log::warn!(
                "Resolution {}x{} clamped to at least 1x1",
                resolution.width,
                resolution.height
            );
        }

        Ok(Scene::new(
            name,
            Resolution::new(resolution.width, resolution.height),
            camera.to_transform()?,
        ))
    }
}

/// Load a scene document from disk.
///
/// The scene is named after the file stem.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scene.json")?;
/// println!("{}x{}", scene.width(), scene.height());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(name, &text)
}

/// Load a scene from an in-memory JSON document.
pub fn load_scene_from_str(name: &str, text: &str) -> LoadResult<Scene> {
    let start = Instant::now();

    let settings: SceneSettings = serde_json::from_str(text)?;
    let scene = Scene::from_settings(name, &settings)?;

    log::info!(
        "Scene {} ({}x{}) parsed in {:?}",
        scene.name,
        scene.width(),
        scene.height(),
        start.elapsed()
    );

    Ok(scene)
}
