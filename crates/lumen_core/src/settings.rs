//! Serializable scene settings.
//!
//! Mirrors the scene document the outer shell hands over:
//!
//! ```json
//! {
//!     "resolution": { "width": 640, "height": 480 },
//!     "camera": {
//!         "position": [0.0, 1.0, -5.0],
//!         "lookAt": [0.0, 0.0, 0.0],
//!         "up": [0.0, 1.0, 0.0]
//!     }
//! }
//! ```

use lumen_math::{MathResult, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// Output image size as written in the document. Values below 1 are
/// clamped when the scene is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSettings {
    pub width: i32,
    pub height: i32,
}

/// Camera placement: eye position, target point and up direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    pub up: [f32; 3],
}

impl CameraSettings {
    /// Camera-to-world transform for these settings.
    pub fn to_transform(&self) -> MathResult<Transform> {
        Transform::look_at(
            Point3::from(self.position),
            Point3::from(self.look_at),
            Vector3::from(self.up),
        )
    }
}

/// Top-level scene document. Both sections are required to build a
/// [`Scene`](crate::Scene); they are optional here so a missing section can
/// be reported by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraSettings>,
}
