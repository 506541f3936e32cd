//! Scene representation handed to the renderer.
//!
//! A scene is the output resolution plus the camera-to-world transform
//! built from the configured eye/target/up triple.

use lumen_math::{Point3, Transform};

/// Output image size in pixels. Both dimensions are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Create a resolution, clamping each dimension to at least 1.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1) as u32,
            height: height.max(1) as u32,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A loaded scene.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Output resolution
    pub resolution: Resolution,

    /// Camera-to-world transform. Its inverse takes world-space rays into
    /// camera space.
    pub camera: Transform,
}

impl Scene {
    /// Create a scene from its parts.
    pub fn new(name: impl Into<String>, resolution: Resolution, camera: Transform) -> Self {
        Self {
            name: name.into(),
            resolution,
            camera,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    /// World-space camera position.
    pub fn camera_position(&self) -> Point3 {
        self.camera * Point3::ORIGIN
    }

    /// World-to-camera transform.
    pub fn world_to_camera(&self) -> Transform {
        self.camera.inverse()
    }
}
