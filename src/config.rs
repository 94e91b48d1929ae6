//! Scene description files.
//!
//! Scenes are written in TOML. Vectors are plain `[x, y, z]` arrays and
//! every material, texture and primitive picks its variant with `kind`:
//!
//! ```toml
//! [image]
//! width = 400
//! height = 225
//!
//! [camera]
//! look_from = [0.0, 0.0, 9.0]
//! look_at = [0.0, 0.0, 0.0]
//!
//! [materials.red]
//! kind = "lambertian"
//! texture = { kind = "solid", color = [1.0, 0.2, 0.2] }
//!
//! [[primitives]]
//! kind = "quad"
//! q = [-3.0, -2.0, 5.0]
//! u = [0.0, 0.0, -4.0]
//! v = [0.0, 4.0, 0.0]
//! material = "red"
//! ```

use anyhow::{bail, Context};
use glam::Vec3;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path, path::PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub image: ImageConfig,
    pub camera: CameraConfig,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialConfig>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            samples_per_pixel: 16,
        }
    }
}

impl ImageConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    #[serde(default = "default_vup")]
    pub vup: Vec3,
    /// Vertical field of view in degrees
    #[serde(default = "default_vfov")]
    pub vfov: f32,
    #[serde(default)]
    pub aperture: f32,
    pub focus_dist: Option<f32>,
}

fn default_vup() -> Vec3 {
    Vec3::Y
}

fn default_vfov() -> f32 {
    40.0
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialConfig {
    Lambertian { texture: TextureConfig },
    Emissive { texture: TextureConfig },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextureConfig {
    Solid {
        color: Vec3,
    },
    Checker {
        scale: f32,
        even: Box<TextureConfig>,
        odd: Box<TextureConfig>,
    },
    /// Path is relative to the scene file
    Image {
        path: PathBuf,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimitiveConfig {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    MovingSphere {
        start: Vec3,
        end: Vec3,
        radius: f32,
        material: String,
    },
    Quad {
        q: Vec3,
        u: Vec3,
        v: Vec3,
        material: String,
    },
    Triangle {
        q: Vec3,
        u: Vec3,
        v: Vec3,
        material: String,
    },
    Disk {
        center: Vec3,
        u: Vec3,
        v: Vec3,
        material: String,
    },
}

impl PrimitiveConfig {
    pub fn material(&self) -> &str {
        match self {
            PrimitiveConfig::Sphere { material, .. }
            | PrimitiveConfig::MovingSphere { material, .. }
            | PrimitiveConfig::Quad { material, .. }
            | PrimitiveConfig::Triangle { material, .. }
            | PrimitiveConfig::Disk { material, .. } => material,
        }
    }
}

impl SceneConfig {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let config: SceneConfig = toml::from_str(source).context("Invalid scene description")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {:?}", path))?;

        Self::parse(&source).with_context(|| format!("Failed to parse scene file {:?}", path))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let image = &self.image;
        if image.width == 0 || image.height == 0 {
            bail!("Image size must be non zero, got {}x{}", image.width, image.height);
        }
        if image.samples_per_pixel == 0 {
            bail!("At least one sample per pixel is required");
        }
        if !(self.camera.vfov > 0.0 && self.camera.vfov < 180.0) {
            bail!("Field of view must be in (0, 180) degrees, got {}", self.camera.vfov);
        }

        let camera = &self.camera;
        let view = camera.look_from - camera.look_at;
        if view.length_squared() == 0.0 {
            bail!("Camera look_from and look_at are both {:?}", camera.look_from);
        }
        if camera.vup.cross(view).length_squared() == 0.0 {
            bail!(
                "Camera vup {:?} is parallel to the view direction {:?}",
                camera.vup,
                view
            );
        }

        for primitive in &self.primitives {
            if !self.materials.contains_key(primitive.material()) {
                bail!("Unknown material {:?}", primitive.material());
            }
        }

        Ok(())
    }
}
