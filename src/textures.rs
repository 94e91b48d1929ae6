use crate::{Color, Interval};
use anyhow::Context;
use glam::{vec3, Vec3};
use image::RgbImage;
use std::{path::Path, sync::Arc};

/// Maps a surface coordinate and a point in space to a color
pub trait Texture: std::fmt::Debug + Send + Sync {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// A texture with a constant uniform color
#[derive(Debug)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.color
    }
}

/// A 3D checker pattern. Ignores u and v, only the hit point matters.
#[derive(Debug)]
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    pub fn from_colors(scale: f32, even: Color, odd: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let cell = (self.inv_scale * p).floor();
        let sum = cell.x as i64 + cell.y as i64 + cell.z as i64;

        if sum.rem_euclid(2) == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

pub struct ImageTexture {
    image: RgbImage,
}

impl std::fmt::Debug for ImageTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTexture")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl ImageTexture {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("Failed to load image texture {:?}", path))?
            .into_rgb8();

        log::debug!(
            "Loaded image texture {:?} ({}x{})",
            path,
            image.width(),
            image.height()
        );

        Ok(Self::new(image))
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        let (width, height) = self.image.dimensions();

        // Solid cyan makes missing texture data obvious in the render
        if width == 0 || height == 0 {
            return vec3(0.0, 1.0, 1.0);
        }

        // Flip v to go from surface to image coordinates
        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        let v = 1.0 - unit.clamp(v);

        let i = ((u * width as f32) as u32).min(width - 1);
        let j = ((v * height as f32) as u32).min(height - 1);
        let [r, g, b] = self.image.get_pixel(i, j).0;

        vec3(r as f32, g as f32, b as f32) / 255.0
    }
}
