//! Single threaded preview renderer.
//!
//! Primary rays only: each hit is shaded by what its material reports at the
//! hit point, lit from the eye. Good enough to inspect geometry, normals and
//! texture coordinates without a full light transport integrator.

use crate::{primitives::Intersect, Color, DefaultRng, Interval, Ray, Scene};
use glam::{vec3, Vec3};
use image::{Rgb, RgbImage};
use itertools::Itertools;
use rand::prelude::*;

/// Closest hit distance accepted, keeps rays from re-hitting their origin
const T_MIN: f32 = 0.001;

/// Gamma 2 transfer, negative components go to 0
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma corrects and quantizes a linear color to 8 bits per channel
pub fn to_rgb8(color: Color) -> Rgb<u8> {
    let intensity = Interval::new(0.0, 0.999);
    let byte = |c: f32| (256.0 * intensity.clamp(linear_to_gamma(c))) as u8;

    Rgb([byte(color.x), byte(color.y), byte(color.z)])
}

// Background seen by rays that escape the scene
fn sky(ray: Ray) -> Color {
    let dir = ray.direction().normalize();
    let t = 0.5 * (dir.y + 1.0);
    (1.0 - t) * vec3(1.0, 1.0, 1.0) + t * vec3(0.5, 0.7, 1.0)
}

pub fn ray_color(ray: Ray, world: &impl Intersect) -> Color {
    match world.intersection(ray, Interval::new(T_MIN, f32::INFINITY)) {
        Some(hit) => {
            let facing = hit.normal.dot(-ray.direction().normalize()).max(0.0);
            hit.material.emitted(&hit) + hit.material.albedo(&hit) * facing
        }
        None => sky(ray),
    }
}

pub fn render(scene: &Scene, seed: u64) -> RgbImage {
    let width = scene.image.width;
    let height = scene.image.height;
    let samples = scene.image.samples_per_pixel;
    let mut rng = DefaultRng::seed_from_u64(seed);
    let mut image = RgbImage::new(width, height);

    log::info!(
        "Rendering {}x{} at {} samples per pixel",
        width,
        height,
        samples
    );
    let start = std::time::Instant::now();

    for (y, x) in (0..height).cartesian_product(0..width) {
        if x == 0 {
            log::debug!("Scanlines remaining: {}", height - y);
        }

        let mut color = Vec3::ZERO;
        for _ in 0..samples {
            // Image rows go top to bottom, viewport t goes bottom to top
            let s = (x as f32 + rng.gen::<f32>()) / width as f32;
            let t = 1.0 - (y as f32 + rng.gen::<f32>()) / height as f32;
            color += ray_color(scene.camera.ray(s, t, &mut rng), &scene.world);
        }

        image.put_pixel(x, y, to_rgb8(color / samples as f32));
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
