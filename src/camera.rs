use crate::Ray;
use glam::Vec3;
use rand::Rng;
use rand_distr::{Distribution, UnitDisc};

#[derive(Debug)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// `focus_dist` defaults to the distance between `origin` and `target`.
    pub fn new(
        origin: Vec3,
        target: Vec3,
        up: Vec3,
        vfov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: Option<f32>,
    ) -> Self {
        let lens_radius = aperture / 2.0;
        let focus_dist = focus_dist.unwrap_or_else(|| (origin - target).length());
        let theta = vfov.to_radians();
        let half_height = f32::tan(theta / 2.0);
        let half_width = aspect * half_height;
        let w = (origin - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        let lower_left_corner =
            origin - half_width * focus_dist * u - half_height * focus_dist * v - focus_dist * w;
        let horizontal = 2.0 * half_width * focus_dist * u;
        let vertical = 2.0 * half_height * focus_dist * v;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius,
        }
    }

    /// A ray through the viewport at (s, t) in [0, 1]^2, from a random point
    /// on the lens and at a random instant of the shutter interval [0, 1).
    pub fn ray<R: Rng>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let [dx, dy]: [f32; 2] = UnitDisc.sample(rng);
        let offset = self.lens_radius * (self.u * dx + self.v * dy);
        let time = rng.gen::<f32>();

        Ray::with_time(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
            time,
        )
    }
}
