use crate::material::Material;
use glam::Vec3;
use std::sync::Arc;

/// The ray data type
///
/// Points along the ray are `origin + t * direction`. `time` is the shutter
/// instant the ray was sampled at, used by moving primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
    time: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    pub fn with_time(origin: Vec3, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
            time,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Componentwise `1 / direction`, infinite on axes the ray does not move along.
    pub fn inv_direction(&self) -> Vec3 {
        self.inv_direction
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Everything a material needs to know about a surface interaction.
///
/// Only produced by a successful intersection, so every field is valid:
/// `p == ray.at(t)` and `normal` is unit length and faces against the ray.
#[derive(Clone, Debug)]
pub struct HitRecord {
    pub t: f32,
    pub p: Vec3,
    pub normal: Vec3,
    pub material: Arc<Material>,
    pub u: f32,
    pub v: f32,
    /// True if the ray struck the side the outward normal points to.
    pub front_face: bool,
}

impl HitRecord {
    /// `outward_normal` must be unit length and point away from the interior.
    pub fn new(
        ray: Ray,
        t: f32,
        outward_normal: Vec3,
        (u, v): (f32, f32),
        material: Arc<Material>,
    ) -> Self {
        let mut rec = Self {
            t,
            p: ray.at(t),
            normal: outward_normal,
            material,
            u,
            v,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    pub fn set_face_normal(&mut self, ray: Ray, outward_normal: Vec3) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    fn material() -> Arc<Material> {
        Arc::new(Material::lambertian(vec3(0.5, 0.5, 0.5)))
    }

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(vec3(1.0, 2.0, 3.0), vec3(0.0, 0.0, 2.0));
        assert_eq!(ray.at(0.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(ray.at(1.5), vec3(1.0, 2.0, 6.0));
        assert_eq!(ray.time(), 0.0);
    }

    #[test]
    fn inverse_direction_is_cached() {
        let ray = Ray::with_time(Vec3::ZERO, vec3(2.0, -4.0, 0.0), 0.25);
        assert_eq!(ray.inv_direction().x, 0.5);
        assert_eq!(ray.inv_direction().y, -0.25);
        assert!(ray.inv_direction().z.is_infinite());
        assert_eq!(ray.time(), 0.25);
    }

    #[test]
    fn face_normal_opposes_ray() {
        let outward = vec3(0.0, 0.0, -1.0);

        let towards = Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0));
        let rec = HitRecord::new(towards, 4.0, outward, (0.0, 0.0), material());
        assert!(rec.front_face);
        assert_eq!(rec.normal, outward);
        assert_eq!(rec.p, vec3(0.0, 0.0, -1.0));

        let away = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0));
        let rec = HitRecord::new(away, 1.0, outward, (0.0, 0.0), material());
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -outward);
        assert!(rec.normal.dot(away.direction()) < 0.0);
    }
}
