use crate::{material::Material, primitives::Aabb, HitRecord, Interval, Intersect, Ray};
use glam::Vec3;
use std::{f32::consts::PI, sync::Arc};

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        let radius = clamp_radius(radius);

        Self {
            center,
            radius,
            material,
            bbox: bounds_at(center, radius),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord> {
        hit_sphere(self.center, self.radius, &self.material, ray, ray_t)
    }

    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        nearest_root(self.center, self.radius, ray, ray_t).is_some()
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}

/// A sphere whose center moves linearly from `start` at time 0 to `end` at time 1
#[derive(Clone, Debug)]
pub struct MovingSphere {
    start: Vec3,
    end: Vec3,
    radius: f32,
    material: Arc<Material>,
    bbox: Aabb,
}

impl MovingSphere {
    pub fn new(start: Vec3, end: Vec3, radius: f32, material: Arc<Material>) -> Self {
        let radius = clamp_radius(radius);

        // Bound the whole sweep, not just the start position
        let bbox = Aabb::enclosing(bounds_at(start, radius), bounds_at(end, radius));

        Self {
            start,
            end,
            radius,
            material,
            bbox,
        }
    }

    /// Center at the given shutter time. Exact at both ends of the motion.
    pub fn center(&self, time: f32) -> Vec3 {
        (1.0 - time) * self.start + time * self.end
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersect for MovingSphere {
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord> {
        let center = self.center(ray.time());
        hit_sphere(center, self.radius, &self.material, ray, ray_t)
    }

    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        nearest_root(self.center(ray.time()), self.radius, ray, ray_t).is_some()
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}

fn clamp_radius(radius: f32) -> f32 {
    if radius < 0.0 {
        log::warn!("Sphere radius {} is negative, clamping to 0", radius);
        0.0
    } else {
        radius
    }
}

fn bounds_at(center: Vec3, radius: f32) -> Aabb {
    let rvec = Vec3::splat(radius);
    Aabb::from_points(center - rvec, center + rvec)
}

// Solves |origin + t * direction - center|^2 = radius^2 with the half-b form
// and returns the smallest root strictly inside ray_t.
fn nearest_root(center: Vec3, radius: f32, ray: Ray, ray_t: Interval) -> Option<f32> {
    // A point sphere has no surface, so no normal to report
    if radius <= 0.0 {
        return None;
    }

    let oc = center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    [(h - sqrtd) / a, (h + sqrtd) / a]
        .into_iter()
        .find(|&root| ray_t.surrounds(root))
}

fn hit_sphere(
    center: Vec3,
    radius: f32,
    material: &Arc<Material>,
    ray: Ray,
    ray_t: Interval,
) -> Option<HitRecord> {
    let t = nearest_root(center, radius, ray, ray_t)?;

    // Dividing by the radius is enough to normalize on a sphere
    let outward_normal = (ray.at(t) - center) / radius;

    Some(HitRecord::new(
        ray,
        t,
        outward_normal,
        sphere_uv(outward_normal),
        material.clone(),
    ))
}

/// Spherical texture coordinates of a point on the unit sphere.
///
/// u is the angle around the Y axis starting from X = -1, v the angle from
/// Y = -1 up to Y = +1, both mapped to [0, 1].
pub fn sphere_uv(p: Vec3) -> (f32, f32) {
    let theta = (-p.y).acos();
    let phi = (-p.z).atan2(p.x) + PI;

    (phi / (2.0 * PI), theta / PI)
}
