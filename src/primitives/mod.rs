//! This module is full of primitives that all impl Intersect

mod aabb;
mod disk;
mod patch;
mod quad;
mod sphere;
mod triangle;

pub use aabb::*;
pub use disk::*;
pub use patch::{Patch, PatchShape, PlaneFrame};
pub use quad::*;
pub use sphere::*;
pub use triangle::*;

use crate::{
    interval::Interval,
    ray::{HitRecord, Ray},
};

/// Computes whether a ray intersects a primitive
pub trait Intersect: Send + Sync {
    /// Computes the intersection between the ray and the primitive, accepting
    /// only ray parameters inside `ray_t`
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord>;

    /// Computes whether there is an intersection between the ray and the primitive.
    /// Could be cheaper than "intersection".
    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        self.intersection(ray, ray_t).is_some()
    }

    /// Box enclosing the primitive, fixed at construction
    fn bounds(&self) -> Aabb;
}

/// Every kind of geometry a scene can hold
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    MovingSphere(MovingSphere),
    Quad(Quad),
    Triangle(Triangle),
    Disk(Disk),
}

impl Intersect for Primitive {
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(p) => p.intersection(ray, ray_t),
            Primitive::MovingSphere(p) => p.intersection(ray, ray_t),
            Primitive::Quad(p) => p.intersection(ray, ray_t),
            Primitive::Triangle(p) => p.intersection(ray, ray_t),
            Primitive::Disk(p) => p.intersection(ray, ray_t),
        }
    }

    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        match self {
            Primitive::Sphere(p) => p.has_intersection(ray, ray_t),
            Primitive::MovingSphere(p) => p.has_intersection(ray, ray_t),
            Primitive::Quad(p) => p.has_intersection(ray, ray_t),
            Primitive::Triangle(p) => p.has_intersection(ray, ray_t),
            Primitive::Disk(p) => p.has_intersection(ray, ray_t),
        }
    }

    fn bounds(&self) -> Aabb {
        match self {
            Primitive::Sphere(p) => p.bounds(),
            Primitive::MovingSphere(p) => p.bounds(),
            Primitive::Quad(p) => p.bounds(),
            Primitive::Triangle(p) => p.bounds(),
            Primitive::Disk(p) => p.bounds(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(p: Sphere) -> Self {
        Primitive::Sphere(p)
    }
}

impl From<MovingSphere> for Primitive {
    fn from(p: MovingSphere) -> Self {
        Primitive::MovingSphere(p)
    }
}

impl From<Quad> for Primitive {
    fn from(p: Quad) -> Self {
        Primitive::Quad(p)
    }
}

impl From<Triangle> for Primitive {
    fn from(p: Triangle) -> Self {
        Primitive::Triangle(p)
    }
}

impl From<Disk> for Primitive {
    fn from(p: Disk) -> Self {
        Primitive::Disk(p)
    }
}

/// A flat list of primitives, tested one after the other
#[derive(Clone, Debug, Default)]
pub struct PrimitiveList {
    primitives: Vec<Primitive>,
    bbox: Aabb,
}

impl PrimitiveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        let primitive = primitive.into();
        self.bbox = Aabb::enclosing(self.bbox, primitive.bounds());
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }
}

impl<P: Into<Primitive>> FromIterator<P> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = PrimitiveList::new();
        for primitive in iter {
            list.push(primitive);
        }
        list
    }
}

impl Intersect for PrimitiveList {
    // Narrows the interval to the closest hit so far, so the last hit kept is the nearest
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersection(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }

    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.has_intersection(ray, ray_t))
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}
