//! Flat primitives lying in a plane.
//!
//! Every patch is described by an anchor point `Q` and two edge vectors `u`
//! and `v` spanning its plane. A ray is intersected with the plane once, the
//! hit point is expressed in the (alpha, beta) basis of `u` and `v`, and the
//! shape decides whether those coordinates fall inside it.

use crate::{material::Material, primitives::Aabb, HitRecord, Interval, Intersect, Ray};
use glam::Vec3;
use std::sync::Arc;

/// Rays this close to parallel with the plane never hit it
const PARALLEL_EPSILON: f32 = 1e-8;

/// Squared sine of the angle between edges below which they span no plane
const DEGENERATE_SINE_SQUARED: f32 = 1e-12;

/// The plane of a patch and the quantities cached to intersect it.
#[derive(Clone, Copy, Debug)]
pub struct PlaneFrame {
    pub q: Vec3,
    pub u: Vec3,
    pub v: Vec3,
    /// Unit plane normal
    pub normal: Vec3,
    /// Plane constant: `dot(normal, x) == d` for every x in the plane
    pub d: f32,
    /// `n / dot(n, n)` with `n = u x v`, projects hit points onto (alpha, beta)
    pub w: Vec3,
}

impl PlaneFrame {
    pub fn new(q: Vec3, u: Vec3, v: Vec3) -> Self {
        let n = u.cross(v);
        let normal = n.normalize();
        let frame = Self {
            q,
            u,
            v,
            normal,
            d: normal.dot(q),
            w: n / n.dot(n),
        };

        if frame.is_degenerate() {
            log::warn!(
                "Patch edges {:?} and {:?} are parallel, its plane is undefined",
                u,
                v
            );
        }

        frame
    }

    /// Whether the edges are too close to parallel (or zero) to span a plane.
    /// Relative to the edge lengths, so tiny patches are still valid.
    pub fn is_degenerate(&self) -> bool {
        let n = self.u.cross(self.v);
        let scale = self.u.length_squared() * self.v.length_squared();
        n.length_squared() <= DEGENERATE_SINE_SQUARED * scale
    }

    /// Intersects the ray with the infinite plane.
    ///
    /// Returns the ray parameter and the (alpha, beta) coordinates of the hit
    /// point when `t` lies inside `ray_t` (inclusive).
    pub fn intersect(&self, ray: Ray, ray_t: Interval) -> Option<(f32, f32, f32)> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.d - self.normal.dot(ray.origin())) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let planar = ray.at(t) - self.q;
        let alpha = self.w.dot(planar.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar));

        Some((t, alpha, beta))
    }
}

/// The part of a patch's plane that belongs to it.
pub trait PatchShape: Clone + std::fmt::Debug + Send + Sync {
    fn from_frame(frame: &PlaneFrame) -> Self;

    /// Whether plane coordinates (alpha, beta) lie inside the shape. The
    /// coordinates become the texture (u, v) of the hit.
    fn is_interior(&self, alpha: f32, beta: f32) -> bool;

    fn bounds(&self, frame: &PlaneFrame) -> Aabb;
}

/// A planar primitive with a shape-specific interior.
#[derive(Clone, Debug)]
pub struct Patch<S> {
    frame: PlaneFrame,
    shape: S,
    material: Arc<Material>,
    bbox: Aabb,
}

impl<S: PatchShape> Patch<S> {
    pub fn new(q: Vec3, u: Vec3, v: Vec3, material: Arc<Material>) -> Self {
        let frame = PlaneFrame::new(q, u, v);
        let shape = S::from_frame(&frame);
        let bbox = shape.bounds(&frame);

        Self {
            frame,
            shape,
            material,
            bbox,
        }
    }

    pub fn frame(&self) -> &PlaneFrame {
        &self.frame
    }
}

impl<S: PatchShape> Intersect for Patch<S> {
    fn intersection(&self, ray: Ray, ray_t: Interval) -> Option<HitRecord> {
        let (t, alpha, beta) = self.frame.intersect(ray, ray_t)?;
        if !self.shape.is_interior(alpha, beta) {
            return None;
        }

        Some(HitRecord::new(
            ray,
            t,
            self.frame.normal,
            (alpha, beta),
            self.material.clone(),
        ))
    }

    fn has_intersection(&self, ray: Ray, ray_t: Interval) -> bool {
        self.frame
            .intersect(ray, ray_t)
            .map_or(false, |(_, alpha, beta)| self.shape.is_interior(alpha, beta))
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}

/// Box around the parallelogram spanned by the frame: the union of its two
/// diagonals covers all four corners.
pub(crate) fn parallelogram_bounds(frame: &PlaneFrame) -> Aabb {
    let PlaneFrame { q, u, v, .. } = *frame;

    Aabb::enclosing(
        Aabb::from_points(q, q + u + v),
        Aabb::from_points(q + u, q + v),
    )
}
