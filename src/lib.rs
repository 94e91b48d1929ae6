//! Ray/geometry intersection core of an offline path tracer.
//!
//! Primitives (spheres, moving spheres, quads, triangles and disks) share one
//! contract, [`Intersect`]: intersect a ray inside a parameter interval and
//! report a bounding box. Everything else in the crate (textures, materials,
//! camera, scene files and the preview renderer) is built around it.

pub mod camera;
pub mod config;
pub mod interval;
pub mod material;
pub mod primitives;
pub mod ray;
pub mod render;
pub mod scene;
pub mod textures;

pub use crate::{
    interval::Interval,
    primitives::{Aabb, Intersect, Primitive, PrimitiveList},
    ray::{HitRecord, Ray},
    scene::Scene,
};

/// Linear RGB
pub type Color = glam::Vec3;

pub type DefaultRng = rand_xoshiro::Xoshiro256Plus;
