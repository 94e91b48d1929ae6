use super::patch::{parallelogram_bounds, Patch, PatchShape, PlaneFrame};
use crate::primitives::Aabb;

/// Parallelogram with corners `Q`, `Q + u`, `Q + v` and `Q + u + v`
pub type Quad = Patch<Parallelogram>;

#[derive(Clone, Copy, Debug, Default)]
pub struct Parallelogram;

impl PatchShape for Parallelogram {
    fn from_frame(_frame: &PlaneFrame) -> Self {
        Parallelogram
    }

    fn is_interior(&self, alpha: f32, beta: f32) -> bool {
        (0.0..=1.0).contains(&alpha) && (0.0..=1.0).contains(&beta)
    }

    fn bounds(&self, frame: &PlaneFrame) -> Aabb {
        parallelogram_bounds(frame)
    }
}
