use super::patch::{parallelogram_bounds, Patch, PatchShape, PlaneFrame};
use crate::primitives::Aabb;

/// Triangle with vertices `Q`, `Q + u` and `Q + v`
pub type Triangle = Patch<Tri>;

/// Open triangle: points exactly on an edge or a vertex are not part of it,
/// so a ray through an edge shared by two triangles hits neither.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tri;

impl PatchShape for Tri {
    fn from_frame(_frame: &PlaneFrame) -> Self {
        Tri
    }

    fn is_interior(&self, alpha: f32, beta: f32) -> bool {
        alpha > 0.0 && beta > 0.0 && alpha + beta < 1.0
    }

    // The box of the enclosing parallelogram, looser than needed but cheap
    fn bounds(&self, frame: &PlaneFrame) -> Aabb {
        parallelogram_bounds(frame)
    }
}
