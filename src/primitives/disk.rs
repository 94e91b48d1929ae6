use super::patch::{parallelogram_bounds, Patch, PatchShape, PlaneFrame};
use crate::primitives::Aabb;

/// Elliptical disk centered on `Q` with semi-axes along `u` and `v`.
///
/// A circular disk needs `u` and `v` orthogonal and of equal length, nothing
/// checks that.
pub type Disk = Patch<Ellipse>;

#[derive(Clone, Copy, Debug)]
pub struct Ellipse {
    u_length_squared: f32,
    v_length_squared: f32,
}

impl PatchShape for Ellipse {
    fn from_frame(frame: &PlaneFrame) -> Self {
        Self {
            u_length_squared: frame.u.length_squared(),
            v_length_squared: frame.v.length_squared(),
        }
    }

    fn is_interior(&self, alpha: f32, beta: f32) -> bool {
        alpha * alpha / self.u_length_squared + beta * beta / self.v_length_squared <= 1.0
    }

    fn bounds(&self, frame: &PlaneFrame) -> Aabb {
        // Interior points reach Q + alpha * u + beta * v with |alpha| <= |u|
        // and |beta| <= |v|, so the extent vectors are u * |u| and v * |v|.
        let PlaneFrame { q, u, v, .. } = *frame;
        let eu = u * self.u_length_squared.sqrt();
        let ev = v * self.v_length_squared.sqrt();
        let extent = Aabb::enclosing(
            Aabb::from_points(q - eu - ev, q + eu + ev),
            Aabb::from_points(q + eu - ev, q - eu + ev),
        );

        Aabb::enclosing(parallelogram_bounds(frame), extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Material, Interval, Intersect, Ray};
    use approx::assert_abs_diff_eq;
    use glam::{vec3, Vec3};
    use std::sync::Arc;

    fn disk(u: Vec3, v: Vec3) -> Disk {
        Disk::new(
            vec3(0.0, 1.0, 0.0),
            u,
            v,
            Arc::new(Material::lambertian(vec3(0.9, 0.9, 0.1))),
        )
    }

    fn up_at(x: f32, z: f32) -> Ray {
        Ray::new(vec3(x, -1.0, z), vec3(0.0, 1.0, 0.0))
    }

    fn forward() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn unit_disk_hits_inside_circle() {
        let d = disk(vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0));

        let hit = d.intersection(up_at(0.3, 0.4), forward()).unwrap();
        assert_abs_diff_eq!(hit.t, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.u, 0.4, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.v, 0.3, epsilon = 1e-6);
        assert!(hit.p.abs_diff_eq(vec3(0.3, 1.0, 0.4), 1e-6));

        // Rim is inclusive
        assert!(d.has_intersection(up_at(1.0, 0.0), forward()));
        // Inside the bounding square but outside the circle
        assert!(!d.has_intersection(up_at(0.8, 0.8), forward()));
    }

    #[test]
    fn negative_plane_coordinates_are_inside() {
        let d = disk(vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0));
        let hit = d.intersection(up_at(-0.5, -0.5), forward()).unwrap();
        assert_abs_diff_eq!(hit.u, -0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.v, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn ellipse_test_scales_by_axis_lengths() {
        // alpha^2 / |u|^2 + beta^2 / |v|^2 <= 1 with |u| = 2, |v| = 1
        let d = disk(vec3(0.0, 0.0, 2.0), vec3(1.0, 0.0, 0.0));

        // alpha = 1.5 (z = 3), beta = 0
        assert!(d.has_intersection(up_at(0.0, 3.0), forward()));
        // alpha = 2.5 (z = 5) is past the semi-axis
        assert!(!d.has_intersection(up_at(0.0, 5.0), forward()));
        // beta = 1.2 is past the other semi-axis
        assert!(!d.has_intersection(up_at(1.2, 0.0), forward()));
    }

    #[test]
    fn bounds_contain_every_interior_hit() {
        let d = disk(vec3(0.0, 0.0, 2.0), vec3(1.0, 0.0, 0.0));
        let bbox = d.bounds();

        for (x, z) in [(0.0, 3.9), (0.0, -3.9), (0.99, 0.0), (-0.99, 0.0), (0.5, 2.0)] {
            let hit = d.intersection(up_at(x, z), forward()).unwrap();
            assert!(bbox.x.contains(hit.p.x), "{:?}", hit.p);
            assert!(bbox.y.contains(hit.p.y), "{:?}", hit.p);
            assert!(bbox.z.contains(hit.p.z), "{:?}", hit.p);
        }

        // And still the four corners spanned by Q, u and v
        assert!(bbox.z.contains(2.0) && bbox.x.contains(1.0));
    }
}
