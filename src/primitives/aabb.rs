use crate::{Interval, Ray};
use glam::{vec3, Vec3};

/// Axes thinner than this are padded so flat primitives still have volume.
const MIN_THICKNESS: f32 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An axis aligned bounding box made of one interval per axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self {
            x: pad(x),
            y: pad(y),
            z: pad(z),
        }
    }

    /// The box with `a` and `b` as opposite corners, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);

        Self::new(
            Interval::new(min.x, max.x),
            Interval::new(min.y, max.y),
            Interval::new(min.z, max.z),
        )
    }

    // Create a union AABB of two AABBs that surrounds both of them
    pub fn enclosing(a: Aabb, b: Aabb) -> Self {
        Self {
            x: Interval::enclosing(a.x, b.x),
            y: Interval::enclosing(a.y, b.y),
            z: Interval::enclosing(a.z, b.z),
        }
    }

    pub fn axis_interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn min(&self) -> Vec3 {
        vec3(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Vec3 {
        vec3(self.x.max, self.y.max, self.z.max)
    }

    pub fn centroid(&self) -> Vec3 {
        0.5 * (self.min() + self.max())
    }

    // Returns the axis which has greatest extent
    pub fn longest_axis(&self) -> Axis {
        let (x, y, z) = (self.x.size(), self.y.size(), self.z.size());

        if x > y && x > z {
            Axis::X
        } else if y > z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    pub fn surface_area(&self) -> f32 {
        let d = self.max() - self.min();
        2.0 * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    /// Slab test: does the ray pass through the box for some t in `ray_t`.
    pub fn hit(&self, ray: Ray, ray_t: Interval) -> bool {
        let origin = ray.origin();
        let inv_direction = ray.inv_direction();
        let mut t = ray_t;

        for (slab, o, inv) in [
            (self.x, origin.x, inv_direction.x),
            (self.y, origin.y, inv_direction.y),
            (self.z, origin.z, inv_direction.z),
        ] {
            let t0 = (slab.min - o) * inv;
            let t1 = (slab.max - o) * inv;

            // NaN from 0 * inf (origin on a slab plane, ray parallel to it)
            // falls through both comparisons and leaves t untouched.
            let (near, far) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            if near > t.min {
                t.min = near;
            }
            if far < t.max {
                t.max = far;
            }

            if t.max <= t.min {
                return false;
            }
        }

        true
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

fn pad(interval: Interval) -> Interval {
    if interval.size() < MIN_THICKNESS && interval.size() >= 0.0 {
        interval.expand(MIN_THICKNESS)
    } else {
        interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_orders_extrema() {
        let b = Aabb::from_points(vec3(1.0, -2.0, 3.0), vec3(-1.0, 2.0, -3.0));
        assert_eq!(b.min(), vec3(-1.0, -2.0, -3.0));
        assert_eq!(b.max(), vec3(1.0, 2.0, 3.0));
        assert_eq!(b.centroid(), Vec3::ZERO);
    }

    #[test]
    fn flat_boxes_are_padded() {
        let b = Aabb::from_points(vec3(-1.0, -1.0, 0.0), vec3(1.0, 1.0, 0.0));
        assert!(b.z.size() >= MIN_THICKNESS);
        assert!(b.z.surrounds(0.0));
        assert_eq!(b.x.size(), 2.0);
    }

    #[test]
    fn empty_is_not_padded() {
        assert_eq!(Aabb::default(), Aabb::EMPTY);
        assert_eq!(
            Aabb::new(Interval::EMPTY, Interval::EMPTY, Interval::EMPTY),
            Aabb::EMPTY
        );
    }

    #[test]
    fn enclosing_union() {
        let a = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_points(vec3(2.0, -1.0, 0.5), vec3(3.0, 0.5, 0.75));
        let u = Aabb::enclosing(a, b);
        assert_eq!(u.min(), vec3(0.0, -1.0, 0.0));
        assert_eq!(u.max(), vec3(3.0, 1.0, 1.0));
        assert_eq!(Aabb::enclosing(Aabb::EMPTY, a), a);
    }

    #[test]
    fn longest_axis_and_area() {
        let b = Aabb::from_points(Vec3::ZERO, vec3(1.0, 4.0, 2.0));
        assert_eq!(b.longest_axis(), Axis::Y);
        assert_eq!(b.axis_interval(Axis::Z), Interval::new(0.0, 2.0));
        assert_eq!(b.surface_area(), 2.0 * (4.0 + 2.0 + 8.0));
    }

    #[test]
    fn slab_hit_and_miss() {
        let b = Aabb::from_points(vec3(-1.0, -1.0, -1.0), Vec3::ONE);
        let t = Interval::new(0.001, f32::INFINITY);

        assert!(b.hit(Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0)), t));
        assert!(!b.hit(Ray::new(vec3(0.0, 3.0, -5.0), vec3(0.0, 0.0, 1.0)), t));
        // Box lies behind the ray
        assert!(!b.hit(Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0)), t));
        // Interval ends before the box
        assert!(!b.hit(
            Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0)),
            Interval::new(0.001, 2.0)
        ));
    }

    #[test]
    fn coplanar_box_is_still_hit() {
        let b = Aabb::from_points(vec3(-1.0, -1.0, 0.0), vec3(1.0, 1.0, 0.0));
        let ray = Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0));
        assert!(b.hit(ray, Interval::new(0.001, f32::INFINITY)));

        let grazing = Ray::new(vec3(-5.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(b.hit(grazing, Interval::new(0.001, f32::INFINITY)));
    }
}
