//! Bounding volumes and frustum culling.

use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from its center and half extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// A plane `normal . p + d = 0` with a unit normal pointing inside the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Builds a normalized plane from packed `(a, b, c, d)` coefficients.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.xyz();
        let len = normal.length();
        if len <= f32::EPSILON {
            return Self {
                normal: Vec3::ZERO,
                d: 0.0,
            };
        }
        Self {
            normal: normal / len,
            d: coefficients.w / len,
        }
    }

    /// Signed distance from the plane; positive on the inner side.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// The six clipping planes of a camera (left, right, bottom, top, near, far).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the planes from a view-projection matrix (Gribb-Hartmann).
    ///
    /// Assumes a `[0, 1]` clip depth range, as produced by `glam`'s `*_rh`
    /// projection constructors.
    #[must_use]
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        let r0 = view_projection.row(0);
        let r1 = view_projection.row(1);
        let r2 = view_projection.row(2);
        let r3 = view_projection.row(3);

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0),
                Plane::from_coefficients(r3 - r0),
                Plane::from_coefficients(r3 + r1),
                Plane::from_coefficients(r3 - r1),
                Plane::from_coefficients(r2),
                Plane::from_coefficients(r3 - r2),
            ],
        }
    }

    /// Returns whether the point is inside all six planes.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.signed_distance(point) >= 0.0)
    }

    /// Conservative box test: `false` only when the box is fully outside one plane.
    #[must_use]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.planes.iter().all(|plane| {
            // corner furthest along the plane normal
            let positive = Vec3::select(plane.normal.cmpge(Vec3::ZERO), aabb.max, aabb.min);
            plane.signed_distance(positive) >= 0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frustum() -> Frustum {
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        Frustum::from_view_projection(&(proj * view))
    }

    #[test]
    fn test_aabb_corners_are_ordered() {
        let aabb = Aabb::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_frustum_contains_point() {
        let frustum = test_frustum();
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -5.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 5.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
        assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, -5.0)));
    }

    #[test]
    fn test_frustum_planes_are_normalized() {
        for plane in test_frustum().planes {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_intersects_aabb() {
        let frustum = test_frustum();
        let inside = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE);
        let behind = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE);
        let beside = Aabb::from_center_half_extents(Vec3::new(40.0, 0.0, -10.0), Vec3::ONE);
        // straddles the left plane
        let straddling = Aabb::from_center_half_extents(Vec3::new(-10.5, 0.0, -10.0), Vec3::ONE);

        assert!(frustum.intersects_aabb(&inside));
        assert!(!frustum.intersects_aabb(&behind));
        assert!(!frustum.intersects_aabb(&beside));
        assert!(frustum.intersects_aabb(&straddling));
    }

    #[test]
    fn test_degenerate_plane() {
        let plane = Plane::from_coefficients(Vec4::new(0.0, 0.0, 0.0, 3.0));
        assert_eq!(plane.normal, Vec3::ZERO);
        assert_eq!(plane.signed_distance(Vec3::splat(7.0)), 0.0);
    }
}
