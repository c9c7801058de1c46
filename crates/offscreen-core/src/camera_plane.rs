//! The camera plane and behind-camera correction.
//!
//! A perspective projection is undefined on the plane through the camera
//! perpendicular to its forward axis, and mirrors points that lie behind it.
//! Markers are moved in front of that plane before projection so that the
//! projected direction from the screen center stays meaningful.

use glam::Vec3;

use crate::camera::CameraState;

/// Which side of the camera plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Strictly in front of the camera.
    Front,
    /// Exactly on the camera plane.
    On,
    /// Strictly behind the camera.
    Behind,
}

/// The plane through the camera position with the forward direction as normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPlane {
    /// A point on the plane (the camera position).
    origin: Vec3,
    /// Unit normal (the camera forward direction).
    normal: Vec3,
}

impl CameraPlane {
    /// Creates a plane from a point and a unit normal.
    #[must_use]
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// Returns the plane of a camera snapshot.
    #[must_use]
    pub fn from_camera(camera: &CameraState) -> Self {
        Self::new(camera.position(), camera.forward())
    }

    /// Signed distance along the forward axis; positive in front of the camera.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }

    /// Classifies a point against the plane.
    #[must_use]
    pub fn side(&self, point: Vec3) -> PlaneSide {
        let ds = self.signed_distance(point);
        if ds > 0.0 {
            PlaneSide::Front
        } else if ds < 0.0 {
            PlaneSide::Behind
        } else {
            PlaneSide::On
        }
    }

    /// Moves a point so that it lies strictly in front of the plane.
    ///
    /// Points in front are returned unchanged, points on the plane are pushed
    /// forward by `epsilon`, and points behind are mirrored across the plane
    /// (`p - 2 * ds * n`).
    #[must_use]
    pub fn bring_in_front(&self, point: Vec3, epsilon: f32) -> Vec3 {
        let ds = self.signed_distance(point);
        if ds > 0.0 {
            point
        } else if ds == 0.0 {
            point + self.normal * epsilon
        } else {
            point - 2.0 * ds * self.normal
        }
    }
}
