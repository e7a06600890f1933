/// Camera helper producing the world-to-view transform the classifier consumes
use nalgebra::{Matrix4, Point3, Vector3};

/// Camera configuration for building view matrices
///
/// The classifier assumes the camera sits at the view-space origin; the
/// matrix returned by [`Camera::view_matrix`] satisfies that by
/// construction. Projection is not modeled here, classification happens
/// entirely in view space.
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            position,
            target,
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Create the world-to-view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 0.0))
    }
}
