/// Silhouette Core Library - Stateless edge classification
///
/// This library provides the geometric kernel for classifying triangle
/// edges as silhouette and/or back-facing relative to a camera: view-space
/// transforms, the per-edge classifier, a camera helper for building view
/// matrices, and STL ingestion for feeding triangle streams to the kernel.

pub mod camera;
pub mod geometry;
pub mod silhouette;
pub mod stl;
pub mod transform;

// Re-export commonly used types
pub use camera::Camera;
pub use geometry::{Mesh, Triangle, Vertex};
pub use silhouette::{classify_edge, classify_triangle, EdgeClassification};
pub use transform::{normalize_or_zero, view_matrix_from_rows};
