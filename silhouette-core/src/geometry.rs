/// Geometry primitives for silhouette edge classification
use nalgebra::{Point3, Vector3};

use crate::transform::normalize_or_zero;

/// A 3D vertex with world-space position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }

    /// True when every position and normal component is finite
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.normal.iter().all(|c| c.is_finite())
    }
}

/// Index of the vertex that closes edge `i`: edge `i` runs from local
/// vertex `i` to local vertex `next_vertex(i)`.
pub fn next_vertex(i: usize) -> usize {
    (i + 1) % 3
}

/// Index of the vertex opposite edge `i`
pub fn opposite_vertex(i: usize) -> usize {
    (i + 2) % 3
}

/// A triangle face defined by three ordered vertices
///
/// Vertex order is significant: edge `i` connects vertices `i` and
/// `(i+1) % 3`, with vertex `(i+2) % 3` opposite the edge.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's winding
    ///
    /// Returns the zero vector for degenerate (zero-area) triangles.
    pub fn face_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        normalize_or_zero(edge1.cross(&edge2))
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(Vertex::is_finite)
    }
}

/// A mesh composed of triangles, fed one triangle at a time to the classifier
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Replace per-vertex normals with the average of the face normals of
    /// every triangle sharing that position.
    ///
    /// STL files carry one facet normal per triangle, which makes all three
    /// vertex normals identical and every edge trivially non-silhouette.
    /// Averaging over shared positions restores the varying per-vertex
    /// normals the classifier's blending heuristic expects. Positions are
    /// matched bitwise, which is how STL encodes shared vertices.
    pub fn smooth_normals(&mut self) {
        use std::collections::HashMap;

        let mut accumulated: HashMap<[u32; 3], Vector3<f32>> = HashMap::new();

        for triangle in &self.triangles {
            let face = triangle.face_normal();
            for vertex in &triangle.vertices {
                let key = position_key(&vertex.position);
                *accumulated.entry(key).or_insert_with(Vector3::zeros) += face;
            }
        }

        for triangle in &mut self.triangles {
            for vertex in &mut triangle.vertices {
                let key = position_key(&vertex.position);
                if let Some(sum) = accumulated.get(&key) {
                    vertex.normal = normalize_or_zero(*sum);
                }
            }
        }
    }

    /// Create a simple cube mesh for testing and demos
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::with_capacity(12);

        // Each face is a quad split into two triangles sharing one normal
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            // Front
            (
                [0.0, 0.0, 1.0],
                [
                    [-half, -half, half],
                    [half, -half, half],
                    [half, half, half],
                    [-half, half, half],
                ],
            ),
            // Back
            (
                [0.0, 0.0, -1.0],
                [
                    [half, -half, -half],
                    [-half, -half, -half],
                    [-half, half, -half],
                    [half, half, -half],
                ],
            ),
            // Top
            (
                [0.0, 1.0, 0.0],
                [
                    [-half, half, half],
                    [half, half, half],
                    [half, half, -half],
                    [-half, half, -half],
                ],
            ),
            // Bottom
            (
                [0.0, -1.0, 0.0],
                [
                    [-half, -half, -half],
                    [half, -half, -half],
                    [half, -half, half],
                    [-half, -half, half],
                ],
            ),
            // Right
            (
                [1.0, 0.0, 0.0],
                [
                    [half, -half, half],
                    [half, -half, -half],
                    [half, half, -half],
                    [half, half, half],
                ],
            ),
            // Left
            (
                [-1.0, 0.0, 0.0],
                [
                    [-half, -half, -half],
                    [-half, -half, half],
                    [-half, half, half],
                    [-half, half, -half],
                ],
            ),
        ];

        for (n, quad) in &faces {
            let vertex = |p: &[f32; 3]| Vertex::new(p[0], p[1], p[2], n[0], n[1], n[2]);
            mesh.add_triangle(Triangle::new(
                vertex(&quad[0]),
                vertex(&quad[1]),
                vertex(&quad[2]),
            ));
            mesh.add_triangle(Triangle::new(
                vertex(&quad[0]),
                vertex(&quad[2]),
                vertex(&quad[3]),
            ));
        }

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

fn position_key(p: &Point3<f32>) -> [u32; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_indexing() {
        assert_eq!(next_vertex(0), 1);
        assert_eq!(next_vertex(1), 2);
        assert_eq!(next_vertex(2), 0);
        assert_eq!(opposite_vertex(0), 2);
        assert_eq!(opposite_vertex(1), 0);
        assert_eq!(opposite_vertex(2), 1);
    }

    #[test]
    fn test_face_normal() {
        let triangle = Triangle::new(
            Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Vertex::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Vertex::new(0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        );
        let normal = triangle.face_normal();
        assert!((normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let v = Vertex::new(1.0, 2.0, 3.0, 0.0, 0.0, 1.0);
        let triangle = Triangle::new(v, v, v);
        assert_eq!(triangle.face_normal(), Vector3::zeros());
    }

    #[test]
    fn test_cube_triangle_count() {
        let mesh = Mesh::cube(2.0);
        assert_eq!(mesh.triangles.len(), 12);
    }

    #[test]
    fn test_smooth_normals_are_unit_length() {
        let mut mesh = Mesh::cube(2.0);
        mesh.smooth_normals();
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                assert!((vertex.normal.norm() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_smooth_normals_lean_into_cube_corners() {
        let mut mesh = Mesh::cube(2.0);
        mesh.smooth_normals();
        // Every cube corner is shared by three faces, so its averaged
        // normal leans toward the corner diagonal instead of any single
        // face normal.
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                let diagonal = normalize_or_zero(vertex.position.coords);
                assert!(vertex.normal.dot(&diagonal) > 0.9);
            }
        }
    }

    #[test]
    fn test_vertex_finite_check() {
        assert!(Vertex::new(0.0, 1.0, 2.0, 0.0, 0.0, 1.0).is_finite());
        assert!(!Vertex::new(f32::NAN, 1.0, 2.0, 0.0, 0.0, 1.0).is_finite());
        assert!(!Vertex::new(0.0, 1.0, 2.0, f32::INFINITY, 0.0, 1.0).is_finite());
    }
}
