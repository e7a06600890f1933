/// Per-edge silhouette and back-face classification
///
/// Classifies one edge of a triangle relative to a camera sitting at the
/// view-space origin. All three positions and normals are transformed into
/// view space, two blended normals are built from the triangle's vertex
/// normals, and both are tested against the view vector of the edge's
/// first vertex:
///
/// - an edge-biased normal `n0 + n1 - n2`, which subtracts the influence
///   of the vertex opposite the edge, and
/// - a face-averaged normal `n0 + n1 + n2`.
///
/// The edge is back-facing when the edge-biased normal points away from
/// the camera, and a silhouette when the two blended normals fall on
/// strictly opposite sides of the view vector. The blending formulas are
/// a fixed heuristic and are reproduced as-is.
use nalgebra::{Matrix4, Vector3};

use crate::geometry::{next_vertex, opposite_vertex, Triangle};
use crate::transform::{normalize_or_zero, view_normal, view_position};

/// Classification result for one edge of one triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeClassification {
    pub is_silhouette: bool,
    pub is_back_face: bool,
}

/// Classify edge `edge % 3` of `triangle` under the world-to-view
/// transform `view`.
///
/// Edge `i` connects local vertices `i` and `(i+1) % 3`; the view vector
/// runs from vertex `i` toward the camera at the view-space origin. This
/// is a pure function: it never fails, and degenerate input degrades to
/// zero vectors whose dot products classify as neither silhouette nor
/// back-facing.
pub fn classify_edge(
    edge: usize,
    triangle: &Triangle,
    view: &Matrix4<f32>,
) -> EdgeClassification {
    let normals_vs: [Vector3<f32>; 3] = [
        view_normal(view, &triangle.vertices[0].normal),
        view_normal(view, &triangle.vertices[1].normal),
        view_normal(view, &triangle.vertices[2].normal),
    ];
    let positions_vs: [Vector3<f32>; 3] = [
        view_position(view, &triangle.vertices[0].position),
        view_position(view, &triangle.vertices[1].position),
        view_position(view, &triangle.vertices[2].position),
    ];

    let i = edge % 3;
    let view_vec = normalize_or_zero(-positions_vs[i]);

    let n0 = normals_vs[i];
    let n1 = normals_vs[next_vertex(i)];
    let n2 = normals_vs[opposite_vertex(i)];

    let edge_normal = normalize_or_zero(n0 + n1 - n2);
    let face_normal = normalize_or_zero(n0 + n1 + n2);

    let edge_dot = edge_normal.dot(&view_vec);
    let face_dot = face_normal.dot(&view_vec);

    EdgeClassification {
        is_silhouette: face_dot * edge_dot < 0.0,
        is_back_face: edge_dot > 0.0,
    }
}

/// Classify all three edges of a triangle
pub fn classify_triangle(triangle: &Triangle, view: &Matrix4<f32>) -> [EdgeClassification; 3] {
    [
        classify_edge(0, triangle, view),
        classify_edge(1, triangle, view),
        classify_edge(2, triangle, view),
    ]
}
