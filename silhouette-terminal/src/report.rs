/// Terminal reporting for batch classification runs
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Matrix4;
use silhouette_core::{classify_triangle, EdgeClassification, Mesh};
use std::io::Write;

/// Local edge labels in vertex-index order
const EDGE_LABELS: [&str; 3] = ["0-1", "1-2", "2-0"];

/// Classification results for every edge of every triangle in a mesh
pub struct ClassificationReport {
    pub edges: Vec<[EdgeClassification; 3]>,
    pub silhouette_count: usize,
    pub back_face_count: usize,
}

impl ClassificationReport {
    /// Classify all edges of `mesh` under the world-to-view transform
    pub fn new(mesh: &Mesh, view: &Matrix4<f32>) -> Self {
        let edges: Vec<[EdgeClassification; 3]> = mesh
            .triangles
            .iter()
            .map(|triangle| classify_triangle(triangle, view))
            .collect();

        let flat = edges.iter().flatten();
        let (mut silhouette_count, mut back_face_count) = (0, 0);
        for edge in flat {
            if edge.is_silhouette {
                silhouette_count += 1;
            }
            if edge.is_back_face {
                back_face_count += 1;
            }
        }

        Self {
            edges,
            silhouette_count,
            back_face_count,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len() * 3
    }

    /// Write a per-edge table, one row per (triangle, edge) pair
    pub fn write_table<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(Print("Tri  | Edge | Silhouette | Back-Face\n"))?;
        writer.queue(Print("-----------------------------------\n"))?;

        for (index, edges) in self.edges.iter().enumerate() {
            for (edge, result) in edges.iter().enumerate() {
                writer.queue(Print(format!("{:<4} | {:<4} | ", index, EDGE_LABELS[edge])))?;
                write_flag(writer, result.is_silhouette, Color::Cyan, 10)?;
                writer.queue(Print(" | "))?;
                write_flag(writer, result.is_back_face, Color::DarkGrey, 9)?;
                writer.queue(Print("\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        writer.flush()
    }

    /// Write aggregate counts only
    pub fn write_summary<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;
        writer.queue(Print(format!(
            "{} silhouette edges",
            self.silhouette_count
        )))?;
        writer.queue(ResetColor)?;
        writer.queue(Print(format!(
            ", {} back-facing, {} edges total\n",
            self.back_face_count,
            self.edge_count()
        )))?;
        writer.flush()
    }
}

fn write_flag<W: Write>(
    writer: &mut W,
    value: bool,
    color: Color,
    width: usize,
) -> std::io::Result<()> {
    if value {
        writer.queue(SetForegroundColor(color))?;
    }
    writer.queue(Print(format!("{:<width$}", value, width = width)))?;
    if value {
        writer.queue(ResetColor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use silhouette_core::Camera;

    #[test]
    fn test_report_counts_cover_all_edges() {
        let mut mesh = Mesh::cube(2.0);
        mesh.smooth_normals();
        let view = Camera::default().view_matrix();

        let report = ClassificationReport::new(&mesh, &view);
        assert_eq!(report.edges.len(), 12);
        assert_eq!(report.edge_count(), 36);
        assert!(report.silhouette_count <= report.edge_count());
        assert!(report.back_face_count <= report.edge_count());
    }

    #[test]
    fn test_summary_writes_counts() {
        let mesh = Mesh::cube(2.0);
        let view = Camera::default().view_matrix();
        let report = ClassificationReport::new(&mesh, &view);

        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("silhouette edges"));
        assert!(text.contains("36 edges total"));
    }

    #[test]
    fn test_table_has_one_row_per_edge() {
        let mesh = Mesh::cube(2.0);
        let view = Camera::default().view_matrix();
        let report = ClassificationReport::new(&mesh, &view);

        let mut out = Vec::new();
        report.write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Two header lines plus 36 edge rows
        assert_eq!(text.lines().count(), 2 + 36);
    }
}
