/// Silhouette Terminal - Batch edge classification
///
/// Classifies every edge of every triangle in an STL mesh as silhouette
/// and/or back-facing, relative to a fixed camera, and reports the
/// results to the terminal.
///
/// Usage: silhouette-terminal [stl-file]
///
/// Without an argument a built-in cube mesh is classified instead.

use std::env;
use std::fs;
use std::io::{self, stdout};

use silhouette_core::{stl, Camera, Mesh};
use silhouette_terminal::ClassificationReport;

/// Per-edge tables get unwieldy past this many triangles
const TABLE_LIMIT: usize = 40;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => load_mesh(path)?,
        None => {
            eprintln!("No STL file provided, classifying built-in cube...");
            Mesh::cube(2.0)
        }
    };

    println!("Classifying {} triangles", mesh.triangles.len());

    let camera = Camera::default();
    let view = camera.view_matrix();
    let report = ClassificationReport::new(&mesh, &view);

    let mut out = stdout();
    if mesh.triangles.len() <= TABLE_LIMIT {
        report.write_table(&mut out)?;
    }
    report.write_summary(&mut out)?;

    Ok(())
}

fn load_mesh(path: &str) -> io::Result<Mesh> {
    let data = fs::read(path)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("Failed to read STL file: {}", e)))?;

    let mut mesh = stl::parse_stl(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse STL: {}", e)))?;

    // STL facet normals are flat per triangle; average them so vertex
    // normals vary and silhouette edges can show up at all.
    mesh.smooth_normals();

    Ok(mesh)
}
