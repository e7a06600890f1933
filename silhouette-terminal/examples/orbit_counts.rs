/// Example: silhouette counts for a camera orbiting a cube
///
/// Usage: cargo run --example orbit_counts

use std::io::{self, stdout};

use nalgebra::Point3;
use silhouette_core::{Camera, Mesh};
use silhouette_terminal::ClassificationReport;

fn main() -> io::Result<()> {
    let mut mesh = Mesh::cube(2.0);
    mesh.smooth_normals();

    let mut out = stdout();
    for step in 0..8 {
        let angle = step as f32 * std::f32::consts::FRAC_PI_4;
        let camera = Camera::new(
            Point3::new(5.0 * angle.cos(), 2.0, 5.0 * angle.sin()),
            Point3::new(0.0, 0.0, 0.0),
        );

        let report = ClassificationReport::new(&mesh, &camera.view_matrix());
        print!("azimuth {:>3}°: ", step * 45);
        report.write_summary(&mut out)?;
    }

    Ok(())
}
