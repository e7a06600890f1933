/// STL ingestion for the classification harness, binary and ASCII formats
///
/// This layer owns input validation: the classifier itself accepts any
/// finite geometry, so non-finite coordinates or normals are rejected
/// here before a mesh reaches it.
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::many0,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Mesh, Triangle, Vertex};

/// Parse a binary STL file
pub fn parse_binary_stl(data: &[u8]) -> Result<Mesh, String> {
    if data.len() < 84 {
        return Err("File too small to be a valid STL".to_string());
    }

    // 80-byte header, then a little-endian triangle count
    let data = &data[80..];
    let triangle_count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    // The count field is untrusted; reject counts the file cannot hold
    // before sizing any allocation by them.
    if (data.len() - 4) / 50 < triangle_count {
        return Err("Unexpected end of file".to_string());
    }

    let mut mesh = Mesh::with_capacity(triangle_count);
    let mut offset = 4;

    for _ in 0..triangle_count {
        let mut floats = [0.0f32; 12];
        for (i, value) in floats.iter_mut().enumerate() {
            let at = offset + i * 4;
            *value = f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
        }
        // Facet normal, then three vertex positions
        let [nx, ny, nz] = [floats[0], floats[1], floats[2]];
        let triangle = Triangle::new(
            Vertex::new(floats[3], floats[4], floats[5], nx, ny, nz),
            Vertex::new(floats[6], floats[7], floats[8], nx, ny, nz),
            Vertex::new(floats[9], floats[10], floats[11], nx, ny, nz),
        );
        if !triangle.is_finite() {
            return Err(format!(
                "Non-finite geometry in triangle {}",
                mesh.triangles.len()
            ));
        }

        // 2-byte attribute count is ignored
        offset += 50;
        mesh.add_triangle(triangle);
    }

    Ok(mesh)
}

/// Parse an ASCII STL file
pub fn parse_ascii_stl(input: &str) -> Result<Mesh, String> {
    let (_, triangles) = parse_solid(input)
        .map_err(|e| format!("Failed to parse ASCII STL: {:?}", e))?;

    let mut mesh = Mesh::with_capacity(triangles.len());
    for (index, triangle) in triangles.into_iter().enumerate() {
        if !triangle.is_finite() {
            return Err(format!("Non-finite geometry in triangle {}", index));
        }
        mesh.add_triangle(triangle);
    }

    Ok(mesh)
}

fn parse_solid(input: &str) -> IResult<&str, Vec<Triangle>> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    let (input, _) = not_line_ending(input)?; // optional solid name
    let (input, triangles) = many0(parse_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;
    Ok((input, triangles))
}

fn parse_facet(input: &str) -> IResult<&str, Triangle> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, normal) = parse_float3(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v0) = parse_vertex(input, normal)?;
    let (input, v1) = parse_vertex(input, normal)?;
    let (input, v2) = parse_vertex(input, normal)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;

    Ok((input, Triangle::new(v0, v1, v2)))
}

fn parse_vertex(input: &str, normal: (f32, f32, f32)) -> IResult<&str, Vertex> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    let (input, (x, y, z)) = parse_float3(input)?;
    Ok((input, Vertex::new(x, y, z, normal.0, normal.1, normal.2)))
}

fn parse_float3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

/// Detect and parse an STL file (binary or ASCII)
pub fn parse_stl(data: &[u8]) -> Result<Mesh, String> {
    if data.len() >= 5 && &data[0..5] == b"solid" {
        // Might be ASCII; binary files may also start with "solid"
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(mesh) = parse_ascii_stl(text) {
                return Ok(mesh);
            }
        }
    }

    parse_binary_stl(data)
}
