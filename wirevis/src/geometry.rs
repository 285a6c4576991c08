use cgmath::Point3;

/// The 12 edges of a cube as index pairs into the `cube_vertices` array:
/// the two faces perpendicular to the X axis, then the four edges connecting
/// them. Only valid for the corner ordering `cube_vertices` produces.
pub const CUBE_EDGES: [(usize, usize); 12] = [
	(0, 1), (1, 3), (3, 2), (2, 0),
	(4, 5), (5, 7), (7, 6), (6, 4),
	(0, 4), (1, 5), (2, 6), (3, 7),
];

/// Returns the 8 corner points of the axis-aligned cube anchored at
/// `(x, y, z)` with the given edge length, enumerated X-major over the
/// low/high offset in each axis. The corner index is `4*bx + 2*by + bz`
/// where each bit selects the high offset on that axis; `CUBE_EDGES` relies
/// on this ordering.
pub fn cube_vertices(x: f64, y: f64, z: f64, size: f64) -> [Point3<f64>; 8] {
	let mut vertices = [Point3::new(0.0, 0.0, 0.0); 8];
	let mut index = 0;

	for &dx in &[0.0, size] {
		for &dy in &[0.0, size] {
			for &dz in &[0.0, size] {
				vertices[index] = Point3::new(x + dx, y + dy, z + dz);
				index += 1;
			}
		}
	}

	vertices
}
