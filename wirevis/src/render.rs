use cgmath::{Point3, Vector3};
use image::RgbImage;
use imageproc::drawing::draw_antialiased_line_segment_mut;
use imageproc::pixelops::interpolate;

use cubedom::color::Rgb;
use cubedom::domain::CubeDomain;
use cubedom::position::{BlockPosition, CellPosition, BLOCK_SIZE, CELL_SIZE, DOMAIN_SIZE};

use crate::geometry::{cube_vertices, CUBE_EDGES};
use crate::project::{Camera, Viewport};

const BLOCK_LINE_WIDTH: f32 = 2.0;
const CELL_LINE_WIDTH: f32 = 1.5;
const AXIS_LINE_WIDTH: f32 = 1.0;

const AXIS_COLOR: Rgb = Rgb { red: 0x50, green: 0x50, blue: 0x50 };
const BACKGROUND: image::Rgb<u8> = image::Rgb([0xFF, 0xFF, 0xFF]);

/// How far the axis lines extend past the domain, in world units.
const AXIS_OVERHANG: f64 = 1.0;
/// Edge length of the square the axis letter glyphs are drawn in.
const GLYPH_SIZE: f64 = 0.8;

const MARGIN: f64 = 24.0;

/// A single wireframe segment in world space, ready for projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
	pub start: Point3<f64>,
	pub end: Point3<f64>,
	pub color: Rgb,
	pub width: f32,
	pub alpha: f32,
}

/// Rendering controls. The defaults reproduce the tool's standard view:
/// both layers on, cell transparency 0.6, a 700x500 image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
	pub show_cells: bool,
	pub show_cubes: bool,
	pub alpha: f32,
	pub width: u32,
	pub height: u32,
	pub camera: Camera,
}

impl Default for RenderOptions {
	fn default() -> Self {
		RenderOptions {
			show_cells: true,
			show_cubes: true,
			alpha: 0.6,
			width: 700,
			height: 500,
			camera: Camera::default(),
		}
	}
}

fn push_cube(edges: &mut Vec<Edge>, vertices: &[Point3<f64>; 8], color: Rgb, width: f32, alpha: f32) {
	for &(start, end) in CUBE_EDGES.iter() {
		edges.push(Edge { start: vertices[start], end: vertices[end], color, width, alpha });
	}
}

/// Builds the world-space wireframe for the domain: 12 edges per block when
/// `show_cubes` is on, and 12 edges for every painted cell when `show_cells`
/// is on. Cells whose color was never set produce nothing.
pub fn assemble(domain: &CubeDomain, options: &RenderOptions) -> Vec<Edge> {
	let mut edges = Vec::new();

	if options.show_cubes {
		for position in BlockPosition::enumerate() {
			let (x, y, z) = position.origin();
			let vertices = cube_vertices(x, y, z, BLOCK_SIZE);

			push_cube(&mut edges, &vertices, domain.block_color(position), BLOCK_LINE_WIDTH, 1.0);
		}
	}

	if options.show_cells {
		for block in BlockPosition::enumerate() {
			let (x, y, z) = block.origin();

			for position in CellPosition::enumerate() {
				let color = match domain.cell(block, position).color {
					Some(color) => color,
					None => continue,
				};

				let (cx, cy, cz) = position.offset();
				let vertices = cube_vertices(x + cx, y + cy, z + cz, CELL_SIZE);

				push_cube(&mut edges, &vertices, color, CELL_LINE_WIDTH, options.alpha);
			}
		}
	}

	edges
}

/// Strokes for the axis letter glyphs, in a unit square with (0, 0) at the
/// glyph's lower-left corner.
const GLYPH_X: [((f64, f64), (f64, f64)); 2] = [((0.0, 0.0), (1.0, 1.0)), ((0.0, 1.0), (1.0, 0.0))];
const GLYPH_Y: [((f64, f64), (f64, f64)); 3] = [
	((0.0, 1.0), (0.5, 0.5)),
	((1.0, 1.0), (0.5, 0.5)),
	((0.5, 0.5), (0.5, 0.0)),
];
const GLYPH_Z: [((f64, f64), (f64, f64)); 3] = [
	((0.0, 1.0), (1.0, 1.0)),
	((1.0, 1.0), (0.0, 0.0)),
	((0.0, 0.0), (1.0, 0.0)),
];

fn push_glyph(
	edges: &mut Vec<Edge>, anchor: Point3<f64>, right: Vector3<f64>, up: Vector3<f64>,
	strokes: &[((f64, f64), (f64, f64))],
) {
	for &((u0, v0), (u1, v1)) in strokes {
		edges.push(Edge {
			start: anchor + right * (u0 * GLYPH_SIZE) + up * (v0 * GLYPH_SIZE),
			end: anchor + right * (u1 * GLYPH_SIZE) + up * (v1 * GLYPH_SIZE),
			color: AXIS_COLOR,
			width: AXIS_LINE_WIDTH,
			alpha: 1.0,
		});
	}
}

/// Builds the three axis lines and their letter labels. The letters are
/// plain line-segment glyphs placed in world space just past the end of each
/// axis, so they project with the same camera as everything else.
pub fn axes() -> Vec<Edge> {
	let mut edges = Vec::new();
	let origin = Point3::new(0.0, 0.0, 0.0);
	let reach = DOMAIN_SIZE + AXIS_OVERHANG;

	let directions = [
		Vector3::new(1.0, 0.0, 0.0),
		Vector3::new(0.0, 1.0, 0.0),
		Vector3::new(0.0, 0.0, 1.0),
	];

	for &direction in directions.iter() {
		edges.push(Edge {
			start: origin,
			end: origin + direction * reach,
			color: AXIS_COLOR,
			width: AXIS_LINE_WIDTH,
			alpha: 1.0,
		});
	}

	let gap = reach + 0.4;

	push_glyph(
		&mut edges,
		Point3::new(gap, 0.0, 0.0),
		Vector3::new(0.0, 1.0, 0.0),
		Vector3::new(0.0, 0.0, 1.0),
		&GLYPH_X,
	);
	push_glyph(
		&mut edges,
		Point3::new(0.0, gap, 0.0),
		Vector3::new(1.0, 0.0, 0.0),
		Vector3::new(0.0, 0.0, 1.0),
		&GLYPH_Y,
	);
	push_glyph(
		&mut edges,
		Point3::new(0.0, 0.0, gap),
		Vector3::new(1.0, 0.0, 0.0),
		Vector3::new(0.0, 1.0, 0.0),
		&GLYPH_Z,
	);

	edges
}

fn draw_edge(image: &mut RgbImage, start: (i32, i32), end: (i32, i32), color: Rgb, width: f32, alpha: f32) {
	let pixel = image::Rgb([color.red, color.green, color.blue]);

	draw_antialiased_line_segment_mut(image, start, end, pixel, |line, under, weight| {
		interpolate(line, under, weight * alpha)
	});

	if width >= 2.0 {
		// Second stroke, offset one pixel along the line's minor axis.
		let offset = if (end.0 - start.0).abs() >= (end.1 - start.1).abs() { (0, 1) } else { (1, 0) };
		let start = (start.0 + offset.0, start.1 + offset.1);
		let end = (end.0 + offset.0, end.1 + offset.1);

		draw_antialiased_line_segment_mut(image, start, end, pixel, |line, under, weight| {
			interpolate(line, under, weight * alpha)
		});
	}
}

/// Projects the given edges through the options' camera and draws them over
/// a white background. The viewport is fitted to the edges themselves, so
/// the scene always fills the image regardless of camera angle.
pub fn rasterize(edges: &[Edge], options: &RenderOptions) -> RgbImage {
	let mut image = RgbImage::from_pixel(options.width, options.height, BACKGROUND);

	let camera = options.camera;
	let mut projected = Vec::with_capacity(edges.len() * 2);

	for edge in edges {
		projected.push(camera.project(edge.start));
		projected.push(camera.project(edge.end));
	}

	let viewport = Viewport::fit(projected.iter().cloned(), options.width, options.height, MARGIN);

	for edge in edges {
		let start = viewport.to_pixel(camera.project(edge.start));
		let end = viewport.to_pixel(camera.project(edge.end));

		draw_edge(&mut image, start, end, edge.color, edge.width, edge.alpha);
	}

	image
}

/// Renders the domain into an image: assembled wireframe plus the labelled
/// axes, projected and rasterized in one pass.
pub fn render(domain: &CubeDomain, options: &RenderOptions) -> RgbImage {
	let mut edges = assemble(domain, options);
	edges.extend(axes());

	rasterize(&edges, options)
}

#[cfg(test)]
mod test {
	use crate::render::{assemble, render, Edge, RenderOptions};
	use cgmath::Point3;
	use cubedom::color::Rgb;
	use cubedom::domain::CubeDomain;
	use cubedom::position::{BlockPosition, CellPosition};

	#[test]
	fn test_fresh_domain_assembly() {
		let domain = CubeDomain::new();
		let edges = assemble(&domain, &RenderOptions::default());

		// 64 block outlines and nothing else: no cell has a color yet.
		assert_eq!(edges.len(), 64 * 12);

		for edge in edges.iter() {
			assert_eq!(edge.color, Rgb::LIGHT_BLUE);
			assert_eq!(edge.alpha, 1.0);
		}
	}

	#[test]
	fn test_layer_toggles() {
		let mut domain = CubeDomain::new();
		domain.set_cell_color(BlockPosition::new(0, 0, 0), CellPosition::new(0, 0, 0), Rgb::RED);

		let mut options = RenderOptions::default();

		options.show_cubes = false;
		assert_eq!(assemble(&domain, &options).len(), 12);

		options.show_cubes = true;
		options.show_cells = false;
		assert_eq!(assemble(&domain, &options).len(), 64 * 12);

		options.show_cells = true;
		assert_eq!(assemble(&domain, &options).len(), 64 * 12 + 12);
	}

	#[test]
	fn test_cell_edges_anchored() {
		// Cell (1, 1, 1) of block (0, 0, 0) sits at world (1, 1, 1) with
		// edge length 1.
		let mut domain = CubeDomain::new();
		domain.set_cell_color(BlockPosition::new(0, 0, 0), CellPosition::new(1, 1, 1), Rgb::GREEN);

		let mut options = RenderOptions::default();
		options.show_cubes = false;
		options.alpha = 0.4;

		let edges = assemble(&domain, &options);
		assert_eq!(edges.len(), 12);

		let inside = |edge: &Edge| {
			let corners = [edge.start, edge.end];

			corners.iter().all(|corner: &Point3<f64>| {
				corner.x >= 1.0 && corner.x <= 2.0
					&& corner.y >= 1.0 && corner.y <= 2.0
					&& corner.z >= 1.0 && corner.z <= 2.0
			})
		};

		for edge in edges.iter() {
			assert!(inside(edge), "cell edge escapes the unit cube at (1, 1, 1)");
			assert_eq!(edge.color, Rgb::GREEN);
			assert_eq!(edge.alpha, 0.4);
		}
	}

	#[test]
	fn test_block_color_propagates() {
		let mut domain = CubeDomain::new();
		let target = BlockPosition::new(2, 1, 0);
		domain.set_block_color(target, Rgb::ORANGE);

		let edges = assemble(&domain, &RenderOptions::default());
		let orange = edges.iter().filter(|edge| edge.color == Rgb::ORANGE).count();

		assert_eq!(orange, 12);
	}

	#[test]
	fn test_rasterize_dimensions_and_ink() {
		let domain = CubeDomain::new();
		let mut options = RenderOptions::default();
		options.width = 320;
		options.height = 240;

		let image = render(&domain, &options);

		assert_eq!(image.dimensions(), (320, 240));

		let background = image::Rgb([0xFF, 0xFF, 0xFF]);
		let inked = image.pixels().filter(|&&pixel| pixel != background).count();

		assert!(inked > 0, "wireframe left no pixels behind");
	}
}
