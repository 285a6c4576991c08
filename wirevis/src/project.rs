use cgmath::{EuclideanSpace, InnerSpace, Point2, Point3, Vector3};

/// Orthographic camera described by azimuth and elevation angles, matching
/// the view conventions of typical 3D plot axes (Z up, azimuth spinning the
/// scene around Z, elevation tilting the viewpoint above the XY plane).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
	right: Vector3<f64>,
	up: Vector3<f64>,
}

impl Camera {
	/// Creates a camera from azimuth and elevation, both in degrees.
	pub fn new(azimuth: f64, elevation: f64) -> Self {
		let azimuth = azimuth.to_radians();
		let elevation = elevation.to_radians();

		Camera {
			right: Vector3::new(-azimuth.sin(), azimuth.cos(), 0.0),
			up: Vector3::new(
				-elevation.sin() * azimuth.cos(),
				-elevation.sin() * azimuth.sin(),
				elevation.cos(),
			),
		}
	}

	/// Projects a world-space point onto the camera's 2D screen plane.
	pub fn project(&self, point: Point3<f64>) -> Point2<f64> {
		let point = point.to_vec();

		Point2::new(point.dot(self.right), point.dot(self.up))
	}
}

impl Default for Camera {
	/// The view the tool opens with: azimuth -60, elevation 30.
	fn default() -> Self {
		Camera::new(-60.0, 30.0)
	}
}

/// Maps camera-space points into a pixel rectangle: uniform scale, centered,
/// Y flipped so screen-up becomes image-up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
	scale: f64,
	min: Point2<f64>,
	pad: (f64, f64),
	height: f64,
}

impl Viewport {
	/// Fits the bounding box of the given points into a `width` x `height`
	/// pixel rectangle, keeping `margin` pixels free on every side.
	pub fn fit<I>(points: I, width: u32, height: u32, margin: f64) -> Self
	where
		I: Iterator<Item = Point2<f64>>,
	{
		let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
		let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

		for point in points {
			min.x = min.x.min(point.x);
			min.y = min.y.min(point.y);
			max.x = max.x.max(point.x);
			max.y = max.y.max(point.y);
		}

		// An empty or degenerate point set still needs a usable transform.
		if !(min.x < max.x) {
			min.x = 0.0;
			max.x = 1.0;
		}

		if !(min.y < max.y) {
			min.y = 0.0;
			max.y = 1.0;
		}

		let span = (max.x - min.x, max.y - min.y);
		let scale = ((width as f64 - 2.0 * margin) / span.0)
			.min((height as f64 - 2.0 * margin) / span.1);

		let pad = (
			(width as f64 - span.0 * scale) / 2.0,
			(height as f64 - span.1 * scale) / 2.0,
		);

		Viewport { scale, min, pad, height: height as f64 }
	}

	/// Maps a camera-space point to integer pixel coordinates.
	pub fn to_pixel(&self, point: Point2<f64>) -> (i32, i32) {
		let x = (point.x - self.min.x) * self.scale + self.pad.0;
		let y = self.height - ((point.y - self.min.y) * self.scale + self.pad.1);

		(x.round() as i32, y.round() as i32)
	}
}

#[cfg(test)]
mod test {
	use crate::project::{Camera, Viewport};
	use cgmath::{Point2, Point3};

	fn assert_close(actual: Point2<f64>, expected: (f64, f64)) {
		assert!(
			(actual.x - expected.0).abs() < 1e-9 && (actual.y - expected.1).abs() < 1e-9,
			"expected ({}, {}), got ({}, {})",
			expected.0, expected.1, actual.x, actual.y
		);
	}

	#[test]
	fn test_axis_aligned_view() {
		// Looking straight down the +X axis: screen right is +Y, screen up
		// is +Z, and X has no screen-space effect.
		let camera = Camera::new(0.0, 0.0);

		assert_close(camera.project(Point3::new(5.0, 0.0, 0.0)), (0.0, 0.0));
		assert_close(camera.project(Point3::new(0.0, 3.0, 0.0)), (3.0, 0.0));
		assert_close(camera.project(Point3::new(0.0, 0.0, 2.0)), (0.0, 2.0));
	}

	#[test]
	fn test_elevated_view() {
		// From directly overhead, +Z collapses and -X becomes screen up.
		let camera = Camera::new(0.0, 90.0);

		assert_close(camera.project(Point3::new(0.0, 0.0, 4.0)), (0.0, 0.0));
		assert_close(camera.project(Point3::new(1.0, 0.0, 0.0)), (0.0, -1.0));
	}

	#[test]
	fn test_viewport_fit() {
		let corners = [
			Point2::new(0.0, 0.0),
			Point2::new(4.0, 0.0),
			Point2::new(0.0, 2.0),
			Point2::new(4.0, 2.0),
		];

		let viewport = Viewport::fit(corners.iter().cloned(), 120, 80, 10.0);

		// Width is the tight constraint: scale 25, box centered vertically.
		assert_eq!(viewport.to_pixel(Point2::new(0.0, 0.0)), (10, 65));
		assert_eq!(viewport.to_pixel(Point2::new(4.0, 2.0)), (110, 15));
		assert_eq!(viewport.to_pixel(Point2::new(2.0, 1.0)), (60, 40));
	}

	#[test]
	fn test_viewport_degenerate() {
		let viewport = Viewport::fit(std::iter::empty(), 100, 100, 10.0);
		let (x, y) = viewport.to_pixel(Point2::new(0.5, 0.5));

		assert!(x >= 0 && x <= 100);
		assert!(y >= 0 && y <= 100);
	}
}
