use crate::position::{CELLS_PER_AXIS, CELL_SIZE, CELL_VOLUME};
use std::fmt::{Debug, Display, Formatter, Result};

/// Position of a cell within its parent block's 2x2x2 grid, packed into a
/// single byte with 1 bit per component.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct CellPosition(u8);

impl CellPosition {
	/// Creates a new CellPosition from the X, Y, and Z components.
	/// ### Out of bounds behavior
	/// Panics if any component is `CELLS_PER_AXIS` or larger.
	pub fn new(x: u8, y: u8, z: u8) -> Self {
		assert!(
			x < CELLS_PER_AXIS && y < CELLS_PER_AXIS && z < CELLS_PER_AXIS,
			"cell position ({}, {}, {}) out of bounds, components must be below {}",
			x, y, z, CELLS_PER_AXIS
		);

		CellPosition((x << 2) | (y << 1) | z)
	}

	/// Creates a new CellPosition from an XYZ index.
	/// ### Out of bounds behavior
	/// If the index is out of bounds, it is truncated.
	pub fn from_xyz(xyz: u8) -> Self {
		CellPosition(xyz & 0x7)
	}

	// Component access

	/// Returns the X component.
	pub fn x(&self) -> u8 {
		self.0 >> 2
	}

	/// Returns the Y component.
	pub fn y(&self) -> u8 {
		(self.0 >> 1) & 1
	}

	/// Returns the Z component.
	pub fn z(&self) -> u8 {
		self.0 & 1
	}

	/// Returns the index represented as `(X<<2) | (Y<<1) | Z`, for flat cell
	/// storage within a block.
	pub fn xyz(&self) -> u8 {
		self.0
	}

	/// Yields every cell position in X-major order, matching the `xyz` index
	/// order.
	pub fn enumerate() -> impl Iterator<Item = Self> {
		(0..CELL_VOLUME).map(CellPosition::from_xyz)
	}

	/// Returns the cell's offset from its parent block's anchor corner, in
	/// world units.
	pub fn offset(&self) -> (f64, f64, f64) {
		(
			self.x() as f64 * CELL_SIZE,
			self.y() as f64 * CELL_SIZE,
			self.z() as f64 * CELL_SIZE,
		)
	}
}

impl Display for CellPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
	}
}

impl Debug for CellPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "CellPosition {{ x: {}, y: {}, z: {} }}", self.x(), self.y(), self.z())
	}
}
