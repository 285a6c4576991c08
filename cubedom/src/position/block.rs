use crate::position::{BLOCKS_PER_AXIS, BLOCK_SIZE, BLOCK_VOLUME};
use std::fmt::{Debug, Display, Formatter, Result};

/// Position of a block within the 4x4x4 domain grid, packed into a single
/// byte with 2 bits per component.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct BlockPosition(u8);

impl BlockPosition {
	/// Creates a new BlockPosition from the X, Y, and Z components.
	/// ### Out of bounds behavior
	/// Panics if any component is `BLOCKS_PER_AXIS` or larger.
	pub fn new(x: u8, y: u8, z: u8) -> Self {
		assert!(
			x < BLOCKS_PER_AXIS && y < BLOCKS_PER_AXIS && z < BLOCKS_PER_AXIS,
			"block position ({}, {}, {}) out of bounds, components must be below {}",
			x, y, z, BLOCKS_PER_AXIS
		);

		BlockPosition((x << 4) | (y << 2) | z)
	}

	/// Creates a new BlockPosition from an XYZ index.
	/// ### Out of bounds behavior
	/// If the index is out of bounds, it is truncated.
	pub fn from_xyz(xyz: u8) -> Self {
		BlockPosition(xyz & 0x3F)
	}

	// Component access

	/// Returns the X component.
	pub fn x(&self) -> u8 {
		self.0 >> 4
	}

	/// Returns the Y component.
	pub fn y(&self) -> u8 {
		(self.0 >> 2) & 3
	}

	/// Returns the Z component.
	pub fn z(&self) -> u8 {
		self.0 & 3
	}

	/// Returns the index represented as `(X<<4) | (Y<<2) | Z`, for flat
	/// block storage.
	pub fn xyz(&self) -> u8 {
		self.0
	}

	/// Yields every block position in X-major order, matching the `xyz`
	/// index order.
	pub fn enumerate() -> impl Iterator<Item = Self> {
		(0..BLOCK_VOLUME).map(BlockPosition::from_xyz)
	}

	/// Returns the block's anchor corner in world units: the grid coordinate
	/// scaled by the block edge length.
	pub fn origin(&self) -> (f64, f64, f64) {
		(
			self.x() as f64 * BLOCK_SIZE,
			self.y() as f64 * BLOCK_SIZE,
			self.z() as f64 * BLOCK_SIZE,
		)
	}
}

impl Display for BlockPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
	}
}

impl Debug for BlockPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "BlockPosition {{ x: {}, y: {}, z: {} }}", self.x(), self.y(), self.z())
	}
}
