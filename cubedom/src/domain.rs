use rand::Rng;

use crate::color::Rgb;
use crate::position::{BlockPosition, CellPosition};

/// One of the 8 fine-grained subdivisions of a block. Carries a
/// demonstration scalar in `[0, 1)` and an optional display color; the
/// renderer skips cells whose color was never set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
	pub value: f64,
	pub color: Option<Rgb>,
}

/// One of the 64 coarse partitions of the domain: the unit of work assigned
/// to a rank. Owns its 2x2x2 cells directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Block {
	color: Rgb,
	cells: [Cell; 8],
}

impl Block {
	/// Returns the block's display color.
	pub fn color(&self) -> Rgb {
		self.color
	}

	/// Returns the cell at the given position within this block.
	pub fn cell(&self, position: CellPosition) -> &Cell {
		&self.cells[position.xyz() as usize]
	}
}

/// The full 4x4x4 grid of blocks. The domain exclusively owns every block
/// and cell record; all mutation goes through the two color setters.
pub struct CubeDomain {
	blocks: [Block; 64],
}

impl CubeDomain {
	/// Constructs the domain with default block colors, unset cell colors,
	/// and cell values drawn from the thread-local RNG.
	pub fn new() -> Self {
		CubeDomain::with_rng(&mut rand::thread_rng())
	}

	/// Constructs the domain drawing cell values from the given RNG, for
	/// deterministic output under a fixed seed.
	pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let empty = Block {
			color: Rgb::LIGHT_BLUE,
			cells: [Cell { value: 0.0, color: None }; 8],
		};

		let mut blocks = [empty; 64];

		for block in blocks.iter_mut() {
			for cell in block.cells.iter_mut() {
				cell.value = rng.gen();
			}
		}

		CubeDomain { blocks }
	}

	/// Overwrites the display color of the block at the given position.
	/// Last write wins.
	pub fn set_block_color(&mut self, position: BlockPosition, color: Rgb) {
		self.blocks[position.xyz() as usize].color = color;
	}

	/// Overwrites the color of a cell within a block, replacing either the
	/// unset state or a previously set color.
	pub fn set_cell_color(&mut self, block: BlockPosition, cell: CellPosition, color: Rgb) {
		self.blocks[block.xyz() as usize].cells[cell.xyz() as usize].color = Some(color);
	}

	/// Returns the block at the given position.
	pub fn block(&self, position: BlockPosition) -> &Block {
		&self.blocks[position.xyz() as usize]
	}

	/// Returns the display color of the block at the given position.
	pub fn block_color(&self, position: BlockPosition) -> Rgb {
		self.blocks[position.xyz() as usize].color
	}

	/// Returns the cell at the given block and cell position.
	pub fn cell(&self, block: BlockPosition, cell: CellPosition) -> &Cell {
		self.blocks[block.xyz() as usize].cell(cell)
	}
}

impl Default for CubeDomain {
	fn default() -> Self {
		CubeDomain::new()
	}
}

#[cfg(test)]
mod test {
	use crate::color::Rgb;
	use crate::domain::CubeDomain;
	use crate::position::{BlockPosition, CellPosition};

	use rand::rngs::StdRng;
	use rand::SeedableRng;

	#[test]
	fn test_fresh_domain() {
		let domain = CubeDomain::new();

		for block in BlockPosition::enumerate() {
			assert_eq!(domain.block_color(block), Rgb::LIGHT_BLUE);

			for cell in CellPosition::enumerate() {
				let cell = domain.cell(block, cell);

				assert_eq!(cell.color, None, "cell colors start unset");
				assert!(cell.value >= 0.0 && cell.value < 1.0);
			}
		}
	}

	#[test]
	fn test_set_block_color() {
		let mut domain = CubeDomain::new();
		let target = BlockPosition::new(1, 2, 3);

		domain.set_block_color(target, Rgb::RED);

		for block in BlockPosition::enumerate() {
			let expected = if block == target { Rgb::RED } else { Rgb::LIGHT_BLUE };

			assert_eq!(domain.block_color(block), expected);
		}

		// Last write wins.
		domain.set_block_color(target, Rgb::BLUE);
		assert_eq!(domain.block_color(target), Rgb::BLUE);
	}

	#[test]
	fn test_set_cell_color() {
		let mut domain = CubeDomain::new();
		let block = BlockPosition::new(0, 0, 0);
		let target = CellPosition::new(1, 1, 1);

		domain.set_cell_color(block, target, Rgb::GREEN);

		for cell in CellPosition::enumerate() {
			let expected = if cell == target { Some(Rgb::GREEN) } else { None };

			assert_eq!(domain.cell(block, cell).color, expected);
		}

		// The block's own color is untouched.
		assert_eq!(domain.block_color(block), Rgb::LIGHT_BLUE);

		domain.set_cell_color(block, target, Rgb::YELLOW);
		assert_eq!(domain.cell(block, target).color, Some(Rgb::YELLOW));
	}

	#[test]
	fn test_seeded_values_deterministic() {
		let first = CubeDomain::with_rng(&mut StdRng::seed_from_u64(8128));
		let second = CubeDomain::with_rng(&mut StdRng::seed_from_u64(8128));

		for block in BlockPosition::enumerate() {
			for cell in CellPosition::enumerate() {
				assert_eq!(first.cell(block, cell).value, second.cell(block, cell).value);
			}
		}
	}
}
