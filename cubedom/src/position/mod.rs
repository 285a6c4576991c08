mod block;
mod cell;

pub use self::block::BlockPosition;
pub use self::cell::CellPosition;

/// Number of blocks along each axis of the domain.
pub const BLOCKS_PER_AXIS: u8 = 4;
/// Number of cells along each axis of a block.
pub const CELLS_PER_AXIS: u8 = 2;

/// Total number of blocks in the domain.
pub const BLOCK_VOLUME: u8 = 64;
/// Total number of cells in a single block.
pub const CELL_VOLUME: u8 = 8;

/// Edge length of a block in world units.
pub const BLOCK_SIZE: f64 = 2.0;
/// Edge length of a cell in world units.
pub const CELL_SIZE: f64 = 1.0;
/// Extent of the whole domain in world units: 4 blocks of edge length 2.
pub const DOMAIN_SIZE: f64 = 8.0;
