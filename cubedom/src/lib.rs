#![forbid(unsafe_code)]

//! # `cubedom`: a decomposed cube domain
//!
//! Model of an 8x8x8 domain split into a 4x4x4 grid of blocks, where each
//! block is the unit of work handed to a single rank and is itself subdivided
//! into 2x2x2 cells. The grid dimensions are fixed: the point of this crate is
//! not a general container, but a small, fully-owned structure that a renderer
//! can walk without indirection.
//!
//! Blocks carry a display color (every block starts out light blue), cells
//! carry an optional color that stays unset until a caller explicitly paints
//! one, plus a demonstration scalar in `[0, 1)` drawn at construction time.

extern crate rand;

pub mod color;
pub mod domain;
pub mod position;

pub use color::Rgb;
pub use domain::CubeDomain;
