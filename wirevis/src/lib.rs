//! # `wirevis`: wireframe renderer for a decomposed cube domain
//!
//! Turns a `cubedom::CubeDomain` into a PNG: block outlines in their display
//! colors, outlines for every cell that has been painted, and labelled axes,
//! all projected through an orthographic camera.

extern crate cgmath;
extern crate cubedom;
extern crate image;
extern crate imageproc;

pub mod geometry;
pub mod project;
pub mod render;
