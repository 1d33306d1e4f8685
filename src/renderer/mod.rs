//! WebGPU rendering module
//!
//! Draws the simulation's vertex pairs as a line list.

pub mod pipeline;

pub use pipeline::{Globals, LineRenderer, pixel_to_ndc, vertex_layout};
