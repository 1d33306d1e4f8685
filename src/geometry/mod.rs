//! Line geometry shared by the simulation and the renderer
//!
//! Everything here emits plain [`Vertex`] pairs. Each consecutive pair is one
//! independent line segment; no GPU types are involved.

pub mod shapes;
pub mod text;
pub mod vertex;

pub use text::{glyph_segments, layout_text, text_width};
pub use vertex::{Vertex, colors};
