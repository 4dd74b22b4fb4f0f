//! # Walker Geometry
//!
//! Turns a walker position history into draw-ready line geometry: a vertex
//! buffer, per-vertex colors and line-adjacency index lists for rings (one
//! polyline per iteration) and edges (one polyline per walker).

pub mod adjacency;
pub mod buffers;
pub mod color;
pub mod error;
pub mod gradient;
pub mod settings;
pub mod view;

pub use adjacency::*;
pub use buffers::*;
pub use color::*;
pub use error::*;
pub use gradient::*;
pub use settings::*;
pub use view::*;
