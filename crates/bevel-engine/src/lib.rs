//! Bevel engine crate.
//!
//! Owns everything below the component layer: geometry, paint, path
//! construction and filling, text faces, and the surfaces components draw on.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;
pub mod surface;
pub mod text;

pub use surface::Surface;
