//! Coordinate and geometry types shared across surfaces and UI.
//!
//! Two spaces coexist:
//! - integer layout space (`Point`, `Size`, `Area`), where box-model arithmetic happens
//! - float path space (`Vec2`, `Rect`), used to build and fill geometry
//!
//! Both use a top-left origin with +X right and +Y down.

mod point;
mod quad;
mod rect;
mod vec2;

pub use point::{Area, Point, Size};
pub use quad::{Corners, Edges};
pub use rect::Rect;
pub use vec2::Vec2;
