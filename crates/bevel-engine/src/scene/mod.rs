//! Recorded draw stream.
//!
//! Responsibilities:
//! - record draw commands in paint order
//! - act as a [`Surface`](crate::surface::Surface) so layout tests can inspect
//!   what a component tree paints without a framebuffer

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
