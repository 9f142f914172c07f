//! Built-in components: wrapped text, styled views, and the root window stack.

pub mod text;
pub mod view;
pub mod window;

pub use text::{Text, wrap_text};
pub use view::View;
pub use window::Window;
