pub mod pointer;
pub mod window;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use window::{wire_window_handlers, WindowWiring};
