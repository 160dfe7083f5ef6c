pub mod pointer;
pub mod resize;

pub use pointer::wire_drag;
pub use resize::wire_resize;
