pub mod config;
pub mod constants;
pub mod debounce;
pub mod drag;
pub mod geometry;
pub mod panel;
pub mod placement;
pub mod slideshow;
pub mod style;
pub mod zorder;

pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use drag::*;
pub use geometry::*;
pub use panel::*;
pub use placement::*;
pub use slideshow::*;
pub use style::*;
pub use zorder::*;
