mod unit;
pub use unit::*;
mod duration;
pub use duration::*;
mod render;
pub use render::*;
