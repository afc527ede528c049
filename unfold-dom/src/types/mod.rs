mod edges;
mod enums;
mod geometry;

pub use edges::Edges;
pub use enums::{Axis, Direction};
pub use geometry::{Rect, Size};
