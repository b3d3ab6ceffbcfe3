//! Geometric primitives shared across the workspace.
//!
//! ## Modules
//!
//! - [`point`]: 2D point/vector in world or screen units
//! - [`rect`]: Axis-aligned rectangle with inclusive containment

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rect;
