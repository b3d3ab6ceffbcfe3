//! Camera offset and coordinate conversion.
//!
//! World coordinates are screen coordinates translated by the camera
//! offset: `world = screen + offset`. There is no zoom.

use schemakit_core::Point;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    offset: Point,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: Point) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        screen + self.offset
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        world - self.offset
    }

    /// Pans so that content follows a pointer that moved by `screen_delta`.
    pub fn pan_by(&mut self, screen_delta: Point) {
        self.offset -= screen_delta;
    }
}
