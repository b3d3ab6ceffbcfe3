//! Per-frame output handed to the render shell.
//!
//! All positions are in world space; the shell subtracts `camera_offset`
//! to draw them, except `selection_rect` which is already in screen space.

use crate::model::{ComponentId, Orientation, WireId};
use schemakit_core::{Point, Rect};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    pub id: ComponentId,
    pub kind: String,
    pub position: Point,
    pub rotation: u16,
    pub orientation: Orientation,
    pub selected: bool,
    pub pins: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireView {
    pub id: WireId,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewView {
    /// Active wire points followed by the tentative path to the pointer.
    pub points: Vec<Point>,
    /// True when the tentative end snapped to a pin or wire vertex.
    pub snapped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub components: Vec<ComponentView>,
    pub wires: Vec<WireView>,
    /// Points of the wire under construction.
    pub active_wire: Option<Vec<Point>>,
    pub preview: Option<PreviewView>,
    /// Box selection rectangle in screen space.
    pub selection_rect: Option<Rect>,
    pub camera_offset: Point,
    pub pointer_screen: Point,
    pub pointer_world: Point,
    pub grid_size: f64,
}

impl FrameView {
    pub fn component(&self, id: ComponentId) -> Option<&ComponentView> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn wire(&self, id: WireId) -> Option<&WireView> {
        self.wires.iter().find(|w| w.id == id)
    }
}
