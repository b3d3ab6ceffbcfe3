use crate::geometry::rotate;
use crate::pin_table::PinTable;
use schemakit_core::Point;
use serde::{Deserialize, Serialize};

/// A placed component.
///
/// Pins are never stored: they are derived from the kind's local pin
/// offsets, the rotation and the position every time they are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Kind name, the key into the [`PinTable`].
    pub kind: String,
    /// World position, grid-aligned by every editing operation.
    pub position: Point,
    /// Rotation in degrees, one of 0, 90, 180, 270.
    pub rotation: u16,
}

/// Direction of the orientation indicator drawn on a component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Component {
    pub fn new(kind: impl Into<String>, position: Point) -> Self {
        Self {
            kind: kind.into(),
            position,
            rotation: 0,
        }
    }

    /// World positions of all pins, in pin-table order.
    pub fn pins(&self, table: &PinTable) -> Vec<Point> {
        table
            .local_pins(&self.kind)
            .iter()
            .map(|local| self.position + rotate(*local, f64::from(self.rotation)))
            .collect()
    }

    /// World position of a single pin, or `None` if the kind has no such pin.
    pub fn pin(&self, table: &PinTable, index: usize) -> Option<Point> {
        table
            .local_pins(&self.kind)
            .get(index)
            .map(|local| self.position + rotate(*local, f64::from(self.rotation)))
    }

    /// Advances the rotation by `step` degrees, wrapping at 360.
    pub fn rotate_by(&mut self, step: u16) {
        self.rotation = ((u32::from(self.rotation) + u32::from(step)) % 360) as u16;
    }

    pub fn orientation(&self) -> Orientation {
        if self.rotation % 180 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}
