//! Snapping: grid quantization and radius queries against pins, wire
//! vertices and wire segments.
//!
//! All radius checks compare squared distances. Interactive points resolve
//! with the precedence pin, wire vertex, wire segment, grid.

use crate::geometry::nearest_point_on_segment;
use crate::model::{Attachment, ComponentId, WireId};
use crate::pin_table::PinTable;
use crate::scene::Scene;
use schemakit_core::constants::{GRID_SIZE, SNAP_RADIUS};
use schemakit_core::Point;

/// A pin found within the snap radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinHit {
    pub component: ComponentId,
    pub pin: usize,
    pub position: Point,
}

impl PinHit {
    pub fn attachment(&self) -> Attachment {
        Attachment::new(self.component, self.pin)
    }
}

/// A wire segment found within the snap radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub wire: WireId,
    /// Index of the segment's first point.
    pub segment: usize,
    /// Projection of the pointer onto the segment.
    pub point: Point,
}

/// Outcome of resolving a pointer position through the snap precedence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTarget {
    Pin(PinHit),
    WireVertex(Point),
    WireSegment(SegmentHit),
    Grid(Point),
}

impl SnapTarget {
    /// True for pin and wire-vertex snaps.
    pub fn is_snapped(&self) -> bool {
        matches!(self, SnapTarget::Pin(_) | SnapTarget::WireVertex(_))
    }
}

/// Grid size and snap radius used by every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapper {
    pub grid_size: f64,
    pub radius: f64,
}

impl Default for Snapper {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            radius: SNAP_RADIUS,
        }
    }
}

impl Snapper {
    pub fn new(grid_size: f64, radius: f64) -> Self {
        Self { grid_size, radius }
    }

    fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Rounds each axis to the nearest grid line. Halfway values go to the
    /// even grid index, so `100` snaps to `80` on a 40 grid.
    pub fn snap_to_grid(&self, p: Point) -> Point {
        let g = self.grid_size;
        Point::new(
            (p.x / g).round_ties_even() * g,
            (p.y / g).round_ties_even() * g,
        )
    }

    /// Nearest pin of any component within the radius.
    ///
    /// Ties keep the first candidate in component then pin order.
    pub fn snap_to_pin(&self, pointer: Point, scene: &Scene, table: &PinTable) -> Option<PinHit> {
        let mut best: Option<(f64, PinHit)> = None;
        let limit = self.radius_squared();

        for (id, component) in scene.components.iter() {
            for (pin, position) in component.pins(table).into_iter().enumerate() {
                let d2 = position.distance_squared(pointer);
                if d2 > limit {
                    continue;
                }
                if best.as_ref().is_none_or(|(best_d2, _)| d2 < *best_d2) {
                    best = Some((
                        d2,
                        PinHit {
                            component: id,
                            pin,
                            position,
                        },
                    ));
                }
            }
        }

        best.map(|(_, hit)| hit)
    }

    /// Nearest vertex of any committed wire within the radius.
    pub fn snap_to_wire_point(&self, pointer: Point, scene: &Scene) -> Option<Point> {
        let mut best: Option<(f64, Point)> = None;
        let limit = self.radius_squared();

        for wire in scene.wires.values() {
            for &vertex in wire.points() {
                let d2 = vertex.distance_squared(pointer);
                if d2 <= limit && best.is_none_or(|(best_d2, _)| d2 < best_d2) {
                    best = Some((d2, vertex));
                }
            }
        }

        best.map(|(_, p)| p)
    }

    /// First wire segment, in wire then segment order, whose projection of
    /// the pointer lies within the radius.
    pub fn snap_to_wire_segment(&self, pointer: Point, scene: &Scene) -> Option<SegmentHit> {
        let limit = self.radius_squared();

        scene.wires.iter().find_map(|(id, wire)| {
            wire.segments().find_map(|(segment, a, b)| {
                let point = nearest_point_on_segment(a, b, pointer);
                (point.distance_squared(pointer) <= limit).then_some(SegmentHit {
                    wire: id,
                    segment,
                    point,
                })
            })
        })
    }

    /// Full precedence: pin, wire vertex, wire segment, then grid.
    pub fn resolve(&self, pointer: Point, scene: &Scene, table: &PinTable) -> SnapTarget {
        if let Some(hit) = self.snap_to_pin(pointer, scene, table) {
            return SnapTarget::Pin(hit);
        }
        if let Some(vertex) = self.snap_to_wire_point(pointer, scene) {
            return SnapTarget::WireVertex(vertex);
        }
        if let Some(hit) = self.snap_to_wire_segment(pointer, scene) {
            return SnapTarget::WireSegment(hit);
        }
        SnapTarget::Grid(self.snap_to_grid(pointer))
    }

    /// Precedence for the live preview, which never offers a segment split.
    pub fn resolve_preview(&self, pointer: Point, scene: &Scene, table: &PinTable) -> SnapTarget {
        if let Some(hit) = self.snap_to_pin(pointer, scene, table) {
            return SnapTarget::Pin(hit);
        }
        if let Some(vertex) = self.snap_to_wire_point(pointer, scene) {
            return SnapTarget::WireVertex(vertex);
        }
        SnapTarget::Grid(self.snap_to_grid(pointer))
    }
}
