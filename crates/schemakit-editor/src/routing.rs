//! Wire construction and splicing.
//!
//! The router is a two-state machine. `Idle` has no wire under
//! construction; `Routing` owns an active wire that is not yet part of the
//! scene. A press on a pin while routing commits the wire.

use crate::geometry::orthogonal_path;
use crate::history::History;
use crate::model::{Attachment, Wire, WireId};
use crate::pin_table::PinTable;
use crate::scene::Scene;
use crate::snapping::{SegmentHit, SnapTarget, Snapper};
use schemakit_core::Point;

/// Result of feeding a primary press to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Nothing wire-related under the pointer while idle; the press should
    /// fall through to selection.
    Ignored,
    /// A new active wire was started.
    Started,
    /// The active wire grew (or the press landed on its current end).
    Extended,
    /// The active wire was committed to the scene.
    Committed(WireId),
}

/// Preview of the wire under construction for the current pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePreview {
    /// Committed active points followed by the tentative path.
    pub points: Vec<Point>,
    /// The tentative end point.
    pub end: Point,
    /// Whether the end point snapped to a pin or wire vertex.
    pub snapped: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WireRouter {
    active: Option<Wire>,
}

impl WireRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_routing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_wire(&self) -> Option<&Wire> {
        self.active.as_ref()
    }

    pub(crate) fn active_wire_mut(&mut self) -> Option<&mut Wire> {
        self.active.as_mut()
    }

    /// Discards the active wire. Returns false if there was none.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.active.take().is_some();
        if cancelled {
            tracing::debug!("wire cancelled");
        }
        cancelled
    }

    /// Handles a primary press at `pointer` (world space).
    ///
    /// A press on a wire segment splices the hit wire first, under its own
    /// history snapshot. While idle, a press that only resolves to the grid
    /// is ignored so that selection can handle it.
    pub fn press(
        &mut self,
        pointer: Point,
        scene: &mut Scene,
        history: &mut History,
        snapper: &Snapper,
        table: &PinTable,
    ) -> RouteOutcome {
        let target = snapper.resolve(pointer, scene, table);

        if self.active.is_none() && matches!(target, SnapTarget::Grid(_)) {
            return RouteOutcome::Ignored;
        }

        let (point, attachment) = match target {
            SnapTarget::Pin(hit) => (hit.position, Some(hit.attachment())),
            SnapTarget::WireVertex(vertex) => (vertex, None),
            SnapTarget::WireSegment(hit) => {
                history.record(scene);
                match splice_wire(scene, &hit, pointer, snapper) {
                    Some(split) => (split, None),
                    None => (snapper.snap_to_grid(pointer), None),
                }
            }
            SnapTarget::Grid(p) => (p, None),
        };

        match self.active.as_mut() {
            None => {
                tracing::debug!(%point, attached = attachment.is_some(), "wire started");
                self.active = Some(Wire::start(point, attachment));
                RouteOutcome::Started
            }
            Some(active) => {
                extend_wire(active, point, pointer);
                match attachment {
                    Some(pin) => self.commit(pin, scene, history),
                    None => {
                        tracing::debug!(%point, points = active.len(), "wire extended");
                        RouteOutcome::Extended
                    }
                }
            }
        }
    }

    fn commit(&mut self, pin: Attachment, scene: &mut Scene, history: &mut History) -> RouteOutcome {
        let Some(mut wire) = self.active.take() else {
            return RouteOutcome::Ignored;
        };

        if wire.len() < 2 {
            // Pressed the pin the wire started on; keep routing.
            self.active = Some(wire);
            return RouteOutcome::Extended;
        }

        let last = wire.len() - 1;
        wire.set_attachment(last, Some(pin));

        history.record(scene);
        let id = scene.add_wire(wire);
        tracing::debug!(wire = %id, "wire committed");
        RouteOutcome::Committed(id)
    }

    /// Tentative path from the active wire's end to the snapped pointer.
    ///
    /// Does not mutate anything. Returns `None` while idle.
    pub fn preview(
        &self,
        pointer: Point,
        scene: &Scene,
        snapper: &Snapper,
        table: &PinTable,
    ) -> Option<RoutePreview> {
        let active = self.active.as_ref()?;
        let target = snapper.resolve_preview(pointer, scene, table);
        let end = match target {
            SnapTarget::Pin(hit) => hit.position,
            SnapTarget::WireVertex(p) | SnapTarget::Grid(p) => p,
            SnapTarget::WireSegment(hit) => hit.point,
        };

        let mut points = active.points().to_vec();
        points.extend(orthogonal_path(active.last_point(), end, Some(pointer)));

        Some(RoutePreview {
            points,
            end,
            snapped: target.is_snapped(),
        })
    }
}

/// Appends the orthogonal path from the wire's end to `target`, skipping
/// points equal to the current end.
fn extend_wire(wire: &mut Wire, target: Point, pointer: Point) {
    let path = orthogonal_path(wire.last_point(), target, Some(pointer));
    for p in path {
        if p != wire.last_point() {
            wire.push(p, None);
        }
    }
}

/// Splices a new vertex into a committed wire at a segment hit.
///
/// The projected point is grid-snapped, the orthogonal path from the
/// segment's start to it is inserted after the start, and redundant bends
/// are cleaned up. Returns the split point, or `None` if the wire or
/// segment no longer exists.
pub fn splice_wire(
    scene: &mut Scene,
    hit: &SegmentHit,
    pointer: Point,
    snapper: &Snapper,
) -> Option<Point> {
    let wire = scene.wire_mut(hit.wire)?;
    let start = *wire.points().get(hit.segment)?;
    let split = snapper.snap_to_grid(hit.point);

    let mut index = hit.segment;
    for p in orthogonal_path(start, split, Some(pointer)) {
        if p != start {
            index += 1;
            wire.insert(index, p, None);
        }
    }
    wire.clean_collinear();

    tracing::debug!(wire = %hit.wire, segment = hit.segment, %split, "wire spliced");
    Some(split)
}
