use super::ComponentId;
use crate::geometry::clean_collinear_indices;
use schemakit_core::Point;
use serde::{Deserialize, Serialize};

/// Live binding of a wire point to a component pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    pub component: ComponentId,
    pub pin: usize,
}

impl Attachment {
    pub fn new(component: ComponentId, pin: usize) -> Self {
        Self { component, pin }
    }
}

/// An orthogonal polyline with optional per-point pin attachments.
///
/// `points` and `attachments` always have the same length and at least one
/// entry. The fields are private so that every edit keeps them parallel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wire {
    points: Vec<Point>,
    attachments: Vec<Option<Attachment>>,
}

impl Wire {
    /// Starts a wire at a single point.
    pub fn start(point: Point, attachment: Option<Attachment>) -> Self {
        Self {
            points: vec![point],
            attachments: vec![attachment],
        }
    }

    /// Builds a wire from a point list with no attachments.
    ///
    /// Returns `None` for an empty list.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let attachments = vec![None; points.len()];
        Some(Self {
            points,
            attachments,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn attachments(&self) -> &[Option<Attachment>] {
        &self.attachments
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_point(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Consecutive point pairs, with the index of each pair's first point.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i, pair[0], pair[1]))
    }

    pub fn push(&mut self, point: Point, attachment: Option<Attachment>) {
        self.points.push(point);
        self.attachments.push(attachment);
    }

    /// Inserts a point at `index`, shifting later points back.
    pub fn insert(&mut self, index: usize, point: Point, attachment: Option<Attachment>) {
        let index = index.min(self.points.len());
        self.points.insert(index, point);
        self.attachments.insert(index, attachment);
    }

    /// Replaces the attachment at `index`. Out-of-range indices are ignored.
    pub fn set_attachment(&mut self, index: usize, attachment: Option<Attachment>) {
        if let Some(slot) = self.attachments.get_mut(index) {
            *slot = attachment;
        }
    }

    /// Moves the point at `index`. Out-of-range indices are ignored.
    pub fn set_point(&mut self, index: usize, point: Point) {
        if let Some(slot) = self.points.get_mut(index) {
            *slot = point;
        }
    }

    /// True if any point is attached to `component`.
    pub fn is_attached_to(&self, component: ComponentId) -> bool {
        self.attachments
            .iter()
            .flatten()
            .any(|a| a.component == component)
    }

    /// Clears every attachment that references `component`.
    pub fn detach(&mut self, component: ComponentId) {
        for slot in &mut self.attachments {
            if slot.is_some_and(|a| a.component == component) {
                *slot = None;
            }
        }
    }

    /// Removes redundant collinear bends. Attached points are never removed.
    pub fn clean_collinear(&mut self) {
        let attachments = &self.attachments;
        let keep = clean_collinear_indices(&self.points, |i| attachments[i].is_some());
        if keep.len() == self.points.len() {
            return;
        }
        self.points = keep.iter().map(|&i| self.points[i]).collect();
        self.attachments = keep.iter().map(|&i| self.attachments[i]).collect();
    }
}
