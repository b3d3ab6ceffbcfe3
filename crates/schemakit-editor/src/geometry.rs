//! Geometry kernel: pure functions used by routing, snapping and selection.
//!
//! Nothing in this module touches the scene. Every function is total over
//! finite inputs.

use schemakit_core::{Point, Rect};
use smallvec::{smallvec, SmallVec};

/// Points produced by [`orthogonal_path`]: the optional bend followed by the
/// end point.
pub type OrthoPath = SmallVec<[Point; 2]>;

/// Computes an L-shaped path from `a` to `b`.
///
/// The returned points exclude `a`. When `a` and `b` already share an axis
/// the path is just `[b]`. Otherwise one of the two corners `(b.x, a.y)`
/// (horizontal first) or `(a.x, b.y)` (vertical first) is inserted. With a
/// `reference` point the corner nearer to it wins, ties going to the
/// horizontal-first corner; without one the horizontal-first corner is used.
///
/// # Examples
///
/// ```
/// use schemakit_core::Point;
/// use schemakit_editor::geometry::orthogonal_path;
///
/// let path = orthogonal_path(Point::new(0.0, 0.0), Point::new(10.0, 10.0), None);
/// assert_eq!(path.as_slice(), &[Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
/// ```
pub fn orthogonal_path(a: Point, b: Point, reference: Option<Point>) -> OrthoPath {
    if a.x == b.x || a.y == b.y {
        return smallvec![b];
    }

    let corner_hv = Point::new(b.x, a.y);
    let corner_vh = Point::new(a.x, b.y);

    let corner = match reference {
        Some(r) if corner_vh.distance_squared(r) < corner_hv.distance_squared(r) => corner_vh,
        _ => corner_hv,
    };

    smallvec![corner, b]
}

/// Rotates `point` about the origin by `angle_deg` degrees.
///
/// Multiples of 90 degrees are mapped exactly so that rotated pin offsets
/// stay on the same lattice as grid-snapped positions.
pub fn rotate(point: Point, angle_deg: f64) -> Point {
    let quarter = angle_deg / 90.0;
    if quarter.fract() == 0.0 && quarter.is_finite() {
        return match (quarter as i64).rem_euclid(4) {
            0 => point,
            1 => Point::new(0.0 - point.y, point.x),
            2 => Point::new(0.0 - point.x, 0.0 - point.y),
            _ => Point::new(point.y, 0.0 - point.x),
        };
    }

    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
    )
}

/// Projects `p` onto the segment `a`-`b`, clamped to the segment.
///
/// A degenerate segment (`a == b`) projects everything onto `a`.
pub fn nearest_point_on_segment(a: Point, b: Point, p: Point) -> Point {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// Removes interior points that sit on a horizontal or vertical line with
/// both neighbours.
///
/// The first and last points are always kept. See
/// [`clean_collinear_indices`] for the scan rules.
pub fn clean_collinear_points(points: &[Point]) -> Vec<Point> {
    clean_collinear_indices(points, |_| false)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Returns the indices of `points` that survive collinear cleanup.
///
/// Each pass scans left to right and compares a candidate against the last
/// *kept* point and the candidate's successor in the pass input. Passes
/// repeat until nothing more is removed, so the result is a fixed point.
/// Indices for which `pinned` returns true are never removed.
pub fn clean_collinear_indices<F>(points: &[Point], pinned: F) -> Vec<usize>
where
    F: Fn(usize) -> bool,
{
    let mut kept: Vec<usize> = (0..points.len()).collect();

    loop {
        if kept.len() < 3 {
            return kept;
        }

        let mut next_pass = Vec::with_capacity(kept.len());
        next_pass.push(kept[0]);

        for window in 1..kept.len() - 1 {
            let idx = kept[window];
            let prev = points[*next_pass.last().unwrap_or(&kept[0])];
            let curr = points[idx];
            let next = points[kept[window + 1]];

            let vertical = prev.x == curr.x && curr.x == next.x;
            let horizontal = prev.y == curr.y && curr.y == next.y;

            if (vertical || horizontal) && !pinned(idx) {
                continue;
            }
            next_pass.push(idx);
        }

        next_pass.push(kept[kept.len() - 1]);

        if next_pass.len() == kept.len() {
            return next_pass;
        }
        kept = next_pass;
    }
}

/// Axis-aligned rectangle spanned by two corners, with non-negative size.
pub fn bounding_rect(a: Point, b: Point) -> Rect {
    Rect::from_corners(a, b)
}
