use schemakit_core::Point;
use schemakit_editor::geometry::{
    bounding_rect, clean_collinear_points, nearest_point_on_segment, orthogonal_path, rotate,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_aligned_points_need_no_bend() {
    assert_eq!(orthogonal_path(p(0.0, 0.0), p(0.0, 50.0), None).as_slice(), &[p(0.0, 50.0)]);
    assert_eq!(orthogonal_path(p(0.0, 0.0), p(50.0, 0.0), None).as_slice(), &[p(50.0, 0.0)]);
    assert_eq!(
        orthogonal_path(p(3.0, 3.0), p(3.0, 3.0), Some(p(100.0, 100.0))).as_slice(),
        &[p(3.0, 3.0)]
    );
}

#[test]
fn test_default_bend_is_horizontal_first() {
    let path = orthogonal_path(p(0.0, 0.0), p(10.0, 10.0), None);
    assert_eq!(path.as_slice(), &[p(10.0, 0.0), p(10.0, 10.0)]);
}

#[test]
fn test_reference_point_picks_nearest_corner() {
    let a = p(0.0, 0.0);
    let b = p(10.0, 10.0);

    let path = orthogonal_path(a, b, Some(p(10.0, 0.0)));
    assert_eq!(path.as_slice(), &[p(10.0, 0.0), p(10.0, 10.0)]);

    let path = orthogonal_path(a, b, Some(p(0.0, 10.0)));
    assert_eq!(path.as_slice(), &[p(0.0, 10.0), p(10.0, 10.0)]);
}

#[test]
fn test_reference_tie_goes_horizontal_first() {
    // Equidistant from both corners.
    let path = orthogonal_path(p(0.0, 0.0), p(10.0, 10.0), Some(p(5.0, 5.0)));
    assert_eq!(path.as_slice(), &[p(10.0, 0.0), p(10.0, 10.0)]);
}

#[test]
fn test_rotate_four_quarter_turns_is_identity() {
    let mut pin = p(20.0, 0.0);
    for _ in 0..4 {
        pin = rotate(pin, 90.0);
    }
    assert_eq!(pin, p(20.0, 0.0));
}

#[test]
fn test_nearest_point_on_vertical_segment() {
    let a = p(40.0, 0.0);
    let b = p(40.0, 80.0);
    assert_eq!(nearest_point_on_segment(a, b, p(45.0, 30.0)), p(40.0, 30.0));
    assert_eq!(nearest_point_on_segment(a, b, p(45.0, 300.0)), b);
}

#[test]
fn test_clean_collinear_removes_straight_bends() {
    let points = [p(0.0, 0.0), p(40.0, 0.0), p(80.0, 0.0), p(80.0, 40.0), p(80.0, 80.0)];
    assert_eq!(
        clean_collinear_points(&points),
        vec![p(0.0, 0.0), p(80.0, 0.0), p(80.0, 80.0)]
    );
}

#[test]
fn test_clean_collinear_keeps_endpoints_and_short_lists() {
    assert!(clean_collinear_points(&[]).is_empty());
    assert_eq!(clean_collinear_points(&[p(1.0, 1.0)]), vec![p(1.0, 1.0)]);
    assert_eq!(
        clean_collinear_points(&[p(0.0, 0.0), p(5.0, 0.0)]),
        vec![p(0.0, 0.0), p(5.0, 0.0)]
    );
}

#[test]
fn test_clean_collinear_reaches_fixed_point() {
    // A backtracking spur collapses over two passes.
    let points = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 5.0), p(1.0, 0.0)];
    let once = clean_collinear_points(&points);
    assert_eq!(clean_collinear_points(&once), once);
}

#[test]
fn test_bounding_rect_normalizes_corners() {
    let rect = bounding_rect(p(100.0, 20.0), p(10.0, 80.0));
    assert_eq!(rect.x, 10.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, 90.0);
    assert_eq!(rect.height, 60.0);
    assert!(rect.contains(p(10.0, 20.0)));
    assert!(rect.contains(p(100.0, 80.0)));
    assert!(!rect.contains(p(101.0, 80.0)));
}
