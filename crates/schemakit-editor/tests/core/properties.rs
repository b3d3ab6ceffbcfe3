use proptest::prelude::*;
use schemakit_core::Point;
use schemakit_editor::geometry::{clean_collinear_points, orthogonal_path, rotate};
use schemakit_editor::input::{InputFrame, PointerButton};
use schemakit_editor::snapping::Snapper;
use schemakit_editor::EditorState;

fn lattice_point() -> impl Strategy<Value = Point> {
    (-6i32..6, -6i32..6).prop_map(|(x, y)| Point::new(f64::from(x) * 10.0, f64::from(y) * 10.0))
}

fn any_point() -> impl Strategy<Value = Point> {
    (-10_000.0f64..10_000.0, -10_000.0f64..10_000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn clean_collinear_is_idempotent(points in prop::collection::vec(lattice_point(), 0..12)) {
        let once = clean_collinear_points(&points);
        let twice = clean_collinear_points(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn clean_collinear_keeps_endpoints(points in prop::collection::vec(lattice_point(), 2..12)) {
        let cleaned = clean_collinear_points(&points);
        prop_assert_eq!(cleaned.first(), points.first());
        prop_assert_eq!(cleaned.last(), points.last());
    }

    #[test]
    fn grid_snap_is_idempotent(p in any_point(), grid in prop::sample::select(vec![10.0, 20.0, 40.0, 50.0])) {
        let snapper = Snapper::new(grid, 8.0);
        let once = snapper.snap_to_grid(p);
        prop_assert_eq!(snapper.snap_to_grid(once), once);
    }

    #[test]
    fn four_quarter_turns_restore_pin(x in -100i32..100, y in -100i32..100) {
        let pin = Point::new(f64::from(x), f64::from(y));
        let mut rotated = pin;
        for _ in 0..4 {
            rotated = rotate(rotated, 90.0);
        }
        prop_assert_eq!(rotated, pin);
        prop_assert_eq!(rotate(rotate(pin, 90.0), 270.0), pin);
    }

    #[test]
    fn orthogonal_path_is_axis_aligned(a in any_point(), b in any_point(), reference in prop::option::of(any_point())) {
        let path = orthogonal_path(a, b, reference);
        prop_assert!(!path.is_empty() && path.len() <= 2);
        prop_assert_eq!(path[path.len() - 1], b);

        let mut prev = a;
        for &next in &path {
            prop_assert!(prev.x == next.x || prev.y == next.y);
            prev = next;
        }
    }

    #[test]
    fn drag_keeps_attachments_consistent(dx in -400.0f64..400.0, dy in -400.0f64..400.0) {
        let mut editor = EditorState::new();
        for x in [80.0, 200.0] {
            let at = Point::new(x, 80.0);
            editor.process_frame(&InputFrame::at(at).press(PointerButton::Secondary));
            editor.process_frame(&InputFrame::at(at).release(PointerButton::Secondary));
        }
        for x in [100.0, 180.0] {
            let at = Point::new(x, 80.0);
            editor.process_frame(&InputFrame::at(at).press(PointerButton::Primary));
            editor.process_frame(&InputFrame::at(at).release(PointerButton::Primary));
        }
        prop_assert_eq!(editor.scene.wires.len(), 1);

        let grab = Point::new(200.0, 80.0);
        let target = grab + Point::new(dx, dy);
        editor.process_frame(&InputFrame::at(grab).press(PointerButton::Primary));
        editor.process_frame(&InputFrame::at(target).hold(PointerButton::Primary));
        prop_assert!(editor.scene.attachments_consistent(editor.pins()));

        editor.undo();
        prop_assert!(editor.scene.attachments_consistent(editor.pins()));
    }
}
