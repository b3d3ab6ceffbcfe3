use schemakit_core::Point;
use schemakit_editor::history::History;
use schemakit_editor::model::{Attachment, Component, Wire};
use schemakit_editor::pin_table::PinTable;
use schemakit_editor::routing::{splice_wire, RouteOutcome, WireRouter};
use schemakit_editor::scene::Scene;
use schemakit_editor::snapping::{SnapTarget, Snapper};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

struct Bench {
    scene: Scene,
    history: History,
    router: WireRouter,
    snapper: Snapper,
    table: PinTable,
}

impl Bench {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            history: History::default(),
            router: WireRouter::new(),
            snapper: Snapper::default(),
            table: PinTable::with_defaults(),
        }
    }

    fn press(&mut self, x: f64, y: f64) -> RouteOutcome {
        self.router.press(
            p(x, y),
            &mut self.scene,
            &mut self.history,
            &self.snapper,
            &self.table,
        )
    }
}

#[test]
fn test_idle_press_on_empty_grid_is_ignored() {
    let mut bench = Bench::new();
    assert_eq!(bench.press(123.0, 45.0), RouteOutcome::Ignored);
    assert!(!bench.router.is_routing());
    assert!(!bench.history.can_undo());
}

#[test]
fn test_pin_to_pin_wire_commits_with_attachments() {
    let mut bench = Bench::new();
    let left = bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));
    let right = bench.scene.add_component(Component::new("resistor", p(200.0, 80.0)));

    assert_eq!(bench.press(100.0, 80.0), RouteOutcome::Started);
    assert!(bench.router.is_routing());

    let outcome = bench.press(181.0, 82.0);
    let RouteOutcome::Committed(id) = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert!(!bench.router.is_routing());

    let wire = bench.scene.wire(id).unwrap();
    assert_eq!(wire.points(), &[p(100.0, 80.0), p(180.0, 80.0)]);
    assert_eq!(
        wire.attachments(),
        &[
            Some(Attachment::new(left, 1)),
            Some(Attachment::new(right, 0))
        ]
    );
    assert_eq!(bench.history.undo_depth(), 1);
}

#[test]
fn test_grid_press_while_routing_adds_bend() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));

    bench.press(100.0, 80.0);
    assert_eq!(bench.press(203.0, 161.0), RouteOutcome::Extended);

    let active = bench.router.active_wire().unwrap();
    assert_eq!(
        active.points(),
        &[p(100.0, 80.0), p(200.0, 80.0), p(200.0, 160.0)]
    );
    assert!(active.attachments()[1..].iter().all(Option::is_none));
    assert!(bench.scene.wires.is_empty());
}

#[test]
fn test_pressing_start_pin_keeps_routing() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));

    bench.press(100.0, 80.0);
    assert_eq!(bench.press(100.0, 80.0), RouteOutcome::Extended);
    assert!(bench.router.is_routing());
    assert_eq!(bench.router.active_wire().unwrap().len(), 1);
    assert!(bench.scene.wires.is_empty());
}

#[test]
fn test_cancel_discards_active_wire() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));

    bench.press(100.0, 80.0);
    bench.press(100.0, 200.0);
    assert!(bench.router.cancel());
    assert!(!bench.router.is_routing());
    assert!(!bench.router.cancel());
    assert!(bench.scene.wires.is_empty());
    assert!(!bench.history.can_undo());
}

#[test]
fn test_preview_follows_pointer() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));
    assert!(bench
        .router
        .preview(p(0.0, 0.0), &bench.scene, &bench.snapper, &bench.table)
        .is_none());

    bench.press(100.0, 80.0);
    let preview = bench
        .router
        .preview(p(158.0, 5.0), &bench.scene, &bench.snapper, &bench.table)
        .unwrap();
    assert_eq!(preview.end, p(160.0, 0.0));
    assert!(!preview.snapped);
    assert_eq!(
        preview.points,
        vec![p(100.0, 80.0), p(100.0, 0.0), p(160.0, 0.0)]
    );
    // Preview never mutates the active wire.
    assert_eq!(bench.router.active_wire().unwrap().len(), 1);
}

#[test]
fn test_preview_reports_pin_snap() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));
    bench.scene.add_component(Component::new("resistor", p(200.0, 80.0)));

    bench.press(100.0, 80.0);
    let preview = bench
        .router
        .preview(p(178.0, 77.0), &bench.scene, &bench.snapper, &bench.table)
        .unwrap();
    assert_eq!(preview.end, p(180.0, 80.0));
    assert!(preview.snapped);
}

#[test]
fn test_idle_press_on_segment_splices_and_starts_wire() {
    let mut bench = Bench::new();
    let id = bench
        .scene
        .add_wire(Wire::from_points(vec![p(0.0, 10.0), p(200.0, 10.0)]).unwrap());

    assert_eq!(bench.press(83.0, 14.0), RouteOutcome::Started);
    assert_eq!(bench.history.undo_depth(), 1);

    let wire = bench.scene.wire(id).unwrap();
    assert_eq!(
        wire.points(),
        &[p(0.0, 10.0), p(80.0, 10.0), p(80.0, 0.0), p(200.0, 10.0)]
    );
    assert_eq!(bench.router.active_wire().unwrap().points(), &[p(80.0, 0.0)]);
}

#[test]
fn test_splice_on_grid_aligned_segment_leaves_wire_straight() {
    let mut scene = Scene::new();
    let id = scene.add_wire(Wire::from_points(vec![p(0.0, 0.0), p(200.0, 0.0)]).unwrap());
    let snapper = Snapper::default();

    let table = PinTable::with_defaults();
    let SnapTarget::WireSegment(hit) = snapper.resolve(p(83.0, 5.0), &scene, &table) else {
        panic!("expected a segment hit");
    };

    let split = splice_wire(&mut scene, &hit, p(83.0, 5.0), &snapper);
    assert_eq!(split, Some(p(80.0, 0.0)));
    // The split vertex is collinear, so cleanup folds it back in.
    assert_eq!(scene.wire(id).unwrap().points(), &[p(0.0, 0.0), p(200.0, 0.0)]);
}

#[test]
fn test_splice_on_removed_wire_is_noop() {
    let mut scene = Scene::new();
    let id = scene.add_wire(Wire::from_points(vec![p(0.0, 0.0), p(200.0, 0.0)]).unwrap());
    let hit = Snapper::default()
        .snap_to_wire_segment(p(50.0, 2.0), &scene)
        .unwrap();
    scene.remove_wire(id);

    assert_eq!(splice_wire(&mut scene, &hit, p(50.0, 2.0), &Snapper::default()), None);
}

#[test]
fn test_extend_to_wire_vertex_does_not_commit() {
    let mut bench = Bench::new();
    bench.scene.add_component(Component::new("resistor", p(80.0, 80.0)));
    bench
        .scene
        .add_wire(Wire::from_points(vec![p(240.0, 80.0), p(240.0, 240.0)]).unwrap());

    bench.press(100.0, 80.0);
    assert_eq!(bench.press(242.0, 83.0), RouteOutcome::Extended);
    assert_eq!(
        bench.router.active_wire().unwrap().points(),
        &[p(100.0, 80.0), p(240.0, 80.0)]
    );
}
