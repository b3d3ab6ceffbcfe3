use schemakit_core::Point;
use schemakit_editor::history::History;
use schemakit_editor::model::Component;
use schemakit_editor::scene::Scene;

fn place(scene: &mut Scene, history: &mut History, x: f64) {
    history.record(scene);
    scene.add_component(Component::new("resistor", Point::new(x, 0.0)));
}

#[test]
fn test_undo_redo_round_trip() {
    let mut history = History::default();
    let mut scene = Scene::new();
    let s0 = scene.clone();

    place(&mut scene, &mut history, 40.0);
    let s1 = scene.clone();

    assert!(history.undo(&mut scene));
    assert_eq!(scene, s0);
    assert!(history.redo(&mut scene));
    assert_eq!(scene, s1);
}

#[test]
fn test_empty_stacks_are_noops() {
    let mut history = History::default();
    let mut scene = Scene::new();
    scene.add_component(Component::new("resistor", Point::ZERO));
    let before = scene.clone();

    assert!(!history.undo(&mut scene));
    assert!(!history.redo(&mut scene));
    assert_eq!(scene, before);
}

#[test]
fn test_new_action_clears_redo() {
    let mut history = History::default();
    let mut scene = Scene::new();

    place(&mut scene, &mut history, 0.0);
    place(&mut scene, &mut history, 40.0);
    history.undo(&mut scene);
    assert!(history.can_redo());

    place(&mut scene, &mut history, 80.0);
    assert!(!history.can_redo());
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.undo_depth(), 2);
}

#[test]
fn test_snapshots_are_isolated_from_live_edits() {
    let mut history = History::default();
    let mut scene = Scene::new();
    let id = scene.add_component(Component::new("resistor", Point::ZERO));

    history.record(&scene);
    scene.component_mut(id).unwrap().position = Point::new(400.0, 400.0);

    history.undo(&mut scene);
    assert_eq!(scene.component(id).unwrap().position, Point::ZERO);
}

#[test]
fn test_restore_keeps_handle_allocation() {
    let mut history = History::default();
    let mut scene = Scene::new();

    place(&mut scene, &mut history, 0.0);
    let first = scene.components.ids().next().unwrap();
    history.undo(&mut scene);
    history.redo(&mut scene);

    assert!(scene.component(first).is_some());
}

#[test]
fn test_bounded_history_drops_oldest() {
    let mut history = History::new(3);
    let mut scene = Scene::new();

    for i in 0..5 {
        place(&mut scene, &mut history, f64::from(i) * 40.0);
    }
    assert_eq!(history.undo_depth(), 3);

    while history.undo(&mut scene) {}
    // The two oldest placements can no longer be undone.
    assert_eq!(scene.components.len(), 2);
}

#[test]
fn test_unbounded_history() {
    let mut history = History::new(0);
    let mut scene = Scene::new();

    for i in 0..150 {
        place(&mut scene, &mut history, f64::from(i));
    }
    assert_eq!(history.undo_depth(), 150);
    history.clear();
    assert!(!history.can_undo());
}
