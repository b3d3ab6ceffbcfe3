use crate::geometry::bounding_rect;
use crate::model::ComponentId;
use crate::scene::Scene;
use crate::snapping::Snapper;
use crate::viewport::Viewport;
use schemakit_core::{Point, Rect};

/// Manages component selection, drag offsets and box selection.
///
/// `SelectionManager` is responsible for:
/// - Tracking the set of selected components (no duplicates)
/// - Hit-testing a single component under the pointer
/// - Capturing per-component drag offsets at drag start
/// - Tracking the screen-space rectangle of a box selection
///
/// # Selection Model
///
/// - **Plain click**: replaces the selection with the hit component
/// - **Modifier click**: adds the hit component if it is not selected yet
/// - **Box selection**: on release, components whose screen position lies
///   inside the rectangle become the selection, or are added to it when the
///   modifier is held
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<ComponentId>,
    /// Parallel to `selected` while a drag is in progress.
    drag_offsets: Vec<Point>,
    box_start: Option<Point>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemakit_editor::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert!(!manager.is_dragging());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[ComponentId] {
        &self.selected
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Clears the selection and any drag in progress.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.drag_offsets.clear();
    }

    /// Replaces the selection with a single component.
    pub fn select_only(&mut self, id: ComponentId) {
        self.selected.clear();
        self.selected.push(id);
        self.drag_offsets.clear();
    }

    /// Adds a component unless it is already selected.
    pub fn add(&mut self, id: ComponentId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Drops handles that no longer exist in `scene`.
    pub fn retain_existing(&mut self, scene: &Scene) {
        self.selected.retain(|id| scene.components.contains(*id));
        self.drag_offsets.clear();
    }

    /// Finds the first component whose position is within half a grid cell
    /// of the grid-snapped pointer.
    pub fn hit_test(scene: &Scene, pointer: Point, snapper: &Snapper) -> Option<ComponentId> {
        let snapped = snapper.snap_to_grid(pointer);
        let half = snapper.grid_size / 2.0;
        scene
            .components
            .iter()
            .find(|(_, c)| c.position.distance_to(snapped) < half)
            .map(|(id, _)| id)
    }

    /// Records `position - pointer` for every selected component.
    pub fn begin_drag(&mut self, scene: &Scene, pointer: Point) {
        self.selected.retain(|id| scene.components.contains(*id));
        self.drag_offsets = self
            .selected
            .iter()
            .filter_map(|id| scene.component(*id))
            .map(|c| c.position - pointer)
            .collect();
    }

    pub fn is_dragging(&self) -> bool {
        !self.drag_offsets.is_empty()
    }

    pub fn end_drag(&mut self) {
        self.drag_offsets.clear();
    }

    /// Grid-snapped target positions for the current pointer.
    pub fn drag_targets(&self, pointer: Point, snapper: &Snapper) -> Vec<(ComponentId, Point)> {
        self.selected
            .iter()
            .zip(&self.drag_offsets)
            .map(|(id, offset)| (*id, snapper.snap_to_grid(pointer + *offset)))
            .collect()
    }

    /// Starts a box selection at a screen-space corner.
    pub fn begin_box(&mut self, screen: Point) {
        self.box_start = Some(screen);
    }

    pub fn is_box_selecting(&self) -> bool {
        self.box_start.is_some()
    }

    /// Current box in screen space, if a box selection is in progress.
    pub fn box_rect(&self, screen: Point) -> Option<Rect> {
        self.box_start.map(|start| bounding_rect(start, screen))
    }

    /// Ends a box selection and applies it. Returns the number of
    /// components the box contained.
    pub fn finish_box(
        &mut self,
        scene: &Scene,
        viewport: &Viewport,
        screen: Point,
        additive: bool,
    ) -> usize {
        let Some(rect) = self.box_rect(screen) else {
            return 0;
        };
        self.box_start = None;

        let inside: Vec<ComponentId> = scene
            .components
            .iter()
            .filter(|(_, c)| rect.contains(viewport.world_to_screen(c.position)))
            .map(|(id, _)| id)
            .collect();

        if !additive {
            self.selected.clear();
        }
        for id in &inside {
            self.add(*id);
        }
        self.drag_offsets.clear();
        inside.len()
    }

    /// Abandons a box selection without changing the selection.
    pub fn cancel_box(&mut self) {
        self.box_start = None;
    }
}
