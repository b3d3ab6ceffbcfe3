//! Pointer handling: wire routing, click selection, box selection, drag and
//! camera pan.

use super::EditorState;
use crate::input::PointerButton;
use crate::routing::RouteOutcome;
use crate::selection_manager::SelectionManager;
use schemakit_core::Point;

impl EditorState {
    /// Primary press at the current pointer.
    ///
    /// Wire routing gets the first look; if it ignores the press, the press
    /// selects (and starts dragging) a component or begins a box selection.
    /// Starting a drag records an undo snapshot, even if nothing moves.
    pub(crate) fn press_primary(&mut self) {
        let world = self.pointer.world;

        let outcome = self.router.press(
            world,
            &mut self.scene,
            &mut self.history,
            &self.snapper,
            &self.pins,
        );
        if outcome != RouteOutcome::Ignored {
            self.selection.cancel_box();
            return;
        }

        match SelectionManager::hit_test(&self.scene, world, &self.snapper) {
            Some(hit) => {
                if self.pointer.multi_select {
                    self.selection.add(hit);
                } else {
                    self.selection.select_only(hit);
                }
                self.history.record(&self.scene);
                self.selection.begin_drag(&self.scene, world);
                tracing::debug!(component = %hit, selected = self.selection.len(), "component selected");
            }
            None => {
                if !self.pointer.multi_select {
                    self.selection.clear();
                }
                self.selection.begin_box(self.pointer.screen);
            }
        }
    }

    /// Primary release: completes a box selection and ends any drag.
    pub(crate) fn release_primary(&mut self) {
        if self.selection.is_box_selecting() {
            let count = self.selection.finish_box(
                &self.scene,
                &self.viewport,
                self.pointer.screen,
                self.pointer.multi_select,
            );
            tracing::debug!(count, "box selection finished");
        }
        self.selection.end_drag();
    }

    /// Pans the camera while the middle button is held.
    pub(crate) fn update_pan(&mut self) {
        if !self.pointer.buttons.is_held(PointerButton::Middle) {
            self.pointer.pan_anchor = None;
            return;
        }
        let Some(anchor) = self.pointer.pan_anchor else {
            return;
        };
        let delta = self.pointer.screen - anchor;
        if delta == Point::ZERO {
            return;
        }
        self.viewport.pan_by(delta);
        self.pointer.pan_anchor = Some(self.pointer.screen);
        self.pointer.world = self.viewport.screen_to_world(self.pointer.screen);
    }

    /// Moves dragged components to their grid-snapped targets and
    /// re-resolves every wire attachment.
    pub(crate) fn update_drag(&mut self) {
        if !self.pointer.buttons.is_held(PointerButton::Primary)
            || self.selection.is_empty()
            || !self.selection.is_dragging()
        {
            return;
        }

        let targets = self
            .selection
            .drag_targets(self.pointer.world, &self.snapper);
        for (id, target) in targets {
            if let Some(component) = self.scene.component_mut(id) {
                component.position = target;
            }
        }

        self.resolve_all_attachments();
    }
}
