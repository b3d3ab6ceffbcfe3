//! One-shot editing actions.
//!
//! Every action that mutates the scene pushes exactly one undo snapshot, and
//! only when it is actually going to change something.

use super::EditorState;
use crate::model::{Component, ComponentId, WireId};
use schemakit_core::Point;

impl EditorState {
    /// Places a component of the default kind at the grid-snapped position.
    pub fn place_component_at(&mut self, world: Point) -> ComponentId {
        let position = self.snapper.snap_to_grid(world);
        self.history.record(&self.scene);
        let id = self.scene.add_component(Component::new(
            self.config.default_component.clone(),
            position,
        ));
        tracing::debug!(component = %id, kind = %self.config.default_component, %position, "component placed");
        id
    }

    /// Rotates every selected component by the configured step.
    ///
    /// Returns false without recording history when nothing is selected.
    pub fn rotate_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.history.record(&self.scene);

        let step = self.config.rotation_step;
        for id in self.selection.selected() {
            if let Some(component) = self.scene.components.get_mut(*id) {
                component.rotate_by(step);
            }
        }
        self.resolve_all_attachments();
        tracing::debug!(count = self.selection.len(), step, "selection rotated");
        true
    }

    /// Deletes the first wire with a segment within the snap radius of
    /// `world`.
    pub fn delete_wire_at(&mut self, world: Point) -> Option<WireId> {
        let hit = self.snapper.snap_to_wire_segment(world, &self.scene)?;
        self.history.record(&self.scene);
        self.scene.remove_wire(hit.wire);
        tracing::debug!(wire = %hit.wire, "wire deleted");
        Some(hit.wire)
    }

    /// Deletes every selected component. Wires that were attached to them
    /// keep their points but lose those attachments.
    pub fn delete_selection(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.history.record(&self.scene);

        let mut removed = 0;
        for id in self.selection.selected() {
            if self.scene.remove_component(*id).is_some() {
                removed += 1;
            }
        }
        self.selection.clear();
        tracing::debug!(removed, "selection deleted");
        removed
    }

    /// Discards the wire under construction, if any.
    pub fn cancel_wire(&mut self) -> bool {
        self.router.cancel()
    }

    pub fn undo(&mut self) -> bool {
        let restored = self.history.undo(&mut self.scene);
        if restored {
            self.after_restore();
        }
        restored
    }

    pub fn redo(&mut self) -> bool {
        let restored = self.history.redo(&mut self.scene);
        if restored {
            self.after_restore();
        }
        restored
    }

    /// Brings transient state back in line with a restored scene.
    fn after_restore(&mut self) {
        self.selection.retain_existing(&self.scene);
        self.selection.end_drag();
        self.resolve_all_attachments();
    }
}
