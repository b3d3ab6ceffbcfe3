//! Undo/redo over whole-scene snapshots.
//!
//! Every snapshot is an owned clone of the scene, so later in-place edits of
//! the live scene can never reach into the stacks. The cost is one scene
//! copy per recorded action, which is fine for hand-drawn schematics but
//! grows with scene size.

use crate::scene::Scene;
use schemakit_core::constants::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Scene>,
    redo_stack: Vec<Scene>,
    /// Maximum undo depth; 0 means unbounded.
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Pushes a snapshot of `scene` and clears the redo stack.
    ///
    /// Call immediately before mutating the scene.
    pub fn record(&mut self, scene: &Scene) {
        self.undo_stack.push(scene.clone());
        self.redo_stack.clear();

        if self.limit > 0 && self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
        tracing::trace!(depth = self.undo_stack.len(), "history snapshot recorded");
    }

    /// Restores the most recent snapshot. Returns false on an empty stack.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(scene, previous));
        tracing::info!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        true
    }

    /// Re-applies the most recently undone snapshot. Returns false on an
    /// empty stack.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(scene, next));
        tracing::info!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
