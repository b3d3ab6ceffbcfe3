use super::EditorState;
use crate::frame::{ComponentView, FrameView, PreviewView, WireView};

impl EditorState {
    /// Builds the render view for the current state without mutating it.
    pub fn view(&self) -> FrameView {
        let components = self
            .scene
            .components
            .iter()
            .map(|(id, c)| ComponentView {
                id,
                kind: c.kind.clone(),
                position: c.position,
                rotation: c.rotation,
                orientation: c.orientation(),
                selected: self.selection.is_selected(id),
                pins: c.pins(&self.pins),
            })
            .collect();

        let wires = self
            .scene
            .wires
            .iter()
            .map(|(id, w)| WireView {
                id,
                points: w.points().to_vec(),
            })
            .collect();

        let preview = self
            .router
            .preview(self.pointer.world, &self.scene, &self.snapper, &self.pins)
            .map(|p| PreviewView {
                points: p.points,
                snapped: p.snapped,
            });

        FrameView {
            components,
            wires,
            active_wire: self.router.active_wire().map(|w| w.points().to_vec()),
            preview,
            selection_rect: self.selection.box_rect(self.pointer.screen),
            camera_offset: self.viewport.offset(),
            pointer_screen: self.pointer.screen,
            pointer_world: self.pointer.world,
            grid_size: self.config.grid_size,
        }
    }
}
