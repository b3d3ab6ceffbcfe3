//! Editor state manager for shell integration.
//! Owns the scene, history, selection and wire router, and advances them
//! one input frame at a time.
//!
//! This module is split into submodules for better organization:
//! - `pointer`: Primary/secondary button handling, drag and camera pan
//! - `actions`: One-shot actions (rotate, delete, place, undo/redo)
//! - `view`: Building the per-frame render view

mod actions;
mod pointer;
mod view;

use crate::frame::FrameView;
use crate::history::History;
use crate::input::{ButtonState, EditorAction, InputEvent, InputFrame, PointerButton};
use crate::pin_table::PinTable;
use crate::routing::WireRouter;
use crate::scene::Scene;
use crate::selection_manager::SelectionManager;
use crate::snapping::Snapper;
use crate::viewport::Viewport;
use schemakit_core::constants::{
    DEFAULT_COMPONENT_KIND, DEFAULT_HISTORY_LIMIT, GRID_SIZE, ROTATION_STEP, SNAP_RADIUS,
};
use schemakit_core::{Error, Point, Result};

/// Tunables of the editing engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub grid_size: f64,
    pub snap_radius: f64,
    pub rotation_step: u16,
    /// Maximum undo depth; 0 means unbounded.
    pub history_limit: usize,
    pub default_component: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_radius: SNAP_RADIUS,
            rotation_step: ROTATION_STEP,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_component: DEFAULT_COMPONENT_KIND.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(Error::invalid_config(
                "grid_size",
                format!("must be positive and finite, got {}", self.grid_size),
            ));
        }
        if !(self.snap_radius.is_finite() && self.snap_radius > 0.0) {
            return Err(Error::invalid_config(
                "snap_radius",
                format!("must be positive and finite, got {}", self.snap_radius),
            ));
        }
        if self.rotation_step == 0 || self.rotation_step >= 360 || self.rotation_step % 90 != 0 {
            return Err(Error::invalid_config(
                "rotation_step",
                format!("must be 90, 180 or 270, got {}", self.rotation_step),
            ));
        }
        Ok(())
    }

    pub fn snapper(&self) -> Snapper {
        Snapper::new(self.grid_size, self.snap_radius)
    }
}

/// Pointer state as of the current frame.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerState {
    pub(crate) screen: Point,
    pub(crate) world: Point,
    /// Screen position the camera pan is anchored to while the middle
    /// button is held.
    pub(crate) pan_anchor: Option<Point>,
    pub(crate) buttons: ButtonState,
    pub(crate) multi_select: bool,
}

/// Editor state for shell integration
#[derive(Clone, Debug)]
pub struct EditorState {
    pub scene: Scene,
    pub history: History,
    pub selection: SelectionManager,
    pub router: WireRouter,
    pub viewport: Viewport,
    pins: PinTable,
    config: EditorConfig,
    snapper: Snapper,
    pointer: PointerState,
}

impl EditorState {
    /// Creates an editor with default settings and the built-in pin table.
    pub fn new() -> Self {
        Self::build(EditorConfig::default(), PinTable::with_defaults())
    }

    /// Creates an editor from validated settings.
    pub fn from_config(config: EditorConfig, pins: PinTable) -> Result<Self> {
        config.validate()?;
        if !pins.contains(&config.default_component) {
            tracing::warn!(
                kind = %config.default_component,
                "default component kind is not in the pin table; placed parts will have no pins"
            );
        }
        Ok(Self::build(config, pins))
    }

    fn build(config: EditorConfig, pins: PinTable) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(config.history_limit),
            selection: SelectionManager::new(),
            router: WireRouter::new(),
            viewport: Viewport::new(),
            snapper: config.snapper(),
            pins,
            config,
            pointer: PointerState::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn pins(&self) -> &PinTable {
        &self.pins
    }

    pub fn snapper(&self) -> &Snapper {
        &self.snapper
    }

    /// Pointer position in world space as of the last processed frame.
    pub fn pointer_world(&self) -> Point {
        self.pointer.world
    }

    /// Pointer position in screen space as of the last processed frame.
    pub fn pointer_screen(&self) -> Point {
        self.pointer.screen
    }

    /// Advances the editor by one frame.
    ///
    /// Events are handled in arrival order, then camera pan, then drag and
    /// attachment re-resolution. The returned view reflects the fully
    /// updated state.
    pub fn process_frame(&mut self, input: &InputFrame) -> FrameView {
        self.pointer.screen = input.pointer_screen;
        self.pointer.world = self.viewport.screen_to_world(input.pointer_screen);
        self.pointer.buttons = input.buttons;
        self.pointer.multi_select = input.multi_select;

        for event in &input.events {
            self.handle_event(*event);
        }

        self.update_pan();
        self.update_drag();
        tracing::trace!(
            components = self.scene.components.len(),
            wires = self.scene.wires.len(),
            routing = self.router.is_routing(),
            "frame processed"
        );
        self.view()
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed(PointerButton::Primary) => self.press_primary(),
            InputEvent::PointerPressed(PointerButton::Secondary) => {
                self.place_component_at(self.pointer.world);
            }
            InputEvent::PointerPressed(PointerButton::Middle) => {
                self.pointer.pan_anchor = Some(self.pointer.screen);
            }
            InputEvent::PointerReleased(PointerButton::Primary) => self.release_primary(),
            InputEvent::PointerReleased(PointerButton::Middle) => {
                self.pointer.pan_anchor = None;
            }
            InputEvent::PointerReleased(PointerButton::Secondary) => {}
            InputEvent::Action(action) => self.apply_action(action),
        }
    }

    /// Runs a one-shot action at the current pointer position.
    pub fn apply_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Rotate => {
                self.rotate_selection();
            }
            EditorAction::CancelWire => {
                self.cancel_wire();
            }
            EditorAction::DeleteWireUnderPointer => {
                self.delete_wire_at(self.pointer.world);
            }
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::PlaceComponent => {
                self.place_component_at(self.pointer.world);
            }
            EditorAction::DeleteSelection => {
                self.delete_selection();
            }
        }
    }

    /// Re-establishes every attachment, including the active wire's.
    pub(crate) fn resolve_all_attachments(&mut self) {
        self.scene.resolve_attachments(&self.pins);
        if let Some(active) = self.router.active_wire_mut() {
            self.scene.resolve_detached_wire(active, &self.pins);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
