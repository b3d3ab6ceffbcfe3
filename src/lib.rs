//! # SchemaKit
//!
//! An interactive 2D schematic editor core:
//! - Grid, pin and wire snapping
//! - Orthogonal wire routing with live pin attachments
//! - Click, modifier and box selection with grid-aligned dragging
//! - Snapshot undo/redo
//!
//! ## Architecture
//!
//! SchemaKit is organized as a workspace with multiple crates:
//!
//! 1. **schemakit-core** - Core types (points, rectangles), constants, errors
//! 2. **schemakit-settings** - Configuration file loading, validation and persistence
//! 3. **schemakit-editor** - Geometry kernel, scene model and the frame-driven editor
//! 4. **schemakit** - Headless binary that replays input sessions
//!
//! The editor never touches devices or a window. A host shell builds an
//! [`InputFrame`] per frame, hands it to [`EditorState::process_frame`] and
//! draws the returned [`FrameView`].

pub use schemakit_editor as editor;
pub use schemakit_settings as settings;

pub use schemakit_core::{Error, Point, Rect, Result};

pub use schemakit_editor::{
    EditorAction, EditorConfig, EditorState, FrameView, InputEvent, InputFrame, PinTable,
    PointerButton,
};

pub use schemakit_settings::{Config, EditorSettings, SettingsError, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with target, level and line numbers
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Maps the `[editor]` settings section onto the engine's tunables.
pub fn editor_config(settings: &EditorSettings) -> EditorConfig {
    EditorConfig {
        grid_size: settings.grid_size,
        snap_radius: settings.snap_radius,
        rotation_step: settings.rotation_step,
        history_limit: settings.history_limit,
        default_component: settings.default_component.clone(),
    }
}

/// Builds the pin table from the `[components]` settings section.
pub fn pin_table(config: &Config) -> PinTable {
    config
        .components
        .iter()
        .map(|(kind, pins)| (kind.clone(), pins.clone()))
        .collect()
}

/// Validates `config` and builds an editor from it.
pub fn build_editor(config: &Config) -> Result<EditorState> {
    config.validate()?;
    EditorState::from_config(editor_config(&config.editor), pin_table(config))
}

/// Feeds `frames` to the editor in order and returns the last view.
pub fn replay(editor: &mut EditorState, frames: &[InputFrame]) -> Option<FrameView> {
    let mut last = None;
    for frame in frames {
        last = Some(editor.process_frame(frame));
    }
    tracing::info!(
        frames = frames.len(),
        components = editor.scene.components.len(),
        wires = editor.scene.wires.len(),
        undo_depth = editor.history.undo_depth(),
        redo_depth = editor.history.redo_depth(),
        "session replayed"
    );
    last
}

/// A short built-in session: two parts, a wire between them, a drag, then
/// undo and redo of the drag.
pub fn demo_session() -> Vec<InputFrame> {
    let at = |x: f64, y: f64| InputFrame::at(Point::new(x, y));
    vec![
        at(80.0, 80.0).press(PointerButton::Secondary),
        at(80.0, 80.0).release(PointerButton::Secondary),
        at(200.0, 80.0).press(PointerButton::Secondary),
        at(200.0, 80.0).release(PointerButton::Secondary),
        at(100.0, 80.0).press(PointerButton::Primary),
        at(100.0, 80.0).release(PointerButton::Primary),
        at(180.0, 80.0).press(PointerButton::Primary),
        at(180.0, 80.0).release(PointerButton::Primary),
        at(200.0, 80.0).press(PointerButton::Primary),
        at(200.0, 160.0).hold(PointerButton::Primary),
        at(200.0, 160.0).release(PointerButton::Primary),
        at(200.0, 160.0).action(EditorAction::Undo),
        at(200.0, 160.0).action(EditorAction::Redo),
    ]
}
