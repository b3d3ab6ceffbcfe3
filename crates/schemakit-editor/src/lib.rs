//! # SchemaKit Editor
//!
//! The geometric editing engine behind SchemaKit: components are placed on a
//! grid, connected by orthogonal wires that stay attached to their pins, and
//! every edit can be undone.
//!
//! ## Core Components
//!
//! ### Geometry and Snapping
//! - **Geometry**: Orthogonal paths, quarter-turn rotation, segment
//!   projection and collinear cleanup
//! - **Snapping**: Grid, pin, wire vertex and wire segment targets with a
//!   fixed precedence
//!
//! ### Scene
//! - **Model**: Components, wires and their pin attachments
//! - **Store**: Handle-based arena keeping insertion order
//! - **Pin Table**: Local pin offsets per component kind
//!
//! ### Editing
//! - **Routing**: Two-state wire construction and wire splicing
//! - **Selection**: Click, modifier click, box selection and drag
//! - **History**: Snapshot undo/redo
//! - **Viewport**: Camera pan and screen/world conversion
//!
//! ## Architecture
//!
//! ```text
//! InputFrame
//!   └── EditorState::process_frame
//!         ├── WireRouter (Idle / Routing)
//!         ├── SelectionManager (click, box, drag)
//!         ├── History (scene snapshots)
//!         └── Scene (components, wires)
//!               └── attachments re-resolved every frame
//! FrameView (render output)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schemakit_core::Point;
//! use schemakit_editor::{EditorState, InputFrame, PointerButton};
//!
//! let mut editor = EditorState::new();
//! let view = editor.process_frame(
//!     &InputFrame::at(Point::new(100.0, 100.0)).press(PointerButton::Secondary),
//! );
//! assert_eq!(view.components.len(), 1);
//! assert_eq!(view.components[0].position, Point::new(80.0, 80.0));
//! ```

pub mod editor_state;
pub mod frame;
pub mod geometry;
pub mod history;
pub mod input;
pub mod model;
pub mod pin_table;
pub mod routing;
pub mod scene;
pub mod selection_manager;
pub mod snapping;
pub mod store;
pub mod viewport;

pub use editor_state::{EditorConfig, EditorState};
pub use frame::{ComponentView, FrameView, PreviewView, WireView};
pub use geometry::{
    bounding_rect, clean_collinear_points, nearest_point_on_segment, orthogonal_path, rotate,
    OrthoPath,
};
pub use history::History;
pub use input::{ButtonState, EditorAction, InputEvent, InputFrame, PointerButton};
pub use model::{Attachment, Component, ComponentId, Orientation, Wire, WireId};
pub use pin_table::PinTable;
pub use routing::{splice_wire, RouteOutcome, RoutePreview, WireRouter};
pub use scene::Scene;
pub use selection_manager::SelectionManager;
pub use snapping::{PinHit, SegmentHit, SnapTarget, Snapper};
pub use store::{EntityKey, EntityStore};
pub use viewport::Viewport;
