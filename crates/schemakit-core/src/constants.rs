//! Default values for the editing engine.
//!
//! These are the values used when no configuration file overrides them.

/// Spacing of the placement grid, in world units.
pub const GRID_SIZE: f64 = 40.0;

/// Maximum distance at which a pointer snaps to a pin, wire vertex or
/// wire segment, in world units.
pub const SNAP_RADIUS: f64 = 8.0;

/// Rotation applied to each selected component per rotate action, in degrees.
pub const ROTATION_STEP: u16 = 90;

/// Component kind placed by the place-component action.
pub const DEFAULT_COMPONENT_KIND: &str = "resistor";

/// Maximum number of undo snapshots kept. Zero disables the bound.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
