//! Scene entities: components, wires, and the handles that refer to them.
//!
//! Components and wires are owned by a [`crate::scene::Scene`] and referred
//! to everywhere else by handle. Two components with identical fields are
//! still distinct entities because their handles differ.

mod component;
mod wire;

pub use component::{Component, Orientation};
pub use wire::{Attachment, Wire};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a component inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub(crate) u64);

/// Stable handle of a committed wire inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(pub(crate) u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}
