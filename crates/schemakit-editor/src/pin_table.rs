//! Local pin offsets per component kind.
//!
//! The table is immutable once the editor is built and shared by every
//! instance of a kind. Unknown kinds resolve to an empty pin list.

use schemakit_core::constants::DEFAULT_COMPONENT_KIND;
use schemakit_core::Point;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinTable {
    kinds: HashMap<String, Vec<Point>>,
}

impl PinTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in two-pin resistor.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert(
            DEFAULT_COMPONENT_KIND,
            vec![Point::new(-20.0, 0.0), Point::new(20.0, 0.0)],
        );
        table
    }

    /// Registers or replaces the pins of `kind`.
    pub fn insert(&mut self, kind: impl Into<String>, pins: Vec<Point>) {
        self.kinds.insert(kind.into(), pins);
    }

    /// Local pin offsets of `kind`; empty for unknown kinds.
    pub fn local_pins(&self, kind: &str) -> &[Point] {
        match self.kinds.get(kind) {
            Some(pins) => pins.as_slice(),
            None => {
                tracing::trace!(kind, "unknown component kind, no pins");
                &[]
            }
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Point>)> for PinTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Point>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kind, pins) in iter {
            table.insert(kind, pins);
        }
        table
    }
}
