//! Scene model: the components and committed wires of a schematic.
//!
//! The scene is the unit of undo/redo. It owns every entity; selections,
//! drag state and attachments hold handles into it.

use crate::model::{Attachment, Component, ComponentId, Wire, WireId};
use crate::pin_table::PinTable;
use crate::store::EntityStore;
use schemakit_core::Point;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub components: EntityStore<ComponentId, Component>,
    pub wires: EntityStore<WireId, Wire>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(&mut self, component: Component) -> ComponentId {
        self.components.insert(component)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id)
    }

    /// Removes a component and clears every wire attachment that pointed at
    /// it. The wire points stay where they were.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        let removed = self.components.remove(id)?;
        for wire in self.wires.values_mut() {
            wire.detach(id);
        }
        Some(removed)
    }

    pub fn add_wire(&mut self, wire: Wire) -> WireId {
        self.wires.insert(wire)
    }

    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(id)
    }

    pub fn wire_mut(&mut self, id: WireId) -> Option<&mut Wire> {
        self.wires.get_mut(id)
    }

    pub fn remove_wire(&mut self, id: WireId) -> Option<Wire> {
        self.wires.remove(id)
    }

    /// World positions of a component's pins. Empty if the handle is stale.
    pub fn pins_of(&self, id: ComponentId, table: &PinTable) -> Vec<Point> {
        self.components
            .get(id)
            .map(|c| c.pins(table))
            .unwrap_or_default()
    }

    /// Current world position of the pin an attachment refers to.
    pub fn attachment_position(&self, attachment: Attachment, table: &PinTable) -> Option<Point> {
        self.components
            .get(attachment.component)?
            .pin(table, attachment.pin)
    }

    /// Moves every attached wire point onto the live position of its pin.
    ///
    /// Runs over the whole wire collection. Attachments whose component or
    /// pin no longer exists are left untouched.
    pub fn resolve_attachments(&mut self, table: &PinTable) {
        let components = &self.components;
        for wire in self.wires.values_mut() {
            resolve_wire(wire, components, table);
        }
    }

    /// Applies [`Scene::resolve_attachments`] to a wire that is not part of
    /// the scene, such as the wire under construction.
    pub fn resolve_detached_wire(&self, wire: &mut Wire, table: &PinTable) {
        resolve_wire(wire, &self.components, table);
    }

    /// True when every attached wire point sits exactly on its pin.
    pub fn attachments_consistent(&self, table: &PinTable) -> bool {
        self.wires.values().all(|wire| {
            wire.points()
                .iter()
                .zip(wire.attachments())
                .all(|(point, attachment)| match attachment {
                    Some(a) => self
                        .attachment_position(*a, table)
                        .map_or(true, |pin| pin == *point),
                    None => true,
                })
        })
    }
}

fn resolve_wire(
    wire: &mut Wire,
    components: &EntityStore<ComponentId, Component>,
    table: &PinTable,
) {
    let updates: Vec<(usize, Point)> = wire
        .attachments()
        .iter()
        .enumerate()
        .filter_map(|(i, attachment)| {
            let a = (*attachment)?;
            let pin = components.get(a.component)?.pin(table, a.pin)?;
            Some((i, pin))
        })
        .collect();

    for (index, pin) in updates {
        wire.set_point(index, pin);
    }
}
