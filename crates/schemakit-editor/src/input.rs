//! Explicit per-frame input snapshot.
//!
//! The host shell translates device state into an [`InputFrame`] once per
//! frame. The editor never polls devices itself.

use schemakit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One-shot editing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorAction {
    /// Rotate every selected component by the rotation step.
    Rotate,
    /// Discard the wire under construction.
    CancelWire,
    /// Delete the wire whose segment is under the pointer.
    DeleteWireUnderPointer,
    Undo,
    Redo,
    /// Place a component of the default kind at the pointer.
    PlaceComponent,
    /// Delete every selected component.
    DeleteSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerPressed(PointerButton),
    PointerReleased(PointerButton),
    Action(EditorAction),
}

/// Buttons currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl ButtonState {
    pub fn is_held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Secondary => self.secondary,
            PointerButton::Middle => self.middle,
        }
    }

    pub fn set(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.primary = held,
            PointerButton::Secondary => self.secondary = held,
            PointerButton::Middle => self.middle = held,
        }
    }
}

/// Everything the editor needs to know about one frame of input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Pointer position in screen space.
    pub pointer_screen: Point,
    /// Buttons held at the end of the frame.
    pub buttons: ButtonState,
    /// Multi-select modifier (shift).
    pub multi_select: bool,
    /// Events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    /// A frame with the pointer at `screen` and nothing else happening.
    pub fn at(screen: Point) -> Self {
        Self {
            pointer_screen: screen,
            ..Self::default()
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Adds a press event and marks the button held.
    pub fn press(mut self, button: PointerButton) -> Self {
        self.buttons.set(button, true);
        self.with_event(InputEvent::PointerPressed(button))
    }

    /// Adds a release event and marks the button up.
    pub fn release(mut self, button: PointerButton) -> Self {
        self.buttons.set(button, false);
        self.with_event(InputEvent::PointerReleased(button))
    }

    pub fn hold(mut self, button: PointerButton) -> Self {
        self.buttons.set(button, true);
        self
    }

    pub fn action(self, action: EditorAction) -> Self {
        self.with_event(InputEvent::Action(action))
    }

    pub fn with_modifier(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }
}
