//! Card interaction state
//!
//! Hover, press and focus are tracked as three independent flags. The
//! transition rules live in [`InteractionState::on_event`], a pure function
//! of the current flags, the event and the gates; [`InteractionMachine`]
//! wraps it with caller callbacks and change listeners.
//!
//! Gates (`disabled`, `clickable`) are read when an event is dispatched, so a
//! handler never acts on a stale gate. Turning `disabled` on resets all flags.
//!
//! ```rust
//! use cardkit_card::{InteractionGates, InteractionMachine};
//! use cardkit_core::{event_types, Event};
//!
//! let mut machine = InteractionMachine::new(InteractionGates::clickable());
//! machine.handle_event(&mut Event::new(event_types::POINTER_ENTER, 1));
//! machine.handle_event(&mut Event::new(event_types::POINTER_DOWN, 1));
//! assert!(machine.state().is_pressed);
//!
//! machine.handle_event(&mut Event::new(event_types::POINTER_LEAVE, 1));
//! assert!(!machine.state().is_hovered && !machine.state().is_pressed);
//! ```

use cardkit_core::events::{event_types, Event};
use serde::Serialize;

use crate::listeners::{Listeners, SubscriptionId};

/// Hover, press and focus flags for one card
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub is_hovered: bool,
    pub is_pressed: bool,
    pub is_focused: bool,
}

/// Inputs that drive [`InteractionState`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum InteractionEvent {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    FocusGained,
    FocusLost,
}

impl InteractionEvent {
    /// Map a host event type id
    pub fn from_event_type(event_type: u32) -> Option<Self> {
        match event_type {
            event_types::POINTER_ENTER => Some(Self::PointerEnter),
            event_types::POINTER_LEAVE => Some(Self::PointerLeave),
            event_types::POINTER_DOWN => Some(Self::PointerDown),
            event_types::POINTER_UP => Some(Self::PointerUp),
            event_types::FOCUS => Some(Self::FocusGained),
            event_types::BLUR => Some(Self::FocusLost),
            _ => None,
        }
    }

    /// Hover events only need the card to be enabled; press and focus also
    /// need it to be clickable
    fn is_permitted(self, gates: InteractionGates) -> bool {
        match self {
            Self::PointerEnter | Self::PointerLeave => !gates.disabled,
            _ => gates.is_interactive(),
        }
    }
}

/// Configuration flags that gate interaction
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct InteractionGates {
    pub disabled: bool,
    pub clickable: bool,
}

impl InteractionGates {
    pub fn new(disabled: bool, clickable: bool) -> Self {
        Self {
            disabled,
            clickable,
        }
    }

    /// Enabled and clickable
    pub fn clickable() -> Self {
        Self::new(false, true)
    }

    pub fn is_interactive(self) -> bool {
        self.clickable && !self.disabled
    }
}

impl InteractionState {
    /// Apply an event, returning the new flags, or `None` when the gates
    /// block the event
    pub fn on_event(&self, event: InteractionEvent, gates: InteractionGates) -> Option<Self> {
        if !event.is_permitted(gates) {
            return None;
        }

        let mut next = *self;
        match event {
            InteractionEvent::PointerEnter => next.is_hovered = true,
            InteractionEvent::PointerLeave => {
                // Leaving implies release: no up event may follow outside
                next.is_hovered = false;
                next.is_pressed = false;
            }
            InteractionEvent::PointerDown => next.is_pressed = true,
            InteractionEvent::PointerUp => next.is_pressed = false,
            InteractionEvent::FocusGained => next.is_focused = true,
            InteractionEvent::FocusLost => next.is_focused = false,
        }
        Some(next)
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Callback invoked with the event that triggered it
pub type EventCallback = Box<dyn FnMut(&Event)>;

/// Interaction tracker for one card
pub struct InteractionMachine {
    state: InteractionState,
    gates: InteractionGates,
    on_click: Option<EventCallback>,
    on_double_click: Option<EventCallback>,
    on_pointer_enter: Option<EventCallback>,
    on_pointer_leave: Option<EventCallback>,
    listeners: Listeners<InteractionState>,
}

impl InteractionMachine {
    pub fn new(gates: InteractionGates) -> Self {
        Self {
            state: InteractionState::default(),
            gates,
            on_click: None,
            on_double_click: None,
            on_pointer_enter: None,
            on_pointer_leave: None,
            listeners: Listeners::new(),
        }
    }

    /// Set the activation callback (pointer click, Enter or Space)
    pub fn on_click<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn on_double_click<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.on_double_click = Some(Box::new(callback));
        self
    }

    pub fn on_pointer_enter<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.on_pointer_enter = Some(Box::new(callback));
        self
    }

    pub fn on_pointer_leave<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.on_pointer_leave = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn gates(&self) -> InteractionGates {
        self.gates
    }

    /// Update the disabled gate
    ///
    /// Turning it on clears every flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        let was_disabled = self.gates.disabled;
        self.gates.disabled = disabled;
        if disabled && !was_disabled {
            tracing::debug!("card disabled, resetting interaction state");
            self.commit(InteractionState::default());
        }
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.gates.clickable = clickable;
    }

    /// Apply both gates at once
    pub fn set_gates(&mut self, gates: InteractionGates) {
        self.set_clickable(gates.clickable);
        self.set_disabled(gates.disabled);
    }

    /// Register a listener fired whenever the flags change
    pub fn subscribe<F: FnMut(&InteractionState) + 'static>(&mut self, listener: F) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn pointer_enter(&mut self, event: &Event) {
        if self.apply(InteractionEvent::PointerEnter) {
            if let Some(callback) = self.on_pointer_enter.as_mut() {
                callback(event);
            }
        }
    }

    pub fn pointer_leave(&mut self, event: &Event) {
        if self.apply(InteractionEvent::PointerLeave) {
            if let Some(callback) = self.on_pointer_leave.as_mut() {
                callback(event);
            }
        }
    }

    pub fn pointer_down(&mut self) {
        self.apply(InteractionEvent::PointerDown);
    }

    pub fn pointer_up(&mut self) {
        self.apply(InteractionEvent::PointerUp);
    }

    pub fn focus_gained(&mut self) {
        self.apply(InteractionEvent::FocusGained);
    }

    pub fn focus_lost(&mut self) {
        self.apply(InteractionEvent::FocusLost);
    }

    /// Invoke the click callback; flags are unchanged
    ///
    /// Returns true when the activation went through.
    pub fn activate(&mut self, event: &Event) -> bool {
        if !self.gates.is_interactive() {
            return false;
        }
        if let Some(callback) = self.on_click.as_mut() {
            callback(event);
        }
        true
    }

    /// Enter and Space activate a focused card and consume the key's
    /// default action
    pub fn key_down(&mut self, event: &mut Event) -> bool {
        let is_activation = event.key().is_some_and(|key| key.is_activation());
        if !is_activation || !self.gates.is_interactive() || !self.state.is_focused {
            return false;
        }
        event.prevent_default();
        self.activate(event)
    }

    pub fn double_click(&mut self, event: &Event) {
        if self.gates.disabled {
            return;
        }
        if let Some(callback) = self.on_double_click.as_mut() {
            callback(event);
        }
    }

    /// Dispatch a host event by its type id
    pub fn handle_event(&mut self, event: &mut Event) {
        match event.event_type {
            event_types::POINTER_ENTER => self.pointer_enter(event),
            event_types::POINTER_LEAVE => self.pointer_leave(event),
            event_types::CLICK => {
                self.activate(event);
            }
            event_types::DOUBLE_CLICK => self.double_click(event),
            event_types::KEY_DOWN => {
                self.key_down(event);
            }
            other => {
                if let Some(input) = InteractionEvent::from_event_type(other) {
                    self.apply(input);
                }
            }
        }
    }

    /// Returns whether the gates let the event through
    fn apply(&mut self, input: InteractionEvent) -> bool {
        match self.state.on_event(input, self.gates) {
            Some(next) => {
                tracing::trace!(?input, ?next, "interaction transition");
                self.commit(next);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: InteractionState) {
        if next != self.state {
            self.state = next;
            self.listeners.notify(&next);
        }
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new(InteractionGates::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardkit_core::{KeyCode, Modifiers};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn make_event(event_type: u32) -> Event {
        Event::new(event_type, 1)
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&Event) + 'static) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        (count, move |_: &Event| count_clone.set(count_clone.get() + 1))
    }

    #[test]
    fn test_leave_clears_press() {
        let mut machine = InteractionMachine::new(InteractionGates::clickable());
        for event_type in [
            event_types::POINTER_ENTER,
            event_types::POINTER_DOWN,
            event_types::POINTER_LEAVE,
        ] {
            machine.handle_event(&mut make_event(event_type));
        }
        assert!(machine.state().is_idle());
    }

    #[test]
    fn test_hover_needs_only_enabled() {
        let mut machine = InteractionMachine::new(InteractionGates::default());
        machine.pointer_enter(&make_event(event_types::POINTER_ENTER));
        assert!(machine.state().is_hovered);

        // Not clickable: press and focus are gated
        machine.pointer_down();
        machine.focus_gained();
        assert!(!machine.state().is_pressed);
        assert!(!machine.state().is_focused);
    }

    #[test]
    fn test_disabled_blocks_everything() {
        let (entered, on_enter) = counter();
        let (clicked, on_click) = counter();
        let mut machine = InteractionMachine::new(InteractionGates::new(true, true))
            .on_pointer_enter(on_enter)
            .on_click(on_click);

        for event_type in [
            event_types::POINTER_ENTER,
            event_types::POINTER_DOWN,
            event_types::FOCUS,
            event_types::CLICK,
            event_types::POINTER_UP,
            event_types::BLUR,
        ] {
            machine.handle_event(&mut make_event(event_type));
        }

        assert!(machine.state().is_idle());
        assert_eq!(entered.get(), 0);
        assert_eq!(clicked.get(), 0);
    }

    #[test]
    fn test_disabling_resets_flags() {
        let mut machine = InteractionMachine::new(InteractionGates::clickable());
        machine.pointer_enter(&make_event(event_types::POINTER_ENTER));
        machine.pointer_down();
        machine.focus_gained();
        assert_eq!(
            machine.state(),
            InteractionState {
                is_hovered: true,
                is_pressed: true,
                is_focused: true
            }
        );

        machine.set_disabled(true);
        assert!(machine.state().is_idle());
    }

    #[test]
    fn test_leave_callback_receives_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut machine = InteractionMachine::new(InteractionGates::default())
            .on_pointer_leave(move |event| seen_clone.borrow_mut().push(event.timestamp));

        machine.handle_event(&mut make_event(event_types::POINTER_LEAVE).at(42));
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_click_and_keyboard_activation() {
        let (clicked, on_click) = counter();
        let mut machine = InteractionMachine::new(InteractionGates::clickable()).on_click(on_click);

        machine.handle_event(&mut make_event(event_types::CLICK));
        assert_eq!(clicked.get(), 1);

        machine.focus_gained();
        let mut enter = Event::key_down(1, KeyCode::ENTER, Modifiers::NONE);
        machine.handle_event(&mut enter);
        assert!(enter.default_prevented);

        let mut space = Event::key_down(1, KeyCode::SPACE, Modifiers::NONE);
        assert!(machine.key_down(&mut space));

        let mut escape = Event::key_down(1, KeyCode::ESCAPE, Modifiers::NONE);
        assert!(!machine.key_down(&mut escape));
        assert!(!escape.default_prevented);

        assert_eq!(clicked.get(), 3);
        assert!(machine.state().is_focused);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let (clicked, on_click) = counter();
        let mut machine = InteractionMachine::new(InteractionGates::clickable()).on_click(on_click);

        let mut enter = Event::key_down(1, KeyCode::ENTER, Modifiers::NONE);
        assert!(!machine.key_down(&mut enter));
        assert!(!enter.default_prevented);

        machine.focus_gained();
        machine.focus_lost();
        assert!(!machine.key_down(&mut enter));
        assert_eq!(clicked.get(), 0);
    }

    #[test]
    fn test_activation_without_callback_is_silent() {
        let mut machine = InteractionMachine::new(InteractionGates::clickable());
        assert!(machine.activate(&make_event(event_types::CLICK)));

        machine.set_clickable(false);
        assert!(!machine.activate(&make_event(event_types::CLICK)));
    }

    #[test]
    fn test_listeners_fire_on_change_only() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_clone = changes.clone();
        let mut machine = InteractionMachine::new(InteractionGates::clickable());
        let id = machine.subscribe(move |state| changes_clone.borrow_mut().push(*state));

        machine.pointer_enter(&make_event(event_types::POINTER_ENTER));
        machine.pointer_enter(&make_event(event_types::POINTER_ENTER));
        machine.pointer_up();
        assert_eq!(changes.borrow().len(), 1);

        assert!(machine.unsubscribe(id));
        machine.pointer_down();
        assert_eq!(changes.borrow().len(), 1);
        assert!(!machine.unsubscribe(id));
    }

    #[test]
    fn test_gates_read_at_dispatch() {
        let (clicked, on_click) = counter();
        let mut machine = InteractionMachine::new(InteractionGates::clickable()).on_click(on_click);

        machine.set_disabled(true);
        machine.handle_event(&mut make_event(event_types::CLICK));
        machine.set_disabled(false);
        machine.handle_event(&mut make_event(event_types::CLICK));

        assert_eq!(clicked.get(), 1);
    }
}
