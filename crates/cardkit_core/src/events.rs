//! Event model
//!
//! Events are produced by the host presentation layer (DOM bridge, native
//! toolkit, test harness) and handed to component state machines. The core
//! never inspects where an event came from beyond its type and payload.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Completed primary-button click (down + up on the same element)
    pub const CLICK: EventType = 8;
    pub const DOUBLE_CLICK: EventType = 9;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    pub const KEY_UP: EventType = 21;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Host element id the event was delivered to
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
    /// Set when a handler consumed the event's default host action
    pub default_prevented: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    Key {
        /// Virtual key code (use KeyCode constants)
        key: KeyCode,
        /// Keyboard modifier flags
        modifiers: Modifiers,
        /// Whether this is a repeat event
        repeat: bool,
    },
    None,
}

impl Event {
    /// Create an event with no payload
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            timestamp: 0,
            default_prevented: false,
        }
    }

    /// Create a pointer event at the given position (primary button)
    pub fn pointer(event_type: EventType, target: u64, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            ..Self::new(event_type, target)
        }
    }

    /// Create a key-down event
    pub fn key_down(target: u64, key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            data: EventData::Key {
                key,
                modifiers,
                repeat: false,
            },
            ..Self::new(event_types::KEY_DOWN, target)
        }
    }

    /// Attach a timestamp (host clock, milliseconds)
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Key code for keyboard events, `None` otherwise
    pub fn key(&self) -> Option<KeyCode> {
        match self.data {
            EventData::Key { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    /// Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Keys that confirm/activate a focused button-like element
    pub const fn is_activation(self) -> bool {
        self.0 == Self::ENTER.0 || self.0 == Self::SPACE.0
    }
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000; // Cmd on macOS, Win on Windows

    /// Create new modifiers from flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    /// Check if any modifier is pressed
    pub const fn any(&self) -> bool {
        self.bits != 0
    }
}
