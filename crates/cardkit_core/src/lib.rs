//! Cardkit Core
//!
//! Platform-agnostic primitives shared by the cardkit crates:
//!
//! - **Event model**: pointer, focus, keyboard and click events delivered by
//!   the host presentation layer
//! - **State machines**: small flat transition tables used to track
//!   component lifecycles
//!
//! Nothing in this crate renders. Every type can be driven headlessly.
//!
//! # Example
//!
//! ```rust
//! use cardkit_core::fsm::StateMachine;
//!
//! const IDLE: u32 = 0;
//! const ACTIVE: u32 = 1;
//! const START: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE).on(IDLE, START, ACTIVE).build();
//! assert_eq!(fsm.send(START), ACTIVE);
//! ```

pub mod events;
pub mod fsm;

pub use events::{event_types, Event, EventData, EventType, KeyCode, Modifiers};
pub use fsm::{EventId, StateId, StateMachine, Transition};
