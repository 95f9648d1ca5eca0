//! State Machine Runtime
//!
//! Flat statecharts for component lifecycles. A machine is a transition
//! table keyed by source state; an event with no entry for the current
//! state is ignored.
//!
//! Machines are owned by exactly one component and driven from a single
//! thread.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A single edge of the transition table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Outgoing edges of one state; lifecycles rarely have more than a few
type Edges = SmallVec<[(EventId, StateId); 4]>;

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    table: FxHashMap<StateId, Edges>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            table: FxHashMap::default(),
        }
    }

    /// Add a transition
    ///
    /// The first edge registered for a `(from, event)` pair wins.
    pub fn transition(mut self, transition: Transition) -> Self {
        let edges = self.table.entry(transition.from_state).or_default();
        if edges.iter().all(|(event, _)| *event != transition.event) {
            edges.push((transition.event, transition.to_state));
        }
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            table: self.table,
        }
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    current_state: StateId,
    table: FxHashMap<StateId, Edges>,
}

impl StateMachine {
    /// Create a state machine from a list of transitions
    pub fn new(initial_state: StateId, transitions: impl IntoIterator<Item = Transition>) -> Self {
        transitions
            .into_iter()
            .fold(StateMachineBuilder::new(initial_state), |builder, t| {
                builder.transition(t)
            })
            .build()
    }

    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    fn target(&self, event: EventId) -> Option<StateId> {
        self.table
            .get(&self.current_state)?
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, to)| *to)
    }

    /// Whether `event` would move the machine out of its current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.target(event).is_some()
    }

    /// Send an event, returning the state after it
    ///
    /// Events with no matching transition leave the machine where it is.
    pub fn send(&mut self, event: EventId) -> StateId {
        let from = self.current_state;
        match self.target(event) {
            Some(to) => {
                self.current_state = to;
                tracing::trace!(from, event, to, "fsm transition");
                to
            }
            None => from,
        }
    }
}
