//! Viewport visibility detection
//!
//! A [`VisibilityDetector`] reports whether a target element currently
//! intersects its viewport (grown or shrunk by a root margin) and whether it
//! has ever done so. The target is handed out as a [`TargetRef`] that the
//! presentation layer resolves once the element exists; the detector attaches
//! an observation through the [`IntersectionHost`] exactly once, whether the
//! target resolves before or after the detector is created.
//!
//! Without a host, or with `enabled = false`, the detector never observes and
//! keeps reporting the default state.
//!
//! ```rust
//! use std::rc::Rc;
//! use cardkit_card::visibility::{ElementId, Rect, ViewportHost, VisibilityDetector, VisibilityOptions};
//!
//! let host = ViewportHost::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let detector = VisibilityDetector::new(VisibilityOptions::new(), Some(Rc::new(host.clone())));
//!
//! let card = ElementId(1);
//! host.set_element_rect(card, Rect::new(0.0, 1000.0, 300.0, 200.0));
//! detector.target().attach(card);
//!
//! host.flush();
//! assert!(!detector.state().is_visible);
//!
//! host.scroll_to(0.0, 700.0);
//! host.flush();
//! assert!(detector.state().is_visible);
//! assert!(detector.state().has_been_visible);
//! ```

mod options;
mod viewport;

pub use options::{MarginValue, RootMargin, Threshold, VisibilityOptions};
pub use viewport::{measure, Rect, ViewportHost};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use cardkit_core::fsm::StateMachine;
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};

use crate::listeners::{Listeners, SubscriptionId};

/// Host-assigned element identifier
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub u64);

/// One intersection notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
}

/// Receives batches of intersection entries
pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

/// A live observation relationship
pub trait Observation {
    /// Stop delivering entries. Called at most once by the detector.
    fn disconnect(&mut self);
}

/// Intersection observation capability of the host environment
pub trait IntersectionHost {
    /// Whether the host can observe at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Start observing `target`, delivering entries to `callback` until the
    /// returned observation is disconnected
    fn observe(
        &self,
        target: ElementId,
        options: &VisibilityOptions,
        callback: IntersectionCallback,
    ) -> Box<dyn Observation>;
}

/// Visibility flags reported by a detector
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityState {
    pub is_visible: bool,
    /// Sticky: once true, stays true
    pub has_been_visible: bool,
}

impl VisibilityState {
    /// Apply one intersection update
    pub fn observe(self, is_intersecting: bool) -> Self {
        Self {
            is_visible: is_intersecting,
            has_been_visible: self.has_been_visible || is_intersecting,
        }
    }
}

/// Detector lifecycle states and events
pub mod lifecycle {
    use cardkit_core::fsm::{EventId, StateId};

    pub const INACTIVE: StateId = 0;
    pub const AWAITING_TARGET: StateId = 1;
    pub const OBSERVING: StateId = 2;
    pub const DISPOSED: StateId = 3;

    pub const START: EventId = 1;
    pub const TARGET_READY: EventId = 2;
    pub const RELEASE: EventId = 3;
    pub const DISPOSE: EventId = 4;
}

fn lifecycle_machine() -> StateMachine {
    use lifecycle::*;

    StateMachine::builder(INACTIVE)
        .on(INACTIVE, START, AWAITING_TARGET)
        .on(AWAITING_TARGET, TARGET_READY, OBSERVING)
        .on(AWAITING_TARGET, RELEASE, INACTIVE)
        .on(OBSERVING, RELEASE, INACTIVE)
        .on(INACTIVE, DISPOSE, DISPOSED)
        .on(AWAITING_TARGET, DISPOSE, DISPOSED)
        .on(OBSERVING, DISPOSE, DISPOSED)
        .build()
}

new_key_type! {
    /// One detector's pending attachment on a target
    struct ReadyKey;
}

type ReadyCallback = Box<dyn FnOnce(ElementId)>;

#[derive(Default)]
struct TargetSlot {
    element: Option<ElementId>,
    pending: SlotMap<ReadyKey, ReadyCallback>,
}

/// Late-bound reference to the observed element
///
/// Clones share the same slot; identity is stable for the detector's
/// lifetime. The presentation layer calls [`attach`](Self::attach) once the
/// element exists. Several detectors may wait on the same handle.
#[derive(Clone, Default)]
pub struct TargetRef {
    slot: Rc<RefCell<TargetSlot>>,
}

impl TargetRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved element, if any
    pub fn get(&self) -> Option<ElementId> {
        self.slot.borrow().element
    }

    /// Resolve the reference
    ///
    /// Every pending attachment runs once, for the first element resolved
    /// after it was registered.
    pub fn attach(&self, element: ElementId) {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            slot.element = Some(element);
            std::mem::take(&mut slot.pending)
        };
        for (_, ready) in pending {
            ready(element);
        }
    }

    /// True when both handles refer to the same slot
    pub fn ptr_eq(&self, other: &TargetRef) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    fn when_ready(&self, callback: ReadyCallback) -> ReadyKey {
        self.slot.borrow_mut().pending.insert(callback)
    }

    /// Stale keys (already fired) are ignored
    fn cancel_ready(&self, key: ReadyKey) {
        self.slot.borrow_mut().pending.remove(key);
    }
}

impl fmt::Debug for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRef")
            .field("element", &self.get())
            .finish()
    }
}

struct Shared {
    host: Option<Rc<dyn IntersectionHost>>,
    /// Bumped whenever an observation is released, so late entries from it
    /// are dropped
    generation: Cell<u64>,
    /// This detector's registration on the target while it waits
    ready: Cell<Option<ReadyKey>>,
    /// Set when the state changes while listeners are being notified
    renotify: Cell<bool>,
    options: RefCell<VisibilityOptions>,
    state: Cell<VisibilityState>,
    lifecycle: RefCell<StateMachine>,
    observation: RefCell<Option<Box<dyn Observation>>>,
    listeners: RefCell<Listeners<VisibilityState>>,
}

impl Shared {
    fn is_in(&self, state: u32) -> bool {
        self.lifecycle.borrow().is_in(state)
    }

    fn send(&self, event: u32) -> u32 {
        self.lifecycle.borrow_mut().send(event)
    }

    /// Store `next` and notify listeners
    ///
    /// A change made from inside a listener is delivered after the current
    /// round finishes, with the latest state.
    fn set_state(&self, next: VisibilityState) {
        if self.state.replace(next) == next {
            return;
        }
        let Ok(mut listeners) = self.listeners.try_borrow_mut() else {
            self.renotify.set(true);
            return;
        };
        loop {
            listeners.notify(&self.state.get());
            if self.is_in(lifecycle::DISPOSED) || !self.renotify.replace(false) {
                break;
            }
        }
        if self.is_in(lifecycle::DISPOSED) {
            listeners.clear();
        }
    }

    fn cancel_ready(&self, target: &TargetRef) {
        if let Some(key) = self.ready.take() {
            target.cancel_ready(key);
        }
    }

    fn apply_entries(&self, generation: u64, element: ElementId, entries: &[IntersectionEntry]) {
        if generation != self.generation.get() || !self.is_in(lifecycle::OBSERVING) {
            return;
        }
        // Batches may carry several entries for the target; the last is current
        let Some(entry) = entries.iter().rev().find(|entry| entry.target == element) else {
            return;
        };
        let next = self.state.get().observe(entry.is_intersecting);
        tracing::trace!(?element, is_visible = next.is_visible, "visibility update");
        self.set_state(next);
    }

    fn release_observation(&self) {
        self.generation.set(self.generation.get() + 1);
        let observation = self.observation.borrow_mut().take();
        if let Some(mut observation) = observation {
            observation.disconnect();
        }
    }
}

/// Start observing if enabled and capable, attaching now or when the target
/// resolves
fn start(shared: &Rc<Shared>, target: &TargetRef) {
    if !shared.options.borrow().enabled {
        tracing::debug!("visibility detection disabled");
        return;
    }
    let capable = shared.host.as_ref().is_some_and(|host| host.is_supported());
    if !capable {
        tracing::warn!("no intersection observation available, visibility stays at default");
        return;
    }
    if shared.send(lifecycle::START) != lifecycle::AWAITING_TARGET {
        return;
    }

    match target.get() {
        Some(element) => attach(shared, element),
        None => {
            let weak = Rc::downgrade(shared);
            let key = target.when_ready(Box::new(move |element| {
                if let Some(shared) = weak.upgrade() {
                    shared.ready.set(None);
                    attach(&shared, element);
                }
            }));
            shared.ready.set(Some(key));
        }
    }
}

fn attach(shared: &Rc<Shared>, element: ElementId) {
    if shared.send(lifecycle::TARGET_READY) != lifecycle::OBSERVING {
        return;
    }
    let Some(host) = shared.host.clone() else {
        return;
    };

    let weak = Rc::downgrade(shared);
    let generation = shared.generation.get();
    let callback: IntersectionCallback = Box::new(move |entries| {
        if let Some(shared) = weak.upgrade() {
            shared.apply_entries(generation, element, entries);
        }
    });
    let options = shared.options.borrow().clone();
    let mut observation = host.observe(element, &options, callback);

    // The host may deliver synchronously, and a listener may dispose
    if shared.is_in(lifecycle::OBSERVING) {
        *shared.observation.borrow_mut() = Some(observation);
        tracing::debug!(?element, "visibility observation attached");
    } else {
        observation.disconnect();
    }
}

/// Tracks viewport visibility of one element
pub struct VisibilityDetector {
    target: TargetRef,
    shared: Rc<Shared>,
}

impl VisibilityDetector {
    /// Create a detector; `host` is `None` when the environment has no
    /// intersection observation
    pub fn new(options: VisibilityOptions, host: Option<Rc<dyn IntersectionHost>>) -> Self {
        Self::with_target(options, host, TargetRef::new())
    }

    /// Create a detector around an existing target handle, which may already
    /// be resolved
    pub fn with_target(
        options: VisibilityOptions,
        host: Option<Rc<dyn IntersectionHost>>,
        target: TargetRef,
    ) -> Self {
        let detector = Self {
            target,
            shared: Rc::new(Shared {
                host,
                generation: Cell::new(0),
                ready: Cell::new(None),
                renotify: Cell::new(false),
                options: RefCell::new(options),
                state: Cell::new(VisibilityState::default()),
                lifecycle: RefCell::new(lifecycle_machine()),
                observation: RefCell::new(None),
                listeners: RefCell::new(Listeners::new()),
            }),
        };
        start(&detector.shared, &detector.target);
        detector
    }

    /// Handle to resolve with the observed element
    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    pub fn state(&self) -> VisibilityState {
        self.shared.state.get()
    }

    pub fn options(&self) -> VisibilityOptions {
        self.shared.options.borrow().clone()
    }

    /// Current lifecycle state (see [`lifecycle`])
    pub fn phase(&self) -> u32 {
        self.shared.lifecycle.borrow().current_state()
    }

    pub fn is_observing(&self) -> bool {
        self.shared.is_in(lifecycle::OBSERVING)
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.is_in(lifecycle::DISPOSED)
    }

    /// Register a listener fired whenever the state changes
    ///
    /// Listeners may reconfigure or dispose the detector. Subscribing or
    /// unsubscribing from inside a listener is refused: `subscribe` returns
    /// a null id and `unsubscribe` returns false.
    pub fn subscribe<F: FnMut(&VisibilityState) + 'static>(&self, listener: F) -> SubscriptionId {
        match self.shared.listeners.try_borrow_mut() {
            Ok(mut listeners) => listeners.subscribe(listener),
            Err(_) => {
                tracing::warn!("subscribe called from a visibility listener, ignoring");
                SubscriptionId::default()
            }
        }
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self.shared.listeners.try_borrow_mut() {
            Ok(mut listeners) => listeners.unsubscribe(id),
            Err(_) => {
                tracing::warn!("unsubscribe called from a visibility listener, ignoring");
                false
            }
        }
    }

    /// Replace the options, re-establishing the observation if they changed
    ///
    /// The target handle and `has_been_visible` carry over. Turning
    /// detection off clears `is_visible`.
    pub fn reconfigure(&self, options: VisibilityOptions) {
        if self.is_disposed() || *self.shared.options.borrow() == options {
            return;
        }
        tracing::debug!(?options, "reconfiguring visibility detector");

        self.shared.send(lifecycle::RELEASE);
        self.shared.cancel_ready(&self.target);
        self.shared.release_observation();

        let enabled = options.enabled;
        *self.shared.options.borrow_mut() = options;
        if !enabled {
            let state = self.shared.state.get();
            self.shared.set_state(VisibilityState {
                is_visible: false,
                ..state
            });
        }
        start(&self.shared, &self.target);
    }

    /// Cancel any pending attachment and release the observation
    ///
    /// Later calls are no-ops, and no state update is applied afterwards.
    pub fn dispose(&self) {
        if self.is_disposed() {
            return;
        }
        self.shared.send(lifecycle::DISPOSE);
        self.shared.cancel_ready(&self.target);
        self.shared.release_observation();
        // Busy when disposing from inside a listener; the notifying round
        // clears them when it ends
        if let Ok(mut listeners) = self.shared.listeners.try_borrow_mut() {
            listeners.clear();
        }
        tracing::debug!("visibility detector disposed");
    }
}

impl Drop for VisibilityDetector {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for VisibilityDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityDetector")
            .field("target", &self.target)
            .field("state", &self.state())
            .field("phase", &self.phase())
            .finish()
    }
}
