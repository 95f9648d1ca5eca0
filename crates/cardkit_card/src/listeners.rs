//! State-change listener registry

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by `subscribe`, used to unsubscribe
    pub struct SubscriptionId;
}

/// Listeners notified with a reference to the new state
pub struct Listeners<T> {
    slots: SlotMap<SubscriptionId, Box<dyn FnMut(&T)>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    pub fn subscribe<F: FnMut(&T) + 'static>(&mut self, listener: F) -> SubscriptionId {
        self.slots.insert(Box::new(listener))
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.slots.remove(id).is_some()
    }

    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.slots.iter_mut() {
            listener(value);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
