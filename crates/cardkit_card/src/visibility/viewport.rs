//! Headless intersection host
//!
//! [`ViewportHost`] computes intersections from element rectangles and a
//! scrollable viewport. Hosts without a native observer (terminal UIs,
//! servers, tests) can drive visibility detectors with it: update rects or
//! scroll, then call [`ViewportHost::flush`] to deliver pending entries.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use super::options::{RootMargin, VisibilityOptions};
use super::{ElementId, IntersectionCallback, IntersectionEntry, IntersectionHost, Observation};

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`
    ///
    /// Rectangles that only touch along an edge yield a zero-area overlap;
    /// disjoint rectangles yield `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Grow each side by the resolved margin (negative margins shrink)
    pub fn expand(&self, margin: &RootMargin) -> Rect {
        let top = margin.top.resolve(self.height);
        let right = margin.right.resolve(self.width);
        let bottom = margin.bottom.resolve(self.height);
        let left = margin.left.resolve(self.width);
        Rect::new(
            self.x - left,
            self.y - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }
}

/// Share of `target` inside `root`, plus whether they intersect at all
pub fn measure(target: &Rect, root: &Rect) -> (bool, f32) {
    match target.intersection(root) {
        None => (false, 0.0),
        Some(overlap) => {
            let ratio = if target.area() > 0.0 {
                overlap.area() / target.area()
            } else {
                1.0
            };
            (true, ratio)
        }
    }
}

/// Number of trigger points at or below `ratio`
///
/// A `0.0` trigger only counts when the target actually intersects.
fn threshold_bucket(is_intersecting: bool, ratio: f32, thresholds: &[f32]) -> usize {
    thresholds
        .iter()
        .filter(|&&t| if t == 0.0 { is_intersecting } else { ratio >= t })
        .count()
}

new_key_type! {
    struct ObserverKey;
}

struct Observer {
    target: ElementId,
    root_margin: RootMargin,
    thresholds: Vec<f32>,
    /// Taken out while the callback runs
    callback: Option<IntersectionCallback>,
    last: Option<(bool, usize)>,
}

struct ViewportInner {
    viewport: Rect,
    elements: FxHashMap<ElementId, Rect>,
    observers: SlotMap<ObserverKey, Observer>,
}

/// Rectangle-based [`IntersectionHost`]
#[derive(Clone)]
pub struct ViewportHost {
    inner: Rc<RefCell<ViewportInner>>,
}

impl ViewportHost {
    pub fn new(viewport: Rect) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                viewport,
                elements: FxHashMap::default(),
                observers: SlotMap::with_key(),
            })),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.inner.borrow().viewport
    }

    pub fn set_viewport(&self, viewport: Rect) {
        self.inner.borrow_mut().viewport = viewport;
    }

    /// Move the viewport origin, keeping its size
    pub fn scroll_to(&self, x: f32, y: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.viewport.x = x;
        inner.viewport.y = y;
    }

    pub fn set_element_rect(&self, element: ElementId, rect: Rect) {
        self.inner.borrow_mut().elements.insert(element, rect);
    }

    /// Forget an element; observers of it report no intersection
    pub fn remove_element(&self, element: ElementId) {
        self.inner.borrow_mut().elements.remove(&element);
    }

    /// Number of live observations
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Deliver an entry to every observer whose intersection state changed
    /// since its last delivery (the first flush after `observe` always
    /// delivers)
    ///
    /// Returns the number of entries delivered.
    pub fn flush(&self) -> usize {
        let pending = self.collect_pending();
        let mut delivered = 0;

        for (key, entry) in pending {
            let callback = self
                .inner
                .borrow_mut()
                .observers
                .get_mut(key)
                .and_then(|observer| observer.callback.take());

            // Observers disconnected by an earlier callback in this flush
            // are skipped
            let Some(mut callback) = callback else {
                continue;
            };
            callback(std::slice::from_ref(&entry));
            delivered += 1;

            if let Some(observer) = self.inner.borrow_mut().observers.get_mut(key) {
                observer.callback = Some(callback);
            }
        }
        delivered
    }

    fn collect_pending(&self) -> Vec<(ObserverKey, IntersectionEntry)> {
        let mut inner = self.inner.borrow_mut();
        let ViewportInner {
            viewport,
            elements,
            observers,
        } = &mut *inner;

        let mut pending = Vec::new();
        for (key, observer) in observers.iter_mut() {
            let root = viewport.expand(&observer.root_margin);
            let (is_intersecting, ratio) = elements
                .get(&observer.target)
                .map_or((false, 0.0), |rect| measure(rect, &root));
            let bucket = threshold_bucket(is_intersecting, ratio, &observer.thresholds);

            if observer.last != Some((is_intersecting, bucket)) {
                observer.last = Some((is_intersecting, bucket));
                pending.push((
                    key,
                    IntersectionEntry {
                        target: observer.target,
                        is_intersecting,
                        intersection_ratio: ratio,
                    },
                ));
            }
        }
        pending
    }
}

impl IntersectionHost for ViewportHost {
    fn observe(
        &self,
        target: ElementId,
        options: &VisibilityOptions,
        callback: IntersectionCallback,
    ) -> Box<dyn Observation> {
        let key = self.inner.borrow_mut().observers.insert(Observer {
            target,
            root_margin: options.root_margin,
            thresholds: options.threshold.values(),
            callback: Some(callback),
            last: None,
        });
        tracing::trace!(?target, "viewport observer registered");

        Box::new(ViewportObservation {
            host: Rc::downgrade(&self.inner),
            key,
        })
    }
}

struct ViewportObservation {
    host: Weak<RefCell<ViewportInner>>,
    key: ObserverKey,
}

impl Observation for ViewportObservation {
    fn disconnect(&mut self) {
        if let Some(inner) = self.host.upgrade() {
            inner.borrow_mut().observers.remove(self.key);
        }
    }
}
