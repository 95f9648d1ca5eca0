use std::cell::RefCell;
use std::rc::Rc;

use cardkit_card::visibility::{lifecycle, Rect, ViewportHost};
use cardkit_card::{
    ElementId, IntersectionHost, TargetRef, VisibilityDetector, VisibilityOptions, VisibilityState,
};

fn host() -> ViewportHost {
    ViewportHost::new(Rect::new(0.0, 0.0, 400.0, 300.0))
}

fn detector(host: &ViewportHost, options: VisibilityOptions) -> VisibilityDetector {
    let host: Rc<dyn IntersectionHost> = Rc::new(host.clone());
    VisibilityDetector::new(options, Some(host))
}

#[test]
fn scrolling_in_and_out_tracks_visibility() {
    let host = host();
    let card = ElementId(1);
    host.set_element_rect(card, Rect::new(0.0, 600.0, 400.0, 200.0));

    let detector = detector(&host, VisibilityOptions::new().root_margin("0px"));
    detector.target().attach(card);

    let mut seen = Vec::new();
    for scroll in [0.0, 500.0, 1200.0, 550.0] {
        host.scroll_to(0.0, scroll);
        host.flush();
        seen.push(detector.state());
    }

    let visible: Vec<bool> = seen.iter().map(|s| s.is_visible).collect();
    assert_eq!(visible, vec![false, true, false, true]);
    assert!(!seen[0].has_been_visible);
    assert!(seen[1..].iter().all(|s| s.has_been_visible));
}

#[test]
fn root_margin_triggers_early() {
    let host = host();
    let card = ElementId(1);
    // 40px below the viewport's bottom edge
    host.set_element_rect(card, Rect::new(0.0, 340.0, 400.0, 100.0));

    let eager = detector(&host, VisibilityOptions::new().root_margin("50px").threshold(0.0));
    let strict = detector(&host, VisibilityOptions::new().root_margin("0px").threshold(0.0));
    eager.target().attach(card);
    strict.target().attach(card);
    host.flush();

    assert!(eager.state().is_visible);
    assert!(!strict.state().is_visible);
}

#[test]
fn disabled_detector_ignores_intersections() {
    let host = host();
    let card = ElementId(1);
    host.set_element_rect(card, Rect::new(0.0, 0.0, 100.0, 100.0));

    let detector = detector(&host, VisibilityOptions::new().enabled(false));
    detector.target().attach(card);
    host.flush();

    assert_eq!(detector.state(), VisibilityState::default());
    assert_eq!(host.observer_count(), 0);
}

#[test]
fn late_target_attaches_once() {
    let host = host();
    let detector = detector(&host, VisibilityOptions::new());
    assert_eq!(detector.phase(), lifecycle::AWAITING_TARGET);
    assert_eq!(host.observer_count(), 0);

    let card = ElementId(5);
    host.set_element_rect(card, Rect::new(0.0, 0.0, 100.0, 100.0));
    detector.target().attach(card);
    detector.target().attach(card);
    assert_eq!(host.observer_count(), 1);

    host.flush();
    assert!(detector.state().is_visible);
}

#[test]
fn dispose_inside_listener_stops_updates() {
    let host = host();
    let card = ElementId(1);
    host.set_element_rect(card, Rect::new(0.0, 0.0, 100.0, 100.0));

    let detector = Rc::new(detector(&host, VisibilityOptions::new()));
    detector.target().attach(card);

    // Lazy loading: stop observing after the first sighting
    let loaded = Rc::new(RefCell::new(0));
    let loaded_clone = loaded.clone();
    let weak = Rc::downgrade(&detector);
    detector.subscribe(move |state| {
        if state.has_been_visible {
            *loaded_clone.borrow_mut() += 1;
            if let Some(detector) = weak.upgrade() {
                detector.dispose();
            }
        }
    });

    host.flush();
    assert_eq!(*loaded.borrow(), 1);
    assert!(detector.is_disposed());
    assert_eq!(host.observer_count(), 0);

    host.scroll_to(0.0, 1000.0);
    host.flush();
    assert!(detector.state().is_visible);
}

#[test]
fn reconfigure_inside_listener_turns_detection_off() {
    let host = host();
    let card = ElementId(1);
    host.set_element_rect(card, Rect::new(0.0, 0.0, 100.0, 100.0));

    let detector = Rc::new(detector(&host, VisibilityOptions::new()));
    detector.target().attach(card);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let weak = Rc::downgrade(&detector);
    detector.subscribe(move |state| {
        seen_clone.borrow_mut().push(*state);
        if state.has_been_visible {
            if let Some(detector) = weak.upgrade() {
                detector.reconfigure(VisibilityOptions::new().enabled(false));
            }
        }
    });

    host.flush();
    assert_eq!(
        *seen.borrow(),
        vec![
            VisibilityState {
                is_visible: true,
                has_been_visible: true
            },
            VisibilityState {
                is_visible: false,
                has_been_visible: true
            },
        ]
    );
    assert_eq!(detector.phase(), lifecycle::INACTIVE);
    assert_eq!(host.observer_count(), 0);
}

#[test]
fn detectors_sharing_a_late_target_each_attach() {
    let host = host();
    let dyn_host: Rc<dyn IntersectionHost> = Rc::new(host.clone());
    let target = TargetRef::new();

    let first = VisibilityDetector::with_target(VisibilityOptions::new(), Some(dyn_host.clone()), target.clone());
    let second = VisibilityDetector::with_target(VisibilityOptions::new(), Some(dyn_host.clone()), target.clone());
    let third = VisibilityDetector::with_target(VisibilityOptions::new(), Some(dyn_host), target.clone());
    third.dispose();

    let card = ElementId(1);
    host.set_element_rect(card, Rect::new(0.0, 0.0, 100.0, 100.0));
    target.attach(card);

    assert!(first.is_observing());
    assert!(second.is_observing());
    assert!(!third.is_observing());
    assert_eq!(host.observer_count(), 2);

    host.flush();
    assert!(first.state().is_visible);
    assert!(second.state().is_visible);
}
