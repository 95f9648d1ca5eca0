use std::cell::RefCell;
use std::rc::Rc;

use cardkit_card::{InteractionEvent, InteractionGates, InteractionMachine, InteractionState};
use cardkit_core::{event_types, Event, KeyCode, Modifiers};
use proptest::prelude::*;

fn arb_event() -> impl Strategy<Value = InteractionEvent> {
    prop_oneof![
        Just(InteractionEvent::PointerEnter),
        Just(InteractionEvent::PointerLeave),
        Just(InteractionEvent::PointerDown),
        Just(InteractionEvent::PointerUp),
        Just(InteractionEvent::FocusGained),
        Just(InteractionEvent::FocusLost),
    ]
}

fn run(gates: InteractionGates, sequence: &[InteractionEvent]) -> InteractionState {
    sequence
        .iter()
        .fold(InteractionState::default(), |state, event| {
            state.on_event(*event, gates).unwrap_or(state)
        })
}

proptest! {
    #[test]
    fn disabled_card_ignores_every_sequence(
        sequence in prop::collection::vec(arb_event(), 0..32),
        clickable in any::<bool>(),
    ) {
        let state = run(InteractionGates::new(true, clickable), &sequence);
        prop_assert!(state.is_idle(), "{:?} changed a disabled card", sequence);
    }

    #[test]
    fn leave_always_releases(
        mut sequence in prop::collection::vec(arb_event(), 0..32),
        clickable in any::<bool>(),
    ) {
        sequence.push(InteractionEvent::PointerLeave);
        let state = run(InteractionGates::new(false, clickable), &sequence);
        prop_assert!(!state.is_hovered);
        prop_assert!(!state.is_pressed);
    }

    #[test]
    fn disabled_machine_never_calls_back(
        sequence in prop::collection::vec(arb_event(), 0..32),
    ) {
        let calls = Rc::new(RefCell::new(0));
        let (enter, leave, click) = (calls.clone(), calls.clone(), calls.clone());
        let mut machine = InteractionMachine::new(InteractionGates::new(true, true))
            .on_pointer_enter(move |_| *enter.borrow_mut() += 1)
            .on_pointer_leave(move |_| *leave.borrow_mut() += 1)
            .on_click(move |_| *click.borrow_mut() += 1);

        for input in &sequence {
            let event_type = match input {
                InteractionEvent::PointerEnter => event_types::POINTER_ENTER,
                InteractionEvent::PointerLeave => event_types::POINTER_LEAVE,
                InteractionEvent::PointerDown => event_types::POINTER_DOWN,
                InteractionEvent::PointerUp => event_types::POINTER_UP,
                InteractionEvent::FocusGained => event_types::FOCUS,
                InteractionEvent::FocusLost => event_types::BLUR,
            };
            machine.handle_event(&mut Event::new(event_type, 1));
            machine.handle_event(&mut Event::new(event_types::CLICK, 1));
            machine.handle_event(&mut Event::key_down(1, KeyCode::ENTER, Modifiers::NONE));
        }
        prop_assert_eq!(*calls.borrow(), 0);
        prop_assert!(machine.state().is_idle());
    }
}

#[test]
fn enter_down_leave_ends_idle() {
    let mut machine = InteractionMachine::new(InteractionGates::clickable());
    for event_type in [
        event_types::POINTER_ENTER,
        event_types::POINTER_DOWN,
        event_types::POINTER_LEAVE,
    ] {
        machine.handle_event(&mut Event::new(event_type, 1));
    }
    assert_eq!(machine.state(), InteractionState::default());
}

#[test]
fn disabling_mid_interaction_resets_and_notifies_once() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let changes_clone = changes.clone();

    let mut machine = InteractionMachine::new(InteractionGates::clickable());
    for event_type in [event_types::POINTER_ENTER, event_types::POINTER_DOWN, event_types::FOCUS] {
        machine.handle_event(&mut Event::new(event_type, 1));
    }
    machine.subscribe(move |state| changes_clone.borrow_mut().push(*state));

    machine.set_disabled(true);
    machine.set_disabled(true);

    assert_eq!(*changes.borrow(), vec![InteractionState::default()]);
}

#[test]
fn events_apply_in_delivery_order() {
    let mut machine = InteractionMachine::new(InteractionGates::clickable());
    let states = Rc::new(RefCell::new(Vec::new()));
    let states_clone = states.clone();
    machine.subscribe(move |state| states_clone.borrow_mut().push(state.is_pressed));

    for event_type in [
        event_types::POINTER_DOWN,
        event_types::POINTER_UP,
        event_types::POINTER_DOWN,
        event_types::POINTER_UP,
    ] {
        machine.handle_event(&mut Event::new(event_type, 1));
    }
    assert_eq!(*states.borrow(), vec![true, false, true, false]);
}
