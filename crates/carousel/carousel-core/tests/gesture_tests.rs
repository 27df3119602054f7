use carousel_core::{CarouselConfig, CarouselEvent, Engine, Inputs, PointerEvent};

fn engine_at(start_index: usize) -> Engine {
    Engine::new(
        10,
        CarouselConfig {
            looping: true,
            start_index,
            ..Default::default()
        },
    )
}

fn changed_count(events: &[CarouselEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, CarouselEvent::SlideChanged { .. }))
        .count()
}

#[test]
fn swipe_left_past_threshold_fires_one_next() {
    let mut engine = engine_at(4);
    let inputs = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            // One pixel past the default 10 px threshold.
            PointerEvent::Move { x: 89.0, y: 100.0 },
            // The drag keeps going, but the session already closed.
            PointerEvent::Move { x: 40.0, y: 100.0 },
            PointerEvent::Up,
        ],
        ..Default::default()
    };
    let outputs = engine.update(0.016, inputs);
    assert_eq!(changed_count(&outputs.events), 1);
    assert_eq!(engine.current_index(), 5);
}

#[test]
fn swipe_right_past_threshold_fires_one_prev() {
    let mut engine = engine_at(4);
    let inputs = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            PointerEvent::Move { x: 111.0, y: 100.0 },
            PointerEvent::Up,
        ],
        ..Default::default()
    };
    engine.update(0.016, inputs);
    assert_eq!(engine.current_index(), 3);
}

#[test]
fn vertical_dominant_drag_is_ignored() {
    let mut engine = engine_at(4);
    let inputs = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            // Vertical-dominant: scroll intent.
            PointerEvent::Move { x: 100.0, y: 89.0 },
            // Horizontal follow-up stays under the threshold.
            PointerEvent::Move { x: 95.0, y: 100.0 },
            PointerEvent::Up,
        ],
        ..Default::default()
    };
    let outputs = engine.update(0.016, inputs);
    assert_eq!(changed_count(&outputs.events), 0);
    assert_eq!(engine.current_index(), 4);
}

#[test]
fn moves_without_a_preceding_down_are_ignored() {
    let mut engine = engine_at(4);
    let inputs = Inputs {
        pointer_events: vec![PointerEvent::Move { x: 0.0, y: 0.0 }, PointerEvent::Up],
        ..Default::default()
    };
    let outputs = engine.update(0.016, inputs);
    assert!(outputs.events.is_empty());
}

#[test]
fn pointer_up_closes_the_session() {
    let mut engine = engine_at(4);
    let inputs = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            PointerEvent::Up,
            PointerEvent::Move { x: 0.0, y: 100.0 },
        ],
        ..Default::default()
    };
    let outputs = engine.update(0.016, inputs);
    assert_eq!(changed_count(&outputs.events), 0);
}

#[test]
fn swipe_respects_boundary_without_looping() {
    let mut engine = Engine::new(
        5,
        CarouselConfig {
            start_index: 4,
            ..Default::default()
        },
    );
    let inputs = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            PointerEvent::Move { x: 80.0, y: 100.0 },
        ],
        ..Default::default()
    };
    let outputs = engine.update(0.016, inputs);
    // Terminal slide, no loop: the swipe lands on a no-op next().
    assert!(outputs.events.is_empty());
    assert_eq!(engine.current_index(), 4);
}

#[test]
fn custom_threshold_is_honored() {
    let mut engine = Engine::new(
        10,
        CarouselConfig {
            looping: true,
            start_index: 4,
            swipe_threshold: 50.0,
            ..Default::default()
        },
    );
    let under = Inputs {
        pointer_events: vec![
            PointerEvent::Down { x: 100.0, y: 100.0 },
            PointerEvent::Move { x: 60.0, y: 100.0 },
        ],
        ..Default::default()
    };
    engine.update(0.016, under);
    assert_eq!(engine.current_index(), 4);

    let over = Inputs {
        pointer_events: vec![PointerEvent::Move { x: 49.0, y: 100.0 }],
        ..Default::default()
    };
    engine.update(0.016, over);
    assert_eq!(engine.current_index(), 5);
}
