use approx::assert_relative_eq;
use card_carousel::{CarouselCommand, CarouselController, CarouselIntent, CarouselState};

const FRAME: f32 = 1.0 / 60.0;

/// Treibt die Settle-Animation bis zum Einrasten (oder panict).
fn run_settle_to_rest(controller: &mut CarouselController, state: &mut CarouselState) {
    for _ in 0..3000 {
        if !state.is_settling() {
            return;
        }
        controller
            .handle_intent(state, CarouselIntent::AnimationTicked { dt: FRAME })
            .expect("AnimationTicked sollte ohne Fehler durchlaufen");
    }
    panic!("Settle ist nach 3000 Frames nicht eingerastet");
}

#[test]
fn test_drag_release_past_boundary_advances_to_next_section() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    // Vorhersage -1000: Distanz 300 zu Index 1, 400 zu Index 2 → Index 1
    controller
        .handle_intent(
            &mut state,
            CarouselIntent::DragReleased {
                predicted_end_translation: -1000.0,
            },
        )
        .expect("DragReleased sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_index, 1);
    assert!(state.is_settling());

    run_settle_to_rest(&mut controller, &mut state);

    assert_relative_eq!(state.rested_offset, -700.0);
    assert_relative_eq!(state.live_offset, -700.0);
}

#[test]
fn test_snap_back_keeps_index_but_issues_settle() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    // Kurzer Drag, der die Seitengrenze nicht überquert
    controller
        .handle_intent(&mut state, CarouselIntent::DragMoved { translation: -80.0 })
        .expect("DragMoved sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.live_offset, -80.0);

    controller
        .handle_intent(
            &mut state,
            CarouselIntent::DragReleased {
                predicted_end_translation: -80.0,
            },
        )
        .expect("DragReleased sollte ohne Fehler durchlaufen");

    // Index unverändert, aber der Settle-Request wurde trotzdem ausgelöst
    assert_eq!(state.selected_index, 0);
    assert!(state.is_settling());

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        CarouselCommand::BeginSettle { target } => assert_eq!(*target, 0),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    run_settle_to_rest(&mut controller, &mut state);
    assert_relative_eq!(state.rested_offset, 0.0);
}

#[test]
fn test_exact_tie_resolves_to_lower_index() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    // -350 liegt exakt zwischen Index 0 und 1 → niedrigerer Index gewinnt
    controller
        .handle_intent(
            &mut state,
            CarouselIntent::DragReleased {
                predicted_end_translation: -350.0,
            },
        )
        .expect("DragReleased sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_index, 0);
}

#[test]
fn test_section_selection_settles_on_resting_offset() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    controller
        .handle_intent(&mut state, CarouselIntent::SectionSelected { index: 3 })
        .expect("SectionSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_index, 3);

    run_settle_to_rest(&mut controller, &mut state);

    assert_relative_eq!(state.rested_offset, -2100.0);
    assert_relative_eq!(state.live_offset, state.rested_offset);
}

#[test]
fn test_drag_mid_settle_rebases_from_animated_offset() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    controller
        .handle_intent(&mut state, CarouselIntent::SectionSelected { index: 1 })
        .expect("SectionSelected sollte ohne Fehler durchlaufen");

    // Animation ein Stück laufen lassen, dann mitten drin neu draggen
    for _ in 0..20 {
        controller
            .handle_intent(&mut state, CarouselIntent::AnimationTicked { dt: FRAME })
            .expect("AnimationTicked sollte ohne Fehler durchlaufen");
    }
    assert!(state.is_settling());
    let animated_rested = state.rested_offset;
    assert!(animated_rested < 0.0 && animated_rested > -700.0);

    controller
        .handle_intent(&mut state, CarouselIntent::DragMoved { translation: 30.0 })
        .expect("DragMoved sollte ohne Fehler durchlaufen");

    // Settle verworfen, Drag re-basiert auf dem zuletzt animierten Wert
    assert!(!state.is_settling());
    assert_relative_eq!(state.live_offset, animated_rested + 30.0);
}

#[test]
fn test_consecutive_drags_accumulate_pages() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    for expected_index in 1..=3 {
        controller
            .handle_intent(
                &mut state,
                CarouselIntent::DragReleased {
                    predicted_end_translation: -500.0,
                },
            )
            .expect("DragReleased sollte ohne Fehler durchlaufen");
        run_settle_to_rest(&mut controller, &mut state);

        assert_eq!(state.selected_index, expected_index);
        assert_relative_eq!(state.rested_offset, -(700.0 * expected_index as f32));
    }
}

#[test]
fn test_viewport_resize_enables_scene_build() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    assert!(controller.build_card_scene(&state).is_err());

    controller
        .handle_intent(
            &mut state,
            CarouselIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    let scene = controller
        .build_card_scene(&state)
        .expect("Szene sollte mit gültigem Viewport baubar sein");
    assert_eq!(scene.cards.len(), 6);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = CarouselController::new();
    let mut state = CarouselState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, CarouselIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        CarouselCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
