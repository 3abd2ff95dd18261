mod common;

use common::*;
use rgb_lightshow::color::{DIM_WHITE, OFF};
use rgb_lightshow::{AnimationEngine, BoardCommand, BoardConfig, DisplayState, Mode, Srgb};

fn engine() -> AnimationEngine {
    AnimationEngine::new(&BoardConfig::default())
}

fn state_in(mode: Mode) -> DisplayState<TestInstant> {
    let mut state = DisplayState::new(0.25);
    while state.mode() != mode {
        state.apply(BoardCommand::NextMode, TestInstant(0));
    }
    state
}

// ============================================================================
// Rate Limiting
// ============================================================================

#[test]
fn second_frame_inside_interval_is_skipped() {
    let mut engine = engine();
    let mut state = state_in(Mode::Flags);
    let mut surface = MockSurface::new();

    assert!(engine.render_frame(&mut state, &mut surface, TestInstant(0)));
    let writes = surface.writes();
    assert_eq!(surface.flushes(), 1);

    assert!(!engine.render_frame(&mut state, &mut surface, TestInstant(10)));
    assert!(!engine.render_frame(&mut state, &mut surface, TestInstant(19)));
    assert_eq!(surface.writes(), writes);
    assert_eq!(surface.flushes(), 1);

    assert!(engine.render_frame(&mut state, &mut surface, TestInstant(20)));
    assert_eq!(surface.flushes(), 2);
}

#[test]
fn inactive_display_is_untouched_but_keeps_frame_time() {
    let mut engine = engine();
    let mut state = state_in(Mode::Flags);
    let mut surface = MockSurface::new();

    state.apply(BoardCommand::ShutOff, TestInstant(0));
    assert!(!engine.render_frame(&mut state, &mut surface, TestInstant(0)));
    assert_eq!(surface.flushes(), 0);

    state.apply(
        BoardCommand::Wake {
            mode: Mode::Flags,
            set_index: 0,
        },
        TestInstant(5),
    );
    assert!(!engine.render_frame(&mut state, &mut surface, TestInstant(10)));
    assert!(engine.render_frame(&mut state, &mut surface, TestInstant(20)));
}

// ============================================================================
// Mode Rendering
// ============================================================================

#[test]
fn flags_draw_the_selected_flag() {
    let mut engine = engine();
    let mut state = state_in(Mode::Flags);
    let mut surface = MockSurface::new();

    engine.render_frame(&mut state, &mut surface, TestInstant(0));

    // France: blue hoist, red fly
    assert_eq!(surface.shown()[0], Srgb::new(0, 0, 255));
    assert_eq!(surface.shown()[7], Srgb::new(255, 0, 0));
    assert_eq!(surface.lit_count(), 32);
}

#[test]
fn flag_palette_advances_on_cadence() {
    let mut engine = engine();
    let mut state = state_in(Mode::Flags);
    let mut surface = MockSurface::new();

    engine.render_frame(&mut state, &mut surface, TestInstant(0));
    assert_eq!(state.palette_phase(), 1);

    for t in (20..600).step_by(20) {
        engine.render_frame(&mut state, &mut surface, TestInstant(t));
    }
    assert_eq!(state.palette_phase(), 1);

    engine.render_frame(&mut state, &mut surface, TestInstant(600));
    assert_eq!(state.palette_phase(), 2);
}

#[test]
fn explosion_steps_faster_than_flags() {
    let mut engine = engine();
    let mut state = state_in(Mode::Explosion);
    let mut surface = MockSurface::new();

    engine.render_frame(&mut state, &mut surface, TestInstant(0));
    assert_eq!(state.palette_phase(), 1);

    assert!(engine.render_frame(&mut state, &mut surface, TestInstant(40)));
    assert_eq!(state.palette_phase(), 1);

    engine.render_frame(&mut state, &mut surface, TestInstant(80));
    assert_eq!(state.palette_phase(), 2);
}

#[test]
fn explosion_frames_are_partly_dark() {
    let mut engine = engine();
    let mut state = state_in(Mode::Explosion);
    let mut surface = MockSurface::new();

    engine.render_frame(&mut state, &mut surface, TestInstant(0));

    let lit = surface.lit_count();
    assert!(lit > 0 && lit < 32, "lit {}", lit);
}

#[test]
fn gradient_rotation_wraps_after_period() {
    let mut engine = engine();
    let mut state = state_in(Mode::Gradient);
    let mut surface = MockSurface::new();

    // France has three colors, four steps each
    for frame in 0..12u64 {
        assert!(engine.render_frame(&mut state, &mut surface, TestInstant(frame * 20)));
    }
    assert_eq!(state.rotate_phase(), 0);

    engine.render_frame(&mut state, &mut surface, TestInstant(240));
    assert_eq!(state.rotate_phase(), 1);
    assert!(surface.lit_count() > 0);
}

#[test]
fn brightness_bar_tracks_selected_level() {
    let mut engine = engine();
    let mut state = state_in(Mode::Brightness);
    let mut surface = MockSurface::new();

    engine.render_frame(&mut state, &mut surface, TestInstant(0));
    assert_eq!(surface.brightness(), 0.04);
    assert_eq!(state.brightness(), 0.04);
    assert_eq!(surface.lit_count(), 1);
    assert_eq!(surface.shown()[0], DIM_WHITE);
    assert_eq!(surface.shown()[1], OFF);

    for _ in 0..5 {
        state.apply(BoardCommand::NextSet, TestInstant(0));
    }
    engine.render_frame(&mut state, &mut surface, TestInstant(20));
    assert_eq!(surface.brightness(), 1.0);
    assert_eq!(surface.lit_count(), 32);
}

#[test]
fn wake_restarts_palette_cadence() {
    let mut engine = engine();
    let mut state = state_in(Mode::Flags);
    let mut surface = MockSurface::new();

    state.apply(BoardCommand::ShutOff, TestInstant(0));
    state.apply(
        BoardCommand::Wake {
            mode: Mode::Flags,
            set_index: 0,
        },
        TestInstant(1000),
    );

    engine.render_frame(&mut state, &mut surface, TestInstant(1000));
    assert_eq!(state.palette_phase(), 0);

    engine.render_frame(&mut state, &mut surface, TestInstant(1600));
    assert_eq!(state.palette_phase(), 1);
}
