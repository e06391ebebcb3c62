use notefall::chart::Chart;
use notefall::game::{Action, GameState, JudgeConfig, JudgeGrade, JudgeSystem, Judgement, NotePhase, Reducer};
use notefall::model::{Lane, Note, NoteId, Playfield};

fn reducer() -> Reducer {
    Reducer::new(
        JudgeSystem::new(JudgeConfig::with_hit_window(50.0)),
        Playfield::default(),
    )
}

fn tick(ms: f64) -> Action {
    Action::Tick { elapsed_ms: ms }
}

fn press(lane: Lane, ms: f64) -> Action {
    Action::KeyPress { lane, at_ms: ms }
}

fn play(reducer: &Reducer, notes: Vec<Note>, actions: &[Action]) -> GameState {
    let chart = Chart::from_notes(notes);
    reducer.fold(reducer.initial_state(&chart), actions)
}

#[test]
fn test_press_inside_window_hits() {
    let r = reducer();
    let state = play(
        &r,
        vec![Note::new(1, Lane::Lane0, 1000.0, 2000.0)],
        &[tick(1000.0), tick(3000.0), press(Lane::Lane0, 3040.0)],
    );

    assert_eq!(state.score.hit_count(), 1);
    assert_eq!(state.score.good_count, 1);
    assert_eq!(state.exited[0].phase, NotePhase::Hit);
    assert!(state.ended);
    match state.last_judgement {
        Some(Judgement::Hit {
            note,
            grade,
            timing_diff_ms,
            points,
        }) => {
            assert_eq!(note, NoteId(1));
            assert_eq!(grade, JudgeGrade::Good);
            assert!((timing_diff_ms - 40.0).abs() < 1e-9);
            assert_eq!(points, 100);
        }
        other => panic!("unexpected judgement: {other:?}"),
    }
}

#[test]
fn test_press_after_window_misses() {
    let r = reducer();
    let state = play(
        &r,
        vec![Note::new(1, Lane::Lane0, 1000.0, 2000.0)],
        &[tick(1000.0), press(Lane::Lane0, 3100.0), tick(3100.0)],
    );

    assert_eq!(state.score.hit_count(), 0);
    assert_eq!(state.score.empty_press_count, 1);
    assert_eq!(state.score.miss_count, 1);
    assert_eq!(state.exited[0].phase, NotePhase::Missed);
}

#[test]
fn test_earliest_note_wins_tie_break() {
    let r = reducer();
    let notes = vec![
        Note::new(1, Lane::Lane2, 1200.0, 100.0),
        Note::new(2, Lane::Lane2, 1000.0, 300.0),
    ];
    // Both reach the hit line at 1300.
    let state = play(&r, notes, &[tick(1250.0), press(Lane::Lane2, 1300.0)]);

    assert_eq!(state.exited.len(), 1);
    assert_eq!(state.exited[0].id(), NoteId(2));
    assert_eq!(state.live_count(), 1);
    assert_eq!(state.live_notes[0].id(), NoteId(1));
}

#[test]
fn test_press_on_wrong_lane_is_empty() {
    let r = reducer();
    let state = play(
        &r,
        vec![Note::new(1, Lane::Lane0, 0.0, 1000.0)],
        &[tick(500.0), press(Lane::Lane3, 1000.0)],
    );
    assert_eq!(state.score.empty_press_count, 1);
    assert_eq!(state.last_judgement, Some(Judgement::EmptyPress));
    assert_eq!(state.live_count(), 1);
}

#[test]
fn test_zero_duration_expires_on_next_tick() {
    let r = reducer();
    let chart = Chart::from_notes(vec![
        Note::new(1, Lane::Lane1, 5000.0, 0.0),
        Note::new(2, Lane::Lane1, 0.0, -10.0),
    ]);
    let state = r.reduce(r.initial_state(&chart), &tick(1.0));

    assert_eq!(state.score.expired_count, 2);
    assert_eq!(state.score.miss_count, 0);
    assert!(state.exited.iter().all(|n| n.phase == NotePhase::Expired));
    assert!(state.ended);
}

#[test]
fn test_repeated_tick_does_not_move_notes() {
    let r = reducer();
    let chart = Chart::from_notes(vec![Note::new(1, Lane::Lane0, 0.0, 1000.0)]);
    let once = r.reduce(r.initial_state(&chart), &tick(400.0));
    let twice = r.reduce(once.clone(), &tick(400.0));

    assert_eq!(once.live_notes, twice.live_notes);
    assert!((twice.live_notes[0].position.y - 140.0).abs() < 1e-9);
}

#[test]
fn test_backwards_tick_is_clamped() {
    let r = reducer();
    let chart = Chart::from_notes(vec![Note::new(1, Lane::Lane0, 0.0, 1000.0)]);
    let state = r.fold(r.initial_state(&chart), &[tick(600.0), tick(200.0)]);

    assert_eq!(state.time_ms, 600.0);
    assert!((state.live_notes[0].position.y - 210.0).abs() < 1e-9);
}

#[test]
fn test_combo_multiplier_kicks_in_at_ten() {
    let r = reducer();
    let notes: Vec<Note> = (0..12)
        .map(|i| Note::new(i + 1, Lane::Lane0, i as f64 * 1000.0, 500.0))
        .collect();
    let actions: Vec<Action> = (0..12)
        .map(|i| press(Lane::Lane0, i as f64 * 1000.0 + 500.0))
        .collect();
    let state = play(&r, notes, &actions);

    assert_eq!(state.score.perfect_count, 12);
    assert_eq!(state.score.max_combo, 12);
    // Ten hits at x1.0, then two at x1.2.
    assert_eq!(state.score.score, 10 * 300 + 2 * 360);
}

#[test]
fn test_empty_press_breaks_combo() {
    let r = reducer();
    let notes = vec![
        Note::new(1, Lane::Lane0, 0.0, 100.0),
        Note::new(2, Lane::Lane0, 1000.0, 100.0),
    ];
    let state = play(
        &r,
        notes,
        &[
            press(Lane::Lane0, 100.0),
            press(Lane::Lane1, 500.0),
            press(Lane::Lane0, 1100.0),
        ],
    );

    assert_eq!(state.score.hit_count(), 2);
    assert_eq!(state.score.combo, 1);
    assert_eq!(state.score.max_combo, 1);
}
