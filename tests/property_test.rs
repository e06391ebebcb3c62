use std::collections::HashSet;

use proptest::prelude::*;

use notefall::chart::Chart;
use notefall::game::{Action, NotePhase, Reducer, sort_actions};
use notefall::model::{Lane, Note, NoteId};

fn arb_lane() -> impl Strategy<Value = Lane> {
    (0usize..4).prop_map(|i| Lane::from_index(i).unwrap_or(Lane::Lane0))
}

fn arb_chart() -> impl Strategy<Value = Chart> {
    prop::collection::vec((arb_lane(), 0.0f64..5000.0, -100.0f64..3000.0), 0..24).prop_map(
        |specs| {
            let notes = specs
                .into_iter()
                .enumerate()
                .map(|(i, (lane, start, dur))| Note::new(i as u32 + 1, lane, start, dur))
                .collect();
            Chart::from_notes(notes)
        },
    )
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    let action = prop_oneof![
        (0.0f64..9000.0).prop_map(|t| Action::Tick { elapsed_ms: t }),
        (arb_lane(), 0.0f64..9000.0).prop_map(|(lane, t)| Action::KeyPress { lane, at_ms: t }),
    ];
    prop::collection::vec(action, 0..64).prop_map(|mut actions| {
        sort_actions(&mut actions);
        actions
    })
}

proptest! {
    #[test]
    fn same_actions_same_state(chart in arb_chart(), actions in arb_actions()) {
        let reducer = Reducer::default();
        let a = reducer.fold(reducer.initial_state(&chart), &actions);
        let b = reducer.fold(reducer.initial_state(&chart), &actions);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_note_is_accounted_for_exactly_once(chart in arb_chart(), actions in arb_actions()) {
        let reducer = Reducer::default();
        let all: HashSet<NoteId> = chart.notes.iter().map(|n| n.id).collect();
        let mut retired: Vec<NoteId> = Vec::new();
        let mut state = reducer.initial_state(&chart);

        for action in &actions {
            state = reducer.reduce(state, action);
            retired.extend(state.exited.iter().map(|n| n.id()));

            let live: Vec<NoteId> = state.live_notes.iter().map(|n| n.id()).collect();
            let mut seen = HashSet::new();
            for id in live.iter().chain(retired.iter()) {
                prop_assert!(seen.insert(*id), "{} appears twice", id);
            }
            prop_assert_eq!(&seen, &all);

            prop_assert!(state.live_notes.iter().all(|n| n.phase.is_live()));
            prop_assert!(state.exited.iter().all(|n| n.phase.is_terminal()));
        }
    }

    #[test]
    fn active_notes_only_move_down(chart in arb_chart(), ticks in prop::collection::vec(0u32..9000, 1..32)) {
        let mut ticks: Vec<f64> = ticks.into_iter().map(f64::from).collect();
        ticks.sort_by(f64::total_cmp);
        let reducer = Reducer::default();
        let mut state = reducer.initial_state(&chart);

        for t in ticks {
            let prev_time = state.time_ms;
            let before: Vec<(NoteId, NotePhase, f64)> = state
                .live_notes
                .iter()
                .map(|n| (n.id(), n.phase, n.position.y))
                .collect();
            state = reducer.reduce(state, &Action::Tick { elapsed_ms: t });

            for entity in state.live_notes.iter().filter(|n| n.phase == NotePhase::Active) {
                if let Some((_, phase, y)) = before.iter().find(|(id, ..)| *id == entity.id()) {
                    prop_assert!(entity.position.y >= *y);
                    if *phase == NotePhase::Active && t > prev_time {
                        prop_assert!(
                            entity.position.y > *y,
                            "note {} stalled at y={} between {} and {}",
                            entity.id(), y, prev_time, t
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn score_never_decreases(chart in arb_chart(), actions in arb_actions()) {
        let reducer = Reducer::default();
        let mut state = reducer.initial_state(&chart);
        let mut last = 0;
        for action in &actions {
            state = reducer.reduce(state, action);
            prop_assert!(state.score.score >= last);
            prop_assert!(state.score.combo <= state.score.max_combo);
            last = state.score.score;
        }
    }
}
