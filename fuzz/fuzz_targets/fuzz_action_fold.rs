#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notefall::chart::Chart;
use notefall::game::{Action, Reducer};
use notefall::model::{Lane, Note};

#[derive(Debug, Arbitrary)]
struct Input {
    notes: Vec<(u8, f64, f64)>,
    actions: Vec<(bool, u8, f64)>,
}

fuzz_target!(|input: Input| {
    let notes = input
        .notes
        .iter()
        .take(256)
        .enumerate()
        .map(|(i, &(pitch, start, dur))| {
            Note::new(i as u32 + 1, Lane::from_pitch(pitch as i32), start, dur)
        })
        .collect();
    let chart = Chart::from_notes(notes);

    let actions: Vec<Action> = input
        .actions
        .iter()
        .take(1024)
        .map(|&(is_tick, pitch, t)| {
            if is_tick {
                Action::Tick { elapsed_ms: t }
            } else {
                Action::KeyPress {
                    lane: Lane::from_pitch(pitch as i32),
                    at_ms: t,
                }
            }
        })
        .collect();

    let reducer = Reducer::default();
    let state = reducer.fold(reducer.initial_state(&chart), &actions);
    assert!(state.live_notes.iter().all(|n| n.phase.is_live()));
});
