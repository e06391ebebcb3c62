//! Deterministic, clock-free execution of a game.

use crate::chart::Chart;
use crate::game::{Action, GameState, Reducer, sort_actions};

/// Outcome of a simulated game.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: GameState,
    /// Actions actually reduced, in order. Anything after the game ended is
    /// dropped.
    pub consumed: Vec<Action>,
}

/// Ticks a real-time clock with the given period would emit until every
/// note in the chart is past its window.
pub fn tick_schedule(chart: &Chart, period_ms: u64, hit_window_ms: f64) -> Vec<Action> {
    let period = period_ms.max(1);
    let horizon = chart.end_time_ms() + hit_window_ms.max(0.0);

    let mut ticks = Vec::new();
    let mut step = 1u64;
    loop {
        let elapsed_ms = (step * period) as f64;
        ticks.push(Action::Tick { elapsed_ms });
        if elapsed_ms > horizon {
            break;
        }
        step += 1;
    }
    ticks
}

/// Reduce `actions` in the order given, stopping once the game has ended.
/// Returns the final state and the number of actions consumed.
pub fn run_to_end(reducer: &Reducer, initial: GameState, actions: &[Action]) -> (GameState, usize) {
    let mut state = initial;
    let mut consumed = 0;
    for action in actions {
        if state.ended {
            break;
        }
        state = reducer.reduce(state, action);
        consumed += 1;
    }
    (state, consumed)
}

/// Merge ticks and presses into reduction order and fold them.
pub fn simulate(
    reducer: &Reducer,
    initial: GameState,
    ticks: impl IntoIterator<Item = Action>,
    presses: impl IntoIterator<Item = Action>,
) -> Simulation {
    let mut actions: Vec<Action> = ticks.into_iter().chain(presses).collect();
    sort_actions(&mut actions);

    let (state, consumed) = run_to_end(reducer, initial, &actions);
    actions.truncate(consumed);
    Simulation {
        state,
        consumed: actions,
    }
}
