// notefall: headless four-lane rhythm game runner.
//
// Plays a chart with autoplay input (in real time or instantly), or re-folds
// a saved replay, and reports the result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use notefall::chart::{Chart, ChartLoader};
use notefall::config::{CONFIG_FILE, GameConfig};
use notefall::game::{Action, GameState, PlayResult, Reducer};
use notefall::input::{InputMapper, ScriptedInput, autoplay_events};
use notefall::render::TracingTarget;
use notefall::replay::{ReplayPlayer, ReplayRecorder, load_replay, save_replay};
use notefall::runtime::{Clock, GameLoop, action_queue, simulate, spawn_input_feeder, tick_schedule};
use notefall::traits::time::{SystemTimeProvider, TimeProvider};
use notefall::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "notefall", about = "Four-lane falling-note rhythm game (headless)")]
struct Args {
    /// Chart file to play.
    chart: PathBuf,

    /// Path to config JSON file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Fold the whole game immediately instead of running the clock.
    #[arg(long)]
    instant: bool,

    /// Re-fold a saved replay instead of playing.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Write the consumed actions to a replay file.
    #[arg(long)]
    save_replay: Option<PathBuf>,

    /// Also write logs to a daily file in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, env = "NOTEFALL_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.log_dir.as_deref(), args.verbose)?;
    info!("notefall starting");

    let config = GameConfig::load_from(&args.config)?;
    let loaded = ChartLoader::new(config.parse_policy)
        .load(&args.chart)
        .with_context(|| format!("Failed to load chart: {}", args.chart.display()))?;
    if !loaded.skipped.is_empty() {
        warn!(skipped = loaded.skipped.len(), "Chart loaded with skipped lines");
    }
    let chart = loaded.chart;
    let reducer = Reducer::from_config(&config);

    let (state, actions) = if let Some(path) = &args.replay {
        let data = load_replay(path)?;
        info!(path = %path.display(), actions = data.actions.len(), "Replaying");
        let player = ReplayPlayer::new(data);
        let (state, _) = player.verify(&chart, &reducer)?;
        (state, player.data().actions.clone())
    } else if args.instant {
        play_instant(&chart, &config, &reducer)
    } else {
        play_realtime(&chart, &config, &reducer)?
    };

    let result = PlayResult::from_state(&chart, &state);
    info!(
        score = result.score,
        max_combo = result.max_combo,
        perfect = result.perfect_count,
        great = result.great_count,
        good = result.good_count,
        miss = result.miss_count,
        empty_press = result.empty_press_count,
        expired = result.expired_count,
        accuracy = %format_args!("{:.2}", result.accuracy()),
        rank = result.rank(),
        "Result"
    );

    if let Some(path) = &args.save_replay {
        let mut recorder = ReplayRecorder::new(
            chart.sha256.clone(),
            reducer.judge().hit_window_ms(),
            config.tick_period_ms,
        );
        recorder.extend(actions);
        recorder.set_score(&result);
        let written = save_replay(path, &recorder.into_replay_data())?;
        info!(path = %written.display(), "Replay saved");
    }

    Ok(())
}

/// Key presses an autoplayer would make on this chart.
fn autoplay_presses(chart: &Chart, config: &GameConfig) -> Vec<Action> {
    let mut mapper = InputMapper::new(config.key_bindings.clone());
    autoplay_events(chart, &config.key_bindings, config.autoplay_offset_ms)
        .iter()
        .filter_map(|event| mapper.map(event))
        .collect()
}

fn play_instant(chart: &Chart, config: &GameConfig, reducer: &Reducer) -> (GameState, Vec<Action>) {
    let ticks = tick_schedule(chart, config.tick_period_ms, reducer.judge().hit_window_ms());
    let sim = simulate(
        reducer,
        reducer.initial_state(chart),
        ticks,
        autoplay_presses(chart, config),
    );
    info!(actions = sim.consumed.len(), "Instant play finished");
    (sim.state, sim.consumed)
}

fn play_realtime(
    chart: &Chart,
    config: &GameConfig,
    reducer: &Reducer,
) -> Result<(GameState, Vec<Action>)> {
    let time: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider::new());
    let (sender, receiver) = action_queue();

    let input = ScriptedInput::new(autoplay_events(
        chart,
        &config.key_bindings,
        config.autoplay_offset_ms,
    ));
    let feeder = spawn_input_feeder(
        input,
        config.key_bindings.clone(),
        time.clone(),
        sender.clone(),
    );
    let mut clock = Clock::spawn(config.tick_period_ms, time, sender);

    let recorder = ReplayRecorder::new(
        chart.sha256.clone(),
        reducer.judge().hit_window_ms(),
        config.tick_period_ms,
    );
    let mut game = GameLoop::new(reducer.clone(), TracingTarget::new()).with_recorder(recorder);
    let state = game.run(&receiver, reducer.initial_state(chart));

    clock.stop();
    drop(receiver);
    if feeder.join().is_err() {
        warn!("Input feeder thread panicked");
    }

    let actions = game
        .take_recorder()
        .map(|r| r.into_replay_data().actions)
        .unwrap_or_default();
    Ok((state?, actions))
}
