//! Replay recording and playback.

mod replay_data;
mod replay_player;
mod replay_recorder;
mod storage;

pub use replay_data::{REPLAY_VERSION, ReplayData, ReplayScore};
pub use replay_player::{ReplayPlayer, replay_actions};
pub use replay_recorder::ReplayRecorder;
pub use storage::{load_replay, replay_file_name, save_replay};
