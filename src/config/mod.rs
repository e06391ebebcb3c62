mod game_config;

pub use game_config::{CONFIG_FILE, GameConfig};
