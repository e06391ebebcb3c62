pub mod chart;
pub mod config;
pub mod game;
pub mod input;
pub mod model;
pub mod render;
pub mod replay;
pub mod runtime;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;
