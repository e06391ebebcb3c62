// CSV chart loading.

#[allow(clippy::module_inception)]
mod chart;
mod error;
mod loader;

pub use chart::*;
pub use error::*;
pub use loader::*;
