// Capability seams between the game core and its collaborators.

pub mod input;
pub mod render;
pub mod time;
