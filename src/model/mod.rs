// Static chart data and geometry primitives.

pub mod lane;
pub mod note;
pub mod vector;

pub use lane::Playfield;
pub use note::{LANE_COUNT, Lane, Note, NoteId};
pub use vector::Vector;
