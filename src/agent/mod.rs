pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{choose_move, AIPlayer, Difficulty, SearchResult};
