mod board;
mod cell;
mod flips;
mod moves;
mod rules;

#[cfg(test)]
mod tests;

pub use board::*;
pub use cell::*;
pub use flips::*;
pub use moves::*;
