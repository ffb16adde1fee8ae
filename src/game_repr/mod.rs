mod castling;
mod check;
mod error;
mod history;
mod legality;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod setup;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use error::*;
pub use history::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::MoveList;
pub use position::*;
pub use setup::*;
