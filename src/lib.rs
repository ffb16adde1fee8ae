//! Slot-based chess rules engine with a negamax search agent.
//!
//! - [`game_repr`]: positions, move generation, legality, undo.
//! - [`agent::ai`]: evaluation and alpha-beta search.
//! - [`game`]: the turn-keeping facade a front end drives.

pub mod agent;
pub mod game;
pub mod game_repr;

pub use game::{Game, GameStatus};
