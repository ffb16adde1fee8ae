pub mod ai;
pub use ai::{choose_move, search, Difficulty, EvalKind, SearchConfig, SearchResult};
