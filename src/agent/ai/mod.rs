// AI Agent - Negamax with Alpha-Beta Pruning
//
// Classical tree search over the rules engine:
// - one negamax routine for both sides, fail-hard alpha-beta cutoffs
// - mate scores offset by distance from the root
// - random choice between equally good root moves
// - material or phase-aware static evaluation at the leaves
// - optional time budget with iterative deepening

mod config;
mod evaluation;
mod negamax;
mod search;

#[cfg(test)]
mod tests;

pub use config::{Difficulty, EvalKind, SearchConfig, MAX_DEPTH};
pub use evaluation::{game_phase, material_balance, piece_value, EvalWeights, Evaluator, GamePhase};
pub use negamax::{is_mate_score, mate_distance, DRAW_SCORE, MATE_SCORE};
pub use search::{choose_move, search, SearchResult};
