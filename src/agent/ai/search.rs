// Root search driver
//
// Tries every legal root move, scores it with negamax and picks the best.
// Moves that tie for the best score are chosen between uniformly at random
// (reservoir sampling), seeded from the config when one is given.
//
// Without a time budget the root searches the configured depth once. With a
// budget it deepens iteratively (1, 2, 3, ...) and keeps the result of the
// last iteration that finished before the deadline.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_repr::{Color, Move, MoveList, Position};
use super::config::SearchConfig;
use super::evaluation::{game_phase, Evaluator, GamePhase};
use super::negamax::{negamax, terminal_score, SearchContext, MAX_SCORE, MIN_SCORE, SEARCH_PROMOTIONS};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Depth of the last completed iteration; 0 if none completed.
    pub depth: u8,
    pub nodes_searched: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Searches for `side`'s best move.
///
/// The position is searched in place and handed back exactly as it came in.
///
/// # Panics
/// If the move history is not back at its starting depth afterwards.
pub fn search(pos: &mut Position, side: Color, config: &SearchConfig) -> SearchResult {
    let start = Instant::now();
    let root_depth = pos.history().len();
    let mut result = SearchResult::empty();

    let mut root_moves = MoveList::new();
    pos.legal_moves_with(side, &SEARCH_PROMOTIONS, &mut root_moves);
    if root_moves.is_empty() {
        result.score = terminal_score(pos.is_in_check(side), 0);
        debug!("{side} has no legal moves, score {}", result.score);
        return result;
    }

    let mut depth = config.depth.max(1);
    if game_phase(pos) == GamePhase::Endgame {
        depth = depth.saturating_add(config.endgame_extension);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let deadline = config.time_limit.map(|limit| start + limit);
    let mut ctx = SearchContext::new(Evaluator::with_weights(config.eval, config.weights), deadline);

    let first_depth = if deadline.is_some() { 1 } else { depth };
    for iteration in first_depth..=depth {
        match search_root(pos, &mut ctx, side, &root_moves, iteration, &mut rng) {
            Some((mv, score)) => {
                result.best_move = Some(mv);
                result.score = score;
                result.depth = iteration;
            }
            None => {
                warn!("time budget ran out during depth {iteration}");
                break;
            }
        }
    }

    assert_eq!(
        pos.history().len(),
        root_depth,
        "search history depth mismatch"
    );

    if result.best_move.is_none() {
        result.best_move = root_moves.first().copied();
        warn!("no search iteration completed, falling back to the first legal move");
    }
    result.nodes_searched = ctx.nodes;
    result.elapsed = start.elapsed();

    if let Some(mv) = result.best_move {
        info!(
            "{side} plays {mv} (score {}, depth {}, {} nodes, {:?})",
            result.score, result.depth, result.nodes_searched, result.elapsed
        );
    }
    result
}

/// One full pass over the root moves at `depth`. `None` when the deadline
/// interrupted it.
fn search_root(
    pos: &mut Position,
    ctx: &mut SearchContext,
    side: Color,
    moves: &[Move],
    depth: u8,
    rng: &mut StdRng,
) -> Option<(Move, i32)> {
    let mut best_score = MIN_SCORE;
    let mut best_move = None;
    let mut ties = 0u32;

    for &mv in moves {
        if !pos.try_move(side, mv).is_applied() {
            continue;
        }
        ctx.phase = game_phase(pos);

        // Window starts one below the best so far: an equal score is exact
        let score = -negamax(pos, ctx, side.opposite(), depth - 1, 1, -MAX_SCORE, -(best_score - 1));
        pos.unmake();

        if ctx.aborted {
            return None;
        }
        debug!("depth {depth}: {mv} scores {score}");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            ties = 1;
        } else if score == best_score {
            ties += 1;
            if rng.gen_range(0..ties) == 0 {
                best_move = Some(mv);
            }
        }
    }

    best_move.map(|mv| (mv, best_score))
}

/// The move `search` would pick, if `side` has one.
pub fn choose_move(pos: &mut Position, side: Color, config: &SearchConfig) -> Option<Move> {
    search(pos, side, config).best_move
}
