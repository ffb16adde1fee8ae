// Negamax Search with Alpha-Beta Pruning
//
// One recursive function serves both sides: every value is from the point of
// view of the side to move at that node, and a child's value is negated on the
// way up. Cutoffs are fail-hard: a node never returns outside [alpha, beta].
//
// Candidate moves go through the legality gate like any real move; a rejected
// candidate is skipped, so it can never win a comparison.

use std::time::Instant;

use crate::game_repr::{Color, MoveList, Position, Type};
use super::evaluation::{Evaluator, GamePhase};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Score of a stalemate.
pub const DRAW_SCORE: i32 = 0;

/// Minimum score (worse than any mate)
pub const MIN_SCORE: i32 = -MATE_SCORE - 100;

/// Maximum score (better than any mate)
pub const MAX_SCORE: i32 = MATE_SCORE + 100;

/// Promotion kinds the search branches on. Rook and bishop add no movement
/// shape the queen lacks.
pub const SEARCH_PROMOTIONS: [Type; 2] = [Type::Queen, Type::Knight];

/// Checks if a score represents a mate
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE_SCORE - 1000
}

/// Plies until mate for a mate score; positive when the side to move mates.
pub fn mate_distance(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }
    Some(if score > 0 { MATE_SCORE - score } else { -(MATE_SCORE + score) })
}

/// Value of a node whose side to move has no legal move, `ply` plies below
/// the root.
pub fn terminal_score(in_check: bool, ply: u32) -> i32 {
    if in_check {
        -(MATE_SCORE - ply as i32)
    } else {
        DRAW_SCORE
    }
}

/// State shared by every node of one search.
pub struct SearchContext {
    pub evaluator: Evaluator,
    /// Phase of the current root candidate; fixed for its whole subtree.
    pub phase: GamePhase,
    pub deadline: Option<Instant>,
    pub nodes: u64,
    pub aborted: bool,
}

impl SearchContext {
    pub fn new(evaluator: Evaluator, deadline: Option<Instant>) -> Self {
        Self {
            evaluator,
            phase: GamePhase::Middlegame,
            deadline,
            nodes: 0,
            aborted: false,
        }
    }

    fn out_of_time(&mut self) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.aborted = true;
            }
        }
        self.aborted
    }
}

/// Negamax search with alpha-beta pruning
///
/// Called after a move has been applied; `side` is the side to move at this
/// node and `ply` its distance from the root. Returns the node's value from
/// `side`'s perspective, or 0 once the search has been aborted (the caller
/// must then discard it).
pub fn negamax(
    pos: &mut Position,
    ctx: &mut SearchContext,
    side: Color,
    depth: u8,
    ply: u32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    ctx.nodes += 1;
    if ctx.out_of_time() {
        return 0;
    }

    // Leaf: terminal positions still score as mate or stalemate
    if depth == 0 {
        if !pos.has_legal_move(side) {
            return terminal_score(pos.is_in_check(side), ply);
        }
        return ctx.evaluator.evaluate(pos, side, ctx.phase);
    }

    let mut candidates = MoveList::new();
    pos.pseudo_legal_moves_into(side, &SEARCH_PROMOTIONS, &mut candidates);

    let mut any_legal = false;
    for mv in candidates {
        if !pos.try_move(side, mv).is_applied() {
            continue;
        }
        any_legal = true;

        let score = -negamax(pos, ctx, side.opposite(), depth - 1, ply + 1, -beta, -alpha);
        pos.unmake();

        if ctx.aborted {
            return 0;
        }
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    if !any_legal {
        return terminal_score(pos.is_in_check(side), ply);
    }
    alpha
}
