// Tests for the negamax search and root move choice

use std::collections::HashSet;
use std::time::Duration;

use crate::agent::ai::config::{EvalKind, SearchConfig};
use crate::agent::ai::evaluation::{game_phase, Evaluator, GamePhase};
use crate::agent::ai::negamax::{
    is_mate_score, mate_distance, terminal_score, DRAW_SCORE, MATE_SCORE, MIN_SCORE, SEARCH_PROMOTIONS,
};
use crate::agent::ai::search::{choose_move, search};
use crate::game_repr::{Color, Move, MoveList, Position, Type};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn simple(depth: u8) -> SearchConfig {
    SearchConfig::new(depth, EvalKind::Simple)
        .with_endgame_extension(0)
        .with_seed(1)
}

#[test]
fn test_captures_hanging_queen() {
    let mut p = pos("4k3/8/8/3q4/8/8/3R4/4K3");
    let best = choose_move(&mut p, Color::White, &simple(2));
    assert_eq!(best, Move::parse("d2d5"));
}

#[test]
fn test_black_captures_hanging_queen() {
    let mut p = pos("4k3/3r4/8/8/3Q4/8/8/4K3");
    let best = choose_move(&mut p, Color::Black, &simple(2));
    assert_eq!(best, Move::parse("d7d4"));
}

#[test]
fn test_finds_mate_in_one() {
    let mut p = pos("6k1/5ppp/8/8/8/8/5PPP/R5K1");
    let result = search(&mut p, Color::White, &SearchConfig::new(2, EvalKind::Rich).with_seed(3));

    assert_eq!(result.best_move, Move::parse("a1a8"));
    assert!(is_mate_score(result.score), "Expected mate score, got {}", result.score);
    assert_eq!(mate_distance(result.score), Some(1));
}

#[test]
fn test_prefers_the_fastest_mate() {
    // Qa8 and Qg7 mate at once; plenty of slower mates exist too
    let mut p = pos("7k/8/6K1/8/8/8/8/Q7");
    let result = search(&mut p, Color::White, &simple(4).with_seed(8));

    assert_eq!(mate_distance(result.score), Some(1));
    let mv = result.best_move.unwrap();
    assert!(p.try_move(Color::White, mv).is_applied());
    assert!(p.is_checkmate(Color::Black), "{mv} should mate");
}

/// Whether `side` to move has a move that mates at once.
fn has_mate_in_one(p: &mut Position, side: Color) -> bool {
    p.legal_moves(side).into_iter().any(|mv| {
        assert!(p.try_move(side, mv).is_applied());
        let mate = p.is_checkmate(side.opposite());
        p.unmake();
        mate
    })
}

#[test]
fn test_losing_side_survives_longest() {
    // Black is lost; most rook moves allow Ra8 mate at once
    let mut p = pos("7k/8/6K1/8/8/8/1r6/R7");
    assert!(p.try_move(Color::Black, Move::parse("b2h2").unwrap()).is_applied());
    assert!(has_mate_in_one(&mut p, Color::White));
    p.unmake();

    let result = search(&mut p, Color::Black, &simple(4).with_seed(2));
    assert!(result.score > -(MATE_SCORE - 2), "Walked into mate: {}", result.score);

    let mv = result.best_move.unwrap();
    assert!(p.try_move(Color::Black, mv).is_applied());
    assert!(!has_mate_in_one(&mut p, Color::White), "{mv} allows mate in one");
}

/// Plain negamax over every legal move, no pruning. Mirrors the engine's
/// leaf and terminal rules so the values must agree exactly.
fn full_width(p: &mut Position, eval: &Evaluator, phase: GamePhase, side: Color, depth: u8, ply: u32) -> i32 {
    let mut moves = MoveList::new();
    p.legal_moves_with(side, &SEARCH_PROMOTIONS, &mut moves);
    if moves.is_empty() {
        return terminal_score(p.is_in_check(side), ply);
    }
    if depth == 0 {
        return eval.evaluate(p, side, phase);
    }

    let mut best = MIN_SCORE;
    for mv in moves {
        assert!(p.try_move(side, mv).is_applied());
        best = best.max(-full_width(p, eval, phase, side.opposite(), depth - 1, ply + 1));
        p.unmake();
    }
    best
}

#[test]
fn test_alpha_beta_matches_full_width_search() {
    let eval = Evaluator::new(EvalKind::Rich);
    for fen in [
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "6k1/5ppp/8/8/8/8/5PPP/R5K1",
        "4k3/8/8/3q4/8/8/3R4/4K3",
        "8/P6k/8/8/8/8/8/K7",
    ] {
        for side in [Color::White, Color::Black] {
            for depth in 1..=3u8 {
                let mut p = pos(fen);
                let mut roots = MoveList::new();
                p.legal_moves_with(side, &SEARCH_PROMOTIONS, &mut roots);

                let mut scored = Vec::new();
                for &mv in &roots {
                    assert!(p.try_move(side, mv).is_applied());
                    let phase = game_phase(&p);
                    scored.push((mv, -full_width(&mut p, &eval, phase, side.opposite(), depth - 1, 1)));
                    p.unmake();
                }
                let best = scored.iter().map(|&(_, score)| score).max().unwrap();

                for seed in 0..3 {
                    let config = SearchConfig::new(depth, EvalKind::Rich)
                        .with_endgame_extension(0)
                        .with_seed(seed);
                    let result = search(&mut p, side, &config);
                    assert_eq!(result.score, best, "{fen} {side} depth {depth}");

                    let chosen = result.best_move.unwrap();
                    assert!(
                        scored.iter().any(|&(mv, score)| mv == chosen && score == best),
                        "{fen} {side} depth {depth}: {chosen} is not among the best moves"
                    );
                }
            }
        }
    }
}

#[test]
fn test_mated_side_has_no_move() {
    let mut p = Position::standard();
    for (side, text) in [
        (Color::White, "f2f3"),
        (Color::Black, "e7e5"),
        (Color::White, "g2g4"),
        (Color::Black, "d8h4"),
    ] {
        assert!(p.try_move(side, Move::parse(text).unwrap()).is_applied());
    }

    let result = search(&mut p, Color::White, &simple(3));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn test_stalemated_side_has_no_move() {
    let mut p = pos("k7/8/1Q6/8/8/8/8/7K");
    let result = search(&mut p, Color::Black, &simple(2));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_promotes_to_queen() {
    let mut p = pos("8/P6k/8/8/8/8/8/K7");
    let best = choose_move(&mut p, Color::White, &simple(2)).unwrap();
    assert_eq!(best.from, crate::game_repr::Square::parse("a7").unwrap());
    assert_eq!(best.promotion, Some(Type::Queen));
}

#[test]
fn test_search_leaves_position_untouched() {
    let mut p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    let before = p.clone();
    let result = search(&mut p, Color::White, &SearchConfig::new(2, EvalKind::Rich).with_seed(5));

    assert!(result.best_move.is_some());
    assert!(result.nodes_searched > 0);
    assert_eq!(p, before);
}

#[test]
fn test_seeded_tie_break_is_reproducible() {
    let first = choose_move(&mut Position::standard(), Color::White, &simple(1).with_seed(42));
    let second = choose_move(&mut Position::standard(), Color::White, &simple(1).with_seed(42));
    assert_eq!(first, second);
}

#[test]
fn test_tie_break_spreads_over_equal_moves() {
    // Every opening move is worth zero material at depth 1
    let chosen: HashSet<Move> = (0..16)
        .filter_map(|seed| choose_move(&mut Position::standard(), Color::White, &simple(1).with_seed(seed)))
        .collect();
    assert!(chosen.len() > 1, "Equal moves should not always resolve to the same one");
}

#[test]
fn test_time_limit_keeps_completed_iteration() {
    let mut p = Position::standard();
    let config = SearchConfig::new(10, EvalKind::Rich)
        .with_time_limit(Duration::from_millis(200))
        .with_seed(9);
    let result = search(&mut p, Color::White, &config);

    assert!(result.best_move.is_some());
    assert!(result.depth >= 1);
    assert!(result.depth < 10);
    assert_eq!(p, Position::standard());
}

#[test]
fn test_zero_budget_falls_back_to_a_legal_move() {
    let mut p = Position::standard();
    let config = SearchConfig::default().with_time_limit(Duration::ZERO);
    let result = search(&mut p, Color::White, &config);

    assert_eq!(result.depth, 0);
    let mv = result.best_move.unwrap();
    assert!(p.legal_moves(Color::White).contains(&mv));
}
