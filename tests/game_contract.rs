//! Tests of the `Game` facade as a front end would drive it.
//!
//! This suite covers:
//! - Scripted games ending in mate and stalemate
//! - Castling and en passant gating through the public API
//! - Custom setups and their validation
//! - Take-back and the apply/undo inverse law
//! - The engine's move choice on small depths

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use slotchess::agent::ai::{EvalKind, SearchConfig};
use slotchess::game::{Game, GameStatus};
use slotchess::game_repr::{
    BoardConfig, Color, IllegalMove, Move, MoveOutcome, Piece, Position, SetupError, Square, Type,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = Move::parse(text).unwrap();
        if let Err(err) = game.apply_player_move(mv.from, mv.to, mv.promotion) {
            panic!("{text} refused: {err}");
        }
    }
}

fn attempt(game: &mut Game, text: &str) -> Result<MoveOutcome, IllegalMove> {
    let mv = Move::parse(text).unwrap();
    game.apply_player_move(mv.from, mv.to, mv.promotion)
}

#[test]
fn test_scholars_mate() {
    init();
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5", "f1c4", "f8c5", "d1h5", "b8c6", "h5f7"]);

    assert!(game.is_in_check(Color::Black));
    assert!(game.is_checkmate(Color::Black));
    assert!(!game.is_stalemate());
    assert!(game.legal_moves(Color::Black).is_empty());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    let last = game.position().history().last().unwrap();
    assert!(last.gives_check());
    assert!(last.is_capture());
}

#[test]
fn test_stalemate_is_not_mate() {
    init();
    let mut game = Game::from_fen("k7/8/1Q6/8/8/8/8/7K b").unwrap();
    assert!(game.is_stalemate());
    assert!(!game.is_checkmate(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn test_castling_gating() {
    init();
    let mut free = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w").unwrap();
    assert_eq!(attempt(&mut free, "e1g1"), Ok(MoveOutcome::Applied));
    assert_eq!(free.position().piece_at(sq("f1")), Some(Piece::new(Color::White, Type::Rook)));

    let mut through = Game::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w").unwrap();
    assert_eq!(attempt(&mut through, "e1g1"), Err(IllegalMove::CastlesThroughCheck));
    assert_eq!(attempt(&mut through, "e1c1"), Ok(MoveOutcome::Applied));

    let mut checked = Game::from_fen("4k3/4r3/8/8/8/8/8/R3K2R w").unwrap();
    assert_eq!(attempt(&mut checked, "e1g1"), Err(IllegalMove::CastlesOutOfCheck));

    // Rook goes out and back: squares are empty again but the right is gone
    let mut moved = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w").unwrap();
    play(&mut moved, &["h1h2", "e8d8", "h2h1", "d8e8"]);
    assert!(matches!(attempt(&mut moved, "e1g1"), Err(IllegalMove::Mechanical(_))));
    assert_eq!(attempt(&mut moved, "e1c1"), Ok(MoveOutcome::Applied));
}

#[test]
fn test_en_passant_window() {
    init();
    let fen = "4k3/3p3p/8/4P3/8/8/7P/4K3";

    let mut early = Game::from_fen(&format!("{fen} w")).unwrap();
    assert!(matches!(attempt(&mut early, "e5d6"), Err(IllegalMove::Mechanical(_))));

    let mut just_in_time = Game::from_fen(&format!("{fen} b")).unwrap();
    play(&mut just_in_time, &["d7d5"]);
    assert_eq!(attempt(&mut just_in_time, "e5d6"), Ok(MoveOutcome::Applied));
    assert!(just_in_time.position().is_empty(sq("d5")));

    let mut late = Game::from_fen(&format!("{fen} b")).unwrap();
    play(&mut late, &["d7d5", "h2h3", "h7h6"]);
    assert!(matches!(attempt(&mut late, "e5d6"), Err(IllegalMove::Mechanical(_))));
}

#[test]
fn test_refused_move_leaves_game_untouched() {
    init();
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5"]);
    let before = game.position().clone();

    assert_eq!(attempt(&mut game, "e3e4"), Err(IllegalMove::NoPiece(sq("e3"))));
    assert!(matches!(attempt(&mut game, "e4e6"), Err(IllegalMove::Mechanical(_))));
    assert_eq!(game.position(), &before);
    assert_eq!(game.to_move(), Color::White);
}

#[test]
fn test_pinned_piece_cannot_move() {
    init();
    let mut game = Game::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w").unwrap();
    assert!(matches!(attempt(&mut game, "e2d3"), Err(IllegalMove::LeavesKingInCheck(_))));
}

#[test]
fn test_custom_setup() {
    init();
    let config = BoardConfig::from_rows(&[
        "....k...",
        "........",
        "........",
        "..QQ....",
        "........",
        "........",
        "........",
        "....K...",
    ])
    .unwrap();
    let mut game = Game::setup(&config).unwrap();
    assert!(game.position().is_consistent());
    assert!(!game.legal_moves(Color::White).is_empty());

    let mut two_kings = BoardConfig::standard();
    two_kings.place(sq("e4"), Piece::new(Color::White, Type::King));
    assert_eq!(
        Game::setup(&two_kings).unwrap_err(),
        SetupError::KingCount {
            color: Color::White,
            count: 2
        }
    );

    let mut no_black_king = BoardConfig::standard();
    no_black_king.clear(sq("e8"));
    assert!(matches!(
        Game::setup(&no_black_king),
        Err(SetupError::KingCount {
            color: Color::Black,
            count: 0
        })
    ));
}

#[test]
fn test_legal_moves_is_idempotent() {
    init();
    let mut game = Game::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w").unwrap();
    let first = game.legal_moves(Color::White);
    let second = game.legal_moves(Color::White);
    assert_eq!(first.len(), 48);
    assert_eq!(first, second);
}

#[test]
fn test_apply_undo_inverse_along_random_games() {
    init();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..4 {
        let mut position = Position::standard();
        let mut side = Color::White;
        for _ in 0..80 {
            let moves = position.legal_moves(side);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            let before = position.clone();
            assert!(position.try_move(side, mv).is_applied());
            assert!(!position.is_in_check(side), "{mv} left {side} in check");
            position.assert_consistent();
            position.undo();
            assert_eq!(position, before, "undo of {mv} did not restore the position");

            assert!(position.try_move(side, mv).is_applied());
            side = side.opposite();
        }
    }
}

#[test]
fn test_engine_takes_hanging_queen() {
    init();
    let mut game = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w").unwrap();
    let config = SearchConfig::new(2, EvalKind::Simple)
        .with_endgame_extension(0)
        .with_seed(11);
    assert_eq!(game.choose_computer_move(Color::White, &config), Move::parse("d2d5"));
    assert_eq!(game.ply(), 0);
}

#[test]
fn test_selfplay_reaches_sane_states() {
    init();
    let mut game = Game::new();
    let config = SearchConfig::new(1, EvalKind::Rich).with_seed(3);
    for _ in 0..20 {
        if game.status().is_over() {
            break;
        }
        let side = game.to_move();
        assert!(game.play_computer_move(&config).is_some());
        assert!(!game.is_in_check(side));
        assert_eq!(game.to_move(), side.opposite());
    }
    game.position().assert_consistent();
}
