use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Position from a FEN placement; panics on a bad configuration.
pub fn position(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|err| panic!("bad test position {fen}: {err}"))
}

pub fn sq(name: &str) -> Square {
    Square::parse(name).unwrap_or_else(|| panic!("bad square {name}"))
}

pub fn mv(text: &str) -> Move {
    Move::parse(text).unwrap_or_else(|| panic!("bad move {text}"))
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Plays a sequence of coordinate moves, alternating sides from `side`.
pub fn play(pos: &mut Position, mut side: Color, moves: &[&str]) -> Color {
    for text in moves {
        let outcome = pos.try_move(side, mv(text));
        assert_eq!(outcome, MoveOutcome::Applied, "{text} should be legal for {side}");
        side = side.opposite();
    }
    side
}

// ==================== TEST MODULES ====================

mod perft;
