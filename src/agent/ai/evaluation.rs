// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use crate::game_repr::{Color, Position, Square, Type};
use super::config::EvalKind;

// Material values in centipawns
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 300;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// At most this many queens, rooks, bishops and knights left: endgame.
const ENDGAME_MAX_PIECES: usize = 6;
/// At least this many of them still on their home ranks: opening.
const OPENING_MIN_HOME_PIECES: usize = 11;

const CENTER: [(u8, u8); 4] = [(3, 3), (4, 3), (3, 4), (4, 4)];

/// Coarse stage of the game, deciding which positional terms apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

/// Weights of the positional terms. All in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub center_occupancy: i32,
    pub center_attack: i32,
    pub minor_development: i32,
    pub castled: i32,
    pub pawn_shield: i32,
    pub rook_open_file: i32,
    pub rook_semi_open_file: i32,
    pub passed_pawn: i32,
    pub pawn_advance: i32,
    pub king_centralization: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            center_occupancy: 20,
            center_attack: 5,
            minor_development: 15,
            castled: 40,
            pawn_shield: 15,
            rook_open_file: 25,
            rook_semi_open_file: 12,
            passed_pawn: 40,
            pawn_advance: 10,
            king_centralization: 10,
        }
    }
}

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0, // never captured
        Type::None => 0,
    }
}

fn is_officer(kind: Type) -> bool {
    matches!(kind, Type::Queen | Type::Rook | Type::Bishop | Type::Knight)
}

/// Classifies the position from piece counts and back-rank occupancy.
pub fn game_phase(pos: &Position) -> GamePhase {
    let mut officers = 0;
    let mut at_home = 0;
    for color in [Color::White, Color::Black] {
        for slot in pos.pieces(color) {
            if is_officer(pos.kind(slot)) {
                officers += 1;
                if pos.slot(slot).rank == color.home_rank() {
                    at_home += 1;
                }
            }
        }
    }

    if officers <= ENDGAME_MAX_PIECES {
        GamePhase::Endgame
    } else if at_home >= OPENING_MIN_HOME_PIECES {
        GamePhase::Opening
    } else {
        GamePhase::Middlegame
    }
}

/// White material minus black material.
pub fn material_balance(pos: &Position) -> i32 {
    let side = |color: Color| -> i32 { pos.pieces(color).map(|slot| piece_value(pos.kind(slot))).sum() };
    side(Color::White) - side(Color::Black)
}

/// Static evaluator used at the leaves of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    pub kind: EvalKind,
    pub weights: EvalWeights,
}

impl Evaluator {
    pub fn new(kind: EvalKind) -> Self {
        Self {
            kind,
            weights: EvalWeights::default(),
        }
    }

    pub fn with_weights(kind: EvalKind, weights: EvalWeights) -> Self {
        Self { kind, weights }
    }

    /// Score from the perspective of `side`. `phase` selects the positional
    /// terms and is ignored by the simple evaluator.
    pub fn evaluate(&self, pos: &Position, side: Color, phase: GamePhase) -> i32 {
        let mut score = material_balance(pos);
        if self.kind == EvalKind::Rich {
            score += self.positional(pos, Color::White, phase) - self.positional(pos, Color::Black, phase);
        }
        match side {
            Color::White => score,
            Color::Black => -score,
        }
    }

    /// Positional bonus for `color` alone.
    pub fn positional(&self, pos: &Position, color: Color, phase: GamePhase) -> i32 {
        let w = &self.weights;
        match phase {
            GamePhase::Opening => {
                center_control(pos, color, w) + development(pos, color, w) + castled(pos, color, w)
            }
            GamePhase::Middlegame => {
                king_safety(pos, color, w)
                    + rook_files(pos, color, w)
                    + pawn_structure(pos, color, w)
            }
            GamePhase::Endgame => king_centralization(pos, color, w),
        }
    }
}

fn center_control(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let mut score = 0;
    for (file, rank) in CENTER {
        let square = Square::new(file, rank);
        if pos.color_at(square) == Some(color) {
            score += w.center_occupancy;
        }
        let attackers = pos
            .pieces(color)
            .filter(|&slot| pos.attacks_square(slot, square))
            .count() as i32;
        score += attackers * w.center_attack;
    }
    score
}

fn development(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let developed = pos
        .pieces(color)
        .filter(|&slot| matches!(pos.kind(slot), Type::Knight | Type::Bishop))
        .filter(|&slot| pos.slot(slot).rank != color.home_rank())
        .count() as i32;
    developed * w.minor_development
}

fn castled(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let king = pos.king_square(color);
    let tucked_away = king.rank() == color.home_rank() && matches!(king.file(), 1 | 2 | 6 | 7);
    if tucked_away {
        w.castled
    } else {
        0
    }
}

/// Evaluate king safety based on pawn shield
fn king_safety(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let king = pos.king_square(color);
    let forward = color.forward();
    let mut shield = 0;

    // Two ranks in front of the king, on its file and both neighbours
    for rank_step in 1..=2 {
        for file_offset in -1..=1 {
            let Some(square) = king.offset(file_offset, forward * rank_step) else {
                continue;
            };
            if pos.piece_at(square).map_or(false, |p| p.is(color) && p.piece_type == Type::Pawn) {
                shield += w.pawn_shield;
            }
        }
    }
    shield
}

fn pawn_files(pos: &Position, color: Color) -> [bool; 8] {
    let mut files = [false; 8];
    for slot in pos.pieces(color) {
        if pos.kind(slot) == Type::Pawn {
            files[pos.slot(slot).file as usize] = true;
        }
    }
    files
}

/// Rooks on open and semi-open files
fn rook_files(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let own = pawn_files(pos, color);
    let enemy = pawn_files(pos, color.opposite());
    pos.pieces(color)
        .filter(|&slot| pos.kind(slot) == Type::Rook)
        .map(|slot| {
            let file = pos.slot(slot).file as usize;
            match (own[file], enemy[file]) {
                (false, false) => w.rook_open_file,
                (false, true) => w.rook_semi_open_file,
                _ => 0,
            }
        })
        .sum()
}

/// Passed pawns and pawns advanced past the centre line
fn pawn_structure(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let mut score = 0;
    for slot in pos.pieces(color) {
        if pos.kind(slot) != Type::Pawn {
            continue;
        }
        let square = pos.slot(slot).square();
        if is_passed_pawn(pos, square, color) {
            score += w.passed_pawn;
        }
        let advanced = match color {
            Color::White => square.rank() >= 4,
            Color::Black => square.rank() <= 3,
        };
        if advanced {
            score += w.pawn_advance;
        }
    }
    score
}

/// Check if a pawn is passed (no enemy pawns can stop it)
pub fn is_passed_pawn(pos: &Position, square: Square, color: Color) -> bool {
    let enemy = color.opposite();
    let ahead = |rank: u8| match color {
        Color::White => rank > square.rank(),
        Color::Black => rank < square.rank(),
    };

    !pos.pieces(enemy).any(|slot| {
        let state = pos.slot(slot);
        pos.kind(slot) == Type::Pawn && ahead(state.rank) && state.file.abs_diff(square.file()) <= 1
    })
}

fn king_centralization(pos: &Position, color: Color, w: &EvalWeights) -> i32 {
    let king = pos.king_square(color);
    // Doubled distance to the centre point, 2 for d4..e5 up to 14 in a corner
    let distance = (2 * king.file() as i32 - 7).abs() + (2 * king.rank() as i32 - 7).abs();
    (14 - distance) / 2 * w.king_centralization
}
