pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Color, Move, Position, Square, Type};

/// Move buffer sized for one side's moves without spilling in normal play.
pub type MoveList = SmallVec<[Move; 64]>;

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Whether `slot` may move to `to` by its own movement rules, ignoring
    /// whether the mover's king ends up in check.
    pub fn is_mechanically_valid(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        if !state.in_play || state.square() == to {
            return false;
        }
        match self.kinds[slot] {
            Type::Pawn => self.validate_pawn(slot, to),
            Type::Knight => self.validate_knight(slot, to),
            Type::Bishop => self.validate_bishop(slot, to),
            Type::Rook => self.validate_rook(slot, to),
            Type::Queen => self.validate_queen(slot, to),
            Type::King => self.validate_king(slot, to),
            Type::None => false,
        }
    }

    /// Appends every pseudo-legal move of `slot`. A pawn reaching the last
    /// rank yields one move per kind in `promotions`.
    pub fn pseudo_moves_into(&self, slot: usize, promotions: &[Type], moves: &mut MoveList) {
        if !self.slots[slot].in_play {
            return;
        }
        match self.kinds[slot] {
            Type::Pawn => self.pawn_moves_into(slot, promotions, moves),
            Type::Knight => self.knight_moves_into(slot, moves),
            Type::Bishop => self.bishop_moves_into(slot, moves),
            Type::Rook => self.rook_moves_into(slot, moves),
            Type::Queen => self.queen_moves_into(slot, moves),
            Type::King => self.king_moves_into(slot, moves),
            Type::None => {}
        }
    }

    /// Pseudo-legal moves for every piece of `side`.
    pub fn pseudo_legal_moves_into(&self, side: Color, promotions: &[Type], moves: &mut MoveList) {
        for slot in side.slots() {
            self.pseudo_moves_into(slot, promotions, moves);
        }
    }

    /// Whether `slot` attacks `target` by geometry alone. Castling never
    /// attacks and pawns only attack diagonally forward.
    pub fn attacks_square(&self, slot: usize, target: Square) -> bool {
        let state = self.slots[slot];
        if !state.in_play || state.square() == target {
            return false;
        }
        match self.kinds[slot] {
            Type::Pawn => self.pawn_attacks(slot, target),
            Type::Knight => knight_reaches(state.square(), target),
            Type::Bishop => self.bishop_reaches(state.square(), target),
            Type::Rook => self.rook_reaches(state.square(), target),
            Type::Queen => self.queen_reaches(state.square(), target),
            Type::King => king_reaches(state.square(), target),
            Type::None => false,
        }
    }

    /// Empty or held by the other colour. A king is never a capture target.
    pub(crate) fn can_land(&self, color: Color, square: Square) -> bool {
        match self.slot_at(square) {
            None => true,
            Some(target) => self.slots[target].color != color && self.kinds[target] != Type::King,
        }
    }

    /// Walks each ray from `slot` until the edge or the first occupied
    /// square, which is included when it can be captured.
    pub(crate) fn slide_into(&self, slot: usize, directions: &[(i8, i8)], moves: &mut MoveList) {
        let from = self.slots[slot].square();
        let color = self.slots[slot].color;
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                if self.is_empty(next) {
                    moves.push(Move::new(from, next));
                } else {
                    if self.can_land(color, next) {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
                current = next;
            }
        }
    }

    /// True when `from` and `to` share a line in `directions` and every
    /// square strictly between them is empty.
    pub(crate) fn line_clear(&self, from: Square, to: Square, directions: &[(i8, i8)]) -> bool {
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;
        let step = (df.signum(), dr.signum());
        let on_line = (df == 0 || dr == 0 || df.abs() == dr.abs()) && (df, dr) != (0, 0);
        if !on_line || !directions.contains(&step) {
            return false;
        }

        let mut current = from;
        while let Some(next) = current.offset(step.0, step.1) {
            if next == to {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            current = next;
        }
        false
    }
}

pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    let df = from.file().abs_diff(to.file());
    let dr = from.rank().abs_diff(to.rank());
    (df == 1 && dr == 2) || (df == 2 && dr == 1)
}

pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
    let df = from.file().abs_diff(to.file());
    let dr = from.rank().abs_diff(to.rank());
    df <= 1 && dr <= 1 && (df, dr) != (0, 0)
}
