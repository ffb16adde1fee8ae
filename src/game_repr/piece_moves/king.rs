use super::{king_reaches, MoveList};
use crate::game_repr::{CastleSide, Move, Position, Square, Type};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Position {
    pub(crate) fn validate_king(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        let from = state.square();
        if king_reaches(from, to) {
            return self.can_land(state.color, to);
        }
        match Self::castle_side_of(from, to) {
            Some(side) => self.castling_open(slot, side),
            None => false,
        }
    }

    /// Which castle a two-file king jump along its rank would be.
    pub(crate) fn castle_side_of(from: Square, to: Square) -> Option<CastleSide> {
        if from.rank() != to.rank() || from.file() != 4 {
            return None;
        }
        match to.file() {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Geometry, emptiness and rights for castling. Attacked squares are
    /// the legality gate's concern.
    pub(crate) fn castling_open(&self, slot: usize, side: CastleSide) -> bool {
        let state = self.slots[slot];
        let color = state.color;
        let rank = color.home_rank();
        if self.kinds[slot] != Type::King || state.square() != Square::new(4, rank) {
            return false;
        }
        if !self.castling.can_castle(color, side) {
            return false;
        }
        let rook_home = Square::new(side.rook_file(), rank);
        let rook_ready = self
            .slot_at(rook_home)
            .map_or(false, |rook| self.kinds[rook] == Type::Rook && self.slots[rook].color == color);
        rook_ready
            && side
                .between_files()
                .iter()
                .all(|&file| self.is_empty(Square::new(file, rank)))
    }

    pub fn king_moves_into(&self, slot: usize, moves: &mut MoveList) {
        let state = self.slots[slot];
        let from = state.square();
        for (df, dr) in KING_OFFSETS {
            if let Some(to) = from.offset(df, dr) {
                if self.can_land(state.color, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if self.castling_open(slot, side) {
                moves.push(Move::new(from, Square::new(side.king_target_file(), from.rank())));
            }
        }
    }
}
