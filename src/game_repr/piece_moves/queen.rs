use super::{MoveList, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_repr::{Position, Square};

impl Position {
    pub(crate) fn validate_queen(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        self.queen_reaches(state.square(), to) && self.can_land(state.color, to)
    }

    pub(crate) fn queen_reaches(&self, from: Square, to: Square) -> bool {
        self.rook_reaches(from, to) || self.bishop_reaches(from, to)
    }

    pub fn queen_moves_into(&self, slot: usize, moves: &mut MoveList) {
        self.slide_into(slot, &ROOK_DIRECTIONS, moves);
        self.slide_into(slot, &BISHOP_DIRECTIONS, moves);
    }
}
