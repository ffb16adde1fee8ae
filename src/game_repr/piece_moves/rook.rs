use super::{MoveList, ROOK_DIRECTIONS};
use crate::game_repr::{Position, Square};

impl Position {
    pub(crate) fn validate_rook(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        self.rook_reaches(state.square(), to) && self.can_land(state.color, to)
    }

    pub(crate) fn rook_reaches(&self, from: Square, to: Square) -> bool {
        self.line_clear(from, to, &ROOK_DIRECTIONS)
    }

    pub fn rook_moves_into(&self, slot: usize, moves: &mut MoveList) {
        self.slide_into(slot, &ROOK_DIRECTIONS, moves);
    }
}
