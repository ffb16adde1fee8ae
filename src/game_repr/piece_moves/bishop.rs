use super::{MoveList, BISHOP_DIRECTIONS};
use crate::game_repr::{Position, Square};

impl Position {
    pub(crate) fn validate_bishop(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        self.bishop_reaches(state.square(), to) && self.can_land(state.color, to)
    }

    pub(crate) fn bishop_reaches(&self, from: Square, to: Square) -> bool {
        self.line_clear(from, to, &BISHOP_DIRECTIONS)
    }

    pub fn bishop_moves_into(&self, slot: usize, moves: &mut MoveList) {
        self.slide_into(slot, &BISHOP_DIRECTIONS, moves);
    }
}
