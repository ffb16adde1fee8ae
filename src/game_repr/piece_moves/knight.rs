use super::{knight_reaches, MoveList};
use crate::game_repr::{Move, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Position {
    pub(crate) fn validate_knight(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        knight_reaches(state.square(), to) && self.can_land(state.color, to)
    }

    pub fn knight_moves_into(&self, slot: usize, moves: &mut MoveList) {
        let state = self.slots[slot];
        let from = state.square();
        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(df, dr) {
                if self.can_land(state.color, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
