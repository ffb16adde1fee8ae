use super::MoveList;
use crate::game_repr::{Move, Position, Square, Type};

impl Position {
    pub(crate) fn validate_pawn(&self, slot: usize, to: Square) -> bool {
        let state = self.slots[slot];
        let color = state.color;
        let from = state.square();
        let forward = color.forward();
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;

        match (df, dr) {
            (0, r) if r == forward => self.is_empty(to),
            (0, r) if r == 2 * forward => {
                from.rank() == color.pawn_start_rank()
                    && from.offset(0, forward).map_or(false, |mid| self.is_empty(mid))
                    && self.is_empty(to)
            }
            (-1 | 1, r) if r == forward => {
                if self.is_empty(to) {
                    self.en_passant_victim(slot, to).is_some()
                } else {
                    self.can_land(color, to)
                }
            }
            _ => false,
        }
    }

    /// The pawn `slot` would take by moving diagonally to the empty square
    /// `to`, if that is an en passant capture.
    ///
    /// Only the most recent history entry matters: it must be an opposing
    /// pawn's two-square advance that landed beside the mover.
    pub(crate) fn en_passant_victim(&self, slot: usize, to: Square) -> Option<usize> {
        let state = self.slots[slot];
        let from = state.square();
        if from.rank() != state.color.en_passant_rank() {
            return None;
        }

        let last = self.history.last()?;
        let victim = last.slot();
        let now = self.slots[victim];
        let double_step = self.kinds[victim] == Type::Pawn
            && now.color != state.color
            && now.in_play
            && last.before.rank.abs_diff(now.rank) == 2
            && now.square() == Square::new(to.file(), from.rank());
        double_step.then_some(victim)
    }

    pub fn pawn_moves_into(&self, slot: usize, promotions: &[Type], moves: &mut MoveList) {
        let state = self.slots[slot];
        let color = state.color;
        let from = state.square();
        let forward = color.forward();

        let push = |to: Square, moves: &mut MoveList| {
            if to.rank() == color.promotion_rank() {
                for &kind in promotions {
                    moves.push(Move::promoting(from, to, kind));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        };

        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                push(one, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, forward) {
                        if self.is_empty(two) {
                            push(two, moves);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = from.offset(df, forward) {
                let capture = if self.is_empty(to) {
                    self.en_passant_victim(slot, to).is_some()
                } else {
                    self.can_land(color, to)
                };
                if capture {
                    push(to, moves);
                }
            }
        }
    }

    pub(crate) fn pawn_attacks(&self, slot: usize, target: Square) -> bool {
        let state = self.slots[slot];
        let from = state.square();
        target.rank() as i8 - from.rank() as i8 == state.color.forward()
            && from.file().abs_diff(target.file()) == 1
    }
}
