use super::{Color, Position, Square};

impl Position {
    /// Whether any in-play piece of `by` attacks `square`. Geometry only; it
    /// never consults the legality gate.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by).any(|slot| self.attacks_square(slot, square))
    }

    /// A king that is off the board counts as in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.slots[color.king_slot()];
        if !king.in_play {
            return true;
        }
        self.is_square_attacked(king.square(), color.opposite())
    }
}
