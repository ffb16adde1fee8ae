use super::{Color, Square, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub fn rook_file(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on after castling.
    pub fn rook_target_file(&self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub fn king_target_file(&self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Files that must be empty between king and rook.
    pub fn between_files(&self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }
}

/// The six pieces whose first departure from home costs a castling right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RightsPiece {
    WhiteKing,
    BlackKing,
    WhiteKingsideRook,
    WhiteQueensideRook,
    BlackKingsideRook,
    BlackQueensideRook,
}

impl RightsPiece {
    pub const ALL: [RightsPiece; 6] = [
        RightsPiece::WhiteKing,
        RightsPiece::BlackKing,
        RightsPiece::WhiteKingsideRook,
        RightsPiece::WhiteQueensideRook,
        RightsPiece::BlackKingsideRook,
        RightsPiece::BlackQueensideRook,
    ];

    pub fn king(color: Color) -> Self {
        match color {
            Color::White => RightsPiece::WhiteKing,
            Color::Black => RightsPiece::BlackKing,
        }
    }

    pub fn rook(color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => RightsPiece::WhiteKingsideRook,
            (Color::White, CastleSide::Queenside) => RightsPiece::WhiteQueensideRook,
            (Color::Black, CastleSide::Kingside) => RightsPiece::BlackKingsideRook,
            (Color::Black, CastleSide::Queenside) => RightsPiece::BlackQueensideRook,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RightsPiece::WhiteKing
            | RightsPiece::WhiteKingsideRook
            | RightsPiece::WhiteQueensideRook => Color::White,
            _ => Color::Black,
        }
    }

    pub fn kind(&self) -> Type {
        match self {
            RightsPiece::WhiteKing | RightsPiece::BlackKing => Type::King,
            _ => Type::Rook,
        }
    }

    pub fn home(&self) -> Square {
        let rank = self.color().home_rank();
        let file = match self {
            RightsPiece::WhiteKing | RightsPiece::BlackKing => 4,
            RightsPiece::WhiteKingsideRook | RightsPiece::BlackKingsideRook => 7,
            RightsPiece::WhiteQueensideRook | RightsPiece::BlackQueensideRook => 0,
        };
        Square::new(file, rank)
    }

    /// The rights piece a `kind` of `color` standing on `square` would be.
    pub fn from_home(color: Color, kind: Type, square: Square) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.color() == color && p.kind() == kind && p.home() == square)
    }

    pub fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Counts how many times each king and rook has left its home square.
///
/// A right is available while both the king's and the rook's counters are
/// zero. Undo decrements instead of clearing a flag, so taking back a move
/// restores exactly the rights that existed before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    times_moved: [u16; 6],
}

impl CastlingRights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_moved(&mut self, piece: RightsPiece) {
        self.times_moved[piece as usize] += 1;
    }

    pub fn unmark_moved(&mut self, piece: RightsPiece) {
        let count = &mut self.times_moved[piece as usize];
        assert!(*count > 0, "castling rights underflow for {piece:?}");
        *count -= 1;
    }

    pub fn has_moved(&self, piece: RightsPiece) -> bool {
        self.times_moved[piece as usize] > 0
    }

    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.has_moved(RightsPiece::king(color)) && !self.has_moved(RightsPiece::rook(color, side))
    }

    /// Marks every piece in `mask` (see [`RightsPiece::bit`]).
    pub(crate) fn apply_mask(&mut self, mask: u8) {
        for piece in RightsPiece::ALL {
            if mask & piece.bit() != 0 {
                self.mark_moved(piece);
            }
        }
    }

    pub(crate) fn revert_mask(&mut self, mask: u8) {
        for piece in RightsPiece::ALL {
            if mask & piece.bit() != 0 {
                self.unmark_moved(piece);
            }
        }
    }
}
