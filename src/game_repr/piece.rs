use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Kinds a pawn may turn into.
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    pub fn is_promotion_kind(&self) -> bool {
        matches!(self, Type::Queen | Type::Rook | Type::Bishop | Type::Knight)
    }

    pub fn to_char(&self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'P',
            Type::None => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Slot holding this side's king. Kings never change slot or kind.
    pub fn king_slot(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 16,
        }
    }

    /// The sixteen piece slots owned by this side.
    pub fn slots(&self) -> std::ops::Range<usize> {
        let base = self.king_slot();
        base..base + 16
    }

    pub fn home_rank(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    pub fn pawn_start_rank(&self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    pub fn promotion_rank(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Rank a pawn of this colour must stand on to capture en passant.
    pub fn en_passant_rank(&self) -> u8 {
        match self {
            Self::White => 4,
            Self::Black => 3,
        }
    }

    /// Rank direction pawns of this colour advance in.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A coloured piece, as written in a board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Uppercase is white, lowercase is black.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_uppercase() {
            'K' => Type::King,
            'Q' => Type::Queen,
            'R' => Type::Rook,
            'B' => Type::Bishop,
            'N' => Type::Knight,
            'P' => Type::Pawn,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}

/// A board square; file and rank are both zero-based, a1 is (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8, "square out of range: ({file}, {rank})");
        Self { file, rank }
    }

    pub fn try_new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Parses coordinates such as `e4`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Self::new(file as u8 - b'a', rank as u8 - b'1'))
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::try_new(self.file as i8 + file_delta, self.rank as i8 + rank_delta)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

/// State of one of the 32 logical piece slots.
///
/// A captured piece keeps the coordinates it was taken on, so undoing the
/// capture only has to flip `in_play` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSlot {
    pub color: Color,
    pub in_play: bool,
    pub file: u8,
    pub rank: u8,
}

impl PieceSlot {
    pub fn unused(color: Color) -> Self {
        Self {
            color,
            in_play: false,
            file: 0,
            rank: 0,
        }
    }

    pub fn placed(color: Color, square: Square) -> Self {
        Self {
            color,
            in_play: true,
            file: square.file(),
            rank: square.rank(),
        }
    }

    pub fn square(&self) -> Square {
        Square::new(self.file, self.rank)
    }
}
