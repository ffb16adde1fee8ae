use log::debug;

use super::*;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Slot offsets inside a colour's 16-slot block, by kind.
/// Layout is K Q R R B B N N P P P P P P P P.
fn home_slots(kind: Type) -> std::ops::Range<usize> {
    match kind {
        Type::King => 0..1,
        Type::Queen => 1..2,
        Type::Rook => 2..4,
        Type::Bishop => 4..6,
        Type::Knight => 6..8,
        Type::Pawn => 8..16,
        Type::None => 0..0,
    }
}

fn kind_limit(kind: Type) -> usize {
    match kind {
        Type::King => 1,
        Type::Queen => 9,
        Type::Rook | Type::Bishop | Type::Knight => 10,
        Type::Pawn => 8,
        Type::None => 0,
    }
}

/// A sparse 8x8 grid of pieces that a game can start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardConfig {
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        let mut config = Self::empty();
        let back = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for (file, kind) in back.into_iter().enumerate() {
            let file = file as u8;
            config.place(Square::new(file, 0), Piece::new(Color::White, kind));
            config.place(Square::new(file, 1), Piece::new(Color::White, Type::Pawn));
            config.place(Square::new(file, 6), Piece::new(Color::Black, Type::Pawn));
            config.place(Square::new(file, 7), Piece::new(Color::Black, kind));
        }
        config
    }

    pub fn place(&mut self, square: Square, piece: Piece) -> &mut Self {
        self.grid[square.file() as usize][square.rank() as usize] = Some(piece);
        self
    }

    pub fn clear(&mut self, square: Square) -> &mut Self {
        self.grid[square.file() as usize][square.rank() as usize] = None;
        self
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.file() as usize][square.rank() as usize]
    }

    /// Builds a configuration from eight rows of eight piece codes, the
    /// eighth rank first. `.` or a space marks an empty square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SetupError> {
        if rows.len() != 8 {
            return Err(SetupError::RankCount(rows.len()));
        }
        let mut config = Self::empty();
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let row = row.as_ref();
            let files = row.chars().count();
            if files != 8 {
                return Err(SetupError::FileCount { rank, files });
            }
            for (file, c) in row.chars().enumerate() {
                match c {
                    '.' | ' ' => {}
                    _ => {
                        let piece = Piece::from_char(c).ok_or(SetupError::UnknownPiece(c))?;
                        config.place(Square::new(file as u8, rank), piece);
                    }
                }
            }
        }
        Ok(config)
    }

    /// Reads the piece-placement field of a FEN string. Any further fields
    /// are ignored here.
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(SetupError::RankCount(ranks.len()));
        }

        let mut config = Self::empty();
        for (i, row) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(SetupError::UnknownPiece(c))?;
                if file >= 8 {
                    return Err(SetupError::FileCount {
                        rank,
                        files: file + 1,
                    });
                }
                config.place(Square::new(file as u8, rank), piece);
                file += 1;
            }
            if file != 8 {
                return Err(SetupError::FileCount { rank, files: file });
            }
        }
        Ok(config)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Rejects configurations that cannot start a game; never repairs them.
    pub fn validate(&self) -> Result<(), SetupError> {
        for color in [Color::White, Color::Black] {
            let count = |kind: Type| {
                self.pieces()
                    .filter(|(_, p)| p.color == color && p.piece_type == kind)
                    .count()
            };

            let kings = count(Type::King);
            if kings != 1 {
                return Err(SetupError::KingCount {
                    color,
                    count: kings,
                });
            }

            for kind in [Type::Queen, Type::Rook, Type::Bishop, Type::Knight, Type::Pawn] {
                let found = count(kind);
                let limit = kind_limit(kind);
                if found > limit {
                    return Err(SetupError::TooManyOfKind {
                        color,
                        kind,
                        count: found,
                        limit,
                    });
                }
            }

            let others = self
                .pieces()
                .filter(|(_, p)| p.color == color && p.piece_type != Type::King)
                .count();
            if others > 15 {
                return Err(SetupError::TooManyPieces {
                    color,
                    count: others,
                });
            }

            if let Some((square, _)) = self.pieces().find(|(sq, p)| {
                p.color == color && p.piece_type == Type::Pawn && (sq.rank() == 0 || sq.rank() == 7)
            }) {
                return Err(SetupError::PawnOnBackRank { color, square });
            }
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl Position {
    pub fn standard() -> Self {
        match Self::setup(&BoardConfig::standard()) {
            Ok(position) => position,
            Err(err) => unreachable!("standard setup rejected: {err}"),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        Self::setup(&BoardConfig::from_fen(fen)?)
    }

    /// Validates `config` and lays its pieces out in slots.
    ///
    /// Each piece first goes to a free slot reserved for its kind; pieces
    /// beyond those (extra queens from promotion, say) take any free slot of
    /// their colour. Castling rights are inferred from placement: a king or
    /// rook away from its home square counts as having moved.
    pub fn setup(config: &BoardConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let mut position = Position::empty();
        let mut overflow = Vec::new();

        for (square, piece) in config.pieces() {
            let base = piece.color.king_slot();
            let free = home_slots(piece.piece_type)
                .map(|offset| base + offset)
                .find(|&slot| !position.slots[slot].in_play);
            match free {
                Some(slot) => position.put(slot, square, piece),
                None => overflow.push((square, piece)),
            }
        }

        for (square, piece) in overflow {
            let slot = piece
                .color
                .slots()
                .find(|&slot| !position.slots[slot].in_play && position.kinds[slot] == Type::None);
            match slot {
                Some(slot) => position.put(slot, square, piece),
                // validate() caps every colour at 16 pieces
                None => unreachable!("no free slot for {:?} on {square}", piece),
            }
        }

        for piece in RightsPiece::ALL {
            let home = piece.home();
            let at_home = config
                .piece_at(home)
                .map_or(false, |p| p.color == piece.color() && p.piece_type == piece.kind());
            if !at_home {
                position.castling.mark_moved(piece);
            }
        }

        position.assert_consistent();
        debug!("set up position {}", position.to_fen_placement());
        Ok(position)
    }

    /// Whether a game can start here with `to_move` on turn. The other side
    /// must not already be in check.
    pub fn check_side_to_move(&self, to_move: Color) -> Result<(), SetupError> {
        let waiting = to_move.opposite();
        if self.is_in_check(waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }

    fn put(&mut self, slot: usize, square: Square, piece: Piece) {
        self.slots[slot] = PieceSlot::placed(piece.color, square);
        self.kinds[slot] = piece.piece_type;
        self.board[square.file() as usize][square.rank() as usize] = Some(slot as u8);
    }
}
