use thiserror::Error;

use super::{Color, Move, Square, Type};

/// A custom board configuration that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files, expected 8")]
    FileCount { rank: u8, files: usize },

    #[error("unknown piece code '{0}'")]
    UnknownPiece(char),

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("{color} has {count} pieces of kind {kind:?}, at most {limit} allowed")]
    TooManyOfKind {
        color: Color,
        kind: Type,
        count: usize,
        limit: usize,
    },

    #[error("{color} has {count} pieces besides the king, at most 15 allowed")]
    TooManyPieces { color: Color, count: usize },

    #[error("{color} pawn on {square} cannot stand on a back rank")]
    PawnOnBackRank { color: Color, square: Square },

    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck { color: Color },

    #[error("side to move must be 'w' or 'b', found '{0}'")]
    SideToMove(String),
}

/// Why a move was refused. Refusals are always recoverable: the position is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("the piece on {square} belongs to {owner}")]
    WrongColor { square: Square, owner: Color },

    #[error("{0} is not a valid move for that piece")]
    Mechanical(Move),

    #[error("{0} would leave the king in check")]
    LeavesKingInCheck(Move),

    #[error("cannot castle out of check")]
    CastlesOutOfCheck,

    #[error("cannot castle through an attacked square")]
    CastlesThroughCheck,

    #[error("cannot promote to {0:?}")]
    BadPromotion(Type),

    #[error("a pending promotion must be completed first")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPromotionPending,
}
