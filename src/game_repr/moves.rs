use std::fmt;

use super::{IllegalMove, Square, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Kind the pawn turns into; `None` on a last-rank pawn move leaves the
    /// promotion pending.
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Square, to: Square, kind: Type) -> Move {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Parses coordinate notation such as `e2e4` or `e7e8q`.
    pub fn parse(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let from = Square::parse(&s[0..2])?;
        let to = Square::parse(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match c.to_ascii_lowercase() {
                'q' => Some(Type::Queen),
                'r' => Some(Type::Rook),
                'b' => Some(Type::Bishop),
                'n' => Some(Type::Knight),
                _ => return None,
            },
        };
        Some(Self { from, to, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Result of pushing a move through the legality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    /// The move stands but the pawn in this slot still needs a promotion kind.
    AppliedPendingPromotion(usize),
    Rejected(IllegalMove),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    pub fn into_result(self) -> Result<MoveOutcome, IllegalMove> {
        match self {
            MoveOutcome::Rejected(reason) => Err(reason),
            applied => Ok(applied),
        }
    }
}
