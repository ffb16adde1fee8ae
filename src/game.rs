use log::{debug, info};

use crate::agent::ai::{search, SearchConfig, SearchResult};
use crate::game_repr::{
    BoardConfig, Color, IllegalMove, Move, MoveOutcome, Position, SetupError, Square, Type,
};

/// How a game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a reply.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Game component: a position plus whose turn it is.
///
/// `Game` is what a front end talks to. Every move goes through the legality
/// gate of [`Position`]; a refused move leaves the game exactly as it was.
///
/// # Promotion
///
/// A pawn moved to the last rank without a promotion kind stays a pawn and
/// the turn does not pass until [`Game::complete_promotion`] supplies one.
/// Moves chosen by the search always carry their kind.
///
/// # Usage
///
/// ```rust
/// use slotchess::game::Game;
/// use slotchess::game_repr::Square;
///
/// let mut game = Game::new();
/// let e2 = Square::parse("e2").unwrap();
/// let e4 = Square::parse("e4").unwrap();
/// assert!(game.apply_player_move(e2, e4, None).is_ok());
/// assert!(game.undo_move());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// The current position (board, slots, rights and history)
    position: Position,

    /// Side whose move is expected next
    to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            position: Position::standard(),
            to_move: Color::White,
        }
    }

    /// Starts from a custom configuration, white to move.
    ///
    /// # Errors
    ///
    /// Any [`SetupError`] from validating `config`, or
    /// [`SetupError::OpponentInCheck`] when black is already in check.
    /// Nothing is repaired.
    pub fn setup(config: &BoardConfig) -> Result<Self, SetupError> {
        Self::starting(Position::setup(config)?, Color::White)
    }

    /// Reads a FEN string. Only the placement and the side-to-move fields are
    /// used; a missing side field means white.
    ///
    /// The castling, en passant and move-counter fields are ignored.
    /// Castling rights come from placement alone: a king or rook on its home
    /// square keeps its right. No en passant capture is available on the
    /// first move.
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        let position = Position::setup(&BoardConfig::from_fen(fen)?)?;
        let to_move = match fen.split_whitespace().nth(1) {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(SetupError::SideToMove(other.to_string())),
        };
        Self::starting(position, to_move)
    }

    fn starting(position: Position, to_move: Color) -> Result<Self, SetupError> {
        position.check_side_to_move(to_move)?;
        Ok(Self { position, to_move })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Number of moves played and not undone.
    pub fn ply(&self) -> usize {
        self.position.history().len()
    }

    pub fn legal_moves(&mut self, side: Color) -> Vec<Move> {
        self.position.legal_moves(side)
    }

    /// Tries a move for the side to move.
    ///
    /// On success the turn passes, unless the move left a promotion pending.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::PromotionPending`] while a promotion waits for its
    /// kind, otherwise whatever the legality gate refused the move for.
    pub fn apply_player_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Type>,
    ) -> Result<MoveOutcome, IllegalMove> {
        if self.position.pending_promotion().is_some() {
            return Err(IllegalMove::PromotionPending);
        }

        let mv = Move { from, to, promotion };
        let outcome = self.position.try_move(self.to_move, mv).into_result()?;
        debug!("{} played {mv}", self.to_move);
        if outcome == MoveOutcome::Applied {
            self.to_move = self.to_move.opposite();
        }
        Ok(outcome)
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.position
            .pending_promotion()
            .map(|slot| self.position.slot(slot).square())
    }

    /// Finishes a pending promotion and passes the turn.
    pub fn complete_promotion(&mut self, kind: Type) -> Result<(), IllegalMove> {
        self.position.complete_promotion(kind)?;
        self.to_move = self.to_move.opposite();
        Ok(())
    }

    /// Takes back the last move, pending promotion included. Returns `false`
    /// when there is nothing to take back.
    pub fn undo_move(&mut self) -> bool {
        match self.position.undo() {
            Some(entry) => {
                self.to_move = self.position.slot(entry.slot()).color;
                debug!("undid a move, {} to move", self.to_move);
                true
            }
            None => false,
        }
    }

    pub fn is_in_check(&self, side: Color) -> bool {
        self.position.is_in_check(side)
    }

    pub fn is_checkmate(&mut self, side: Color) -> bool {
        self.position.is_checkmate(side)
    }

    /// Whether the side to move is stalemated.
    pub fn is_stalemate(&mut self) -> bool {
        self.position.is_stalemate(self.to_move)
    }

    pub fn status(&mut self) -> GameStatus {
        let side = self.to_move;
        let in_check = self.position.is_in_check(side);
        match (in_check, self.position.has_legal_move(side)) {
            (true, false) => GameStatus::Checkmate {
                winner: side.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Full search result for `side` without playing anything.
    pub fn analyse(&mut self, side: Color, config: &SearchConfig) -> SearchResult {
        search(&mut self.position, side, config)
    }

    /// The move the engine would play for `side`. The game is not changed.
    pub fn choose_computer_move(&mut self, side: Color, config: &SearchConfig) -> Option<Move> {
        self.analyse(side, config).best_move
    }

    /// Lets the engine move for the side to move and plays its choice.
    pub fn play_computer_move(&mut self, config: &SearchConfig) -> Option<Move> {
        let mv = self.choose_computer_move(self.to_move, config)?;
        match self.apply_player_move(mv.from, mv.to, mv.promotion) {
            Ok(_) => {
                info!("engine played {mv}");
                Some(mv)
            }
            Err(err) => unreachable!("search chose a refused move {mv}: {err}"),
        }
    }
}
