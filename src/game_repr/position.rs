use std::fmt;

use log::debug;

use super::*;

/*
 * POSITION OWNS THE BOARD STATE AND THE
 * RAW, UNCHECKED MAKE/UNMAKE OF A MOVE
 */

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// White in 0..16 (king at 0), black in 16..32 (king at 16).
    pub(crate) slots: [PieceSlot; 32],
    /// Kind of each slot; only promotion changes it.
    pub(crate) kinds: [Type; 32],
    /// Indexed `[file][rank]`; holds the slot standing there.
    pub(crate) board: [[Option<u8>; 8]; 8],
    pub(crate) castling: CastlingRights,
    pub(crate) history: MoveHistory,
}

impl Position {
    pub(crate) fn empty() -> Self {
        let mut slots = [PieceSlot::unused(Color::White); 32];
        for slot in Color::Black.slots() {
            slots[slot] = PieceSlot::unused(Color::Black);
        }
        Self {
            slots,
            kinds: [Type::None; 32],
            board: [[None; 8]; 8],
            castling: CastlingRights::new(),
            history: MoveHistory::new(),
        }
    }

    pub fn slot(&self, slot: usize) -> PieceSlot {
        self.slots[slot]
    }

    pub fn kind(&self, slot: usize) -> Type {
        self.kinds[slot]
    }

    pub fn slot_at(&self, square: Square) -> Option<usize> {
        self.board[square.file() as usize][square.rank() as usize].map(usize::from)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.slot_at(square)
            .map(|slot| Piece::new(self.slots[slot].color, self.kinds[slot]))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.slot_at(square).is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.slot_at(square).map(|slot| self.slots[slot].color)
    }

    pub fn castling(&self) -> &CastlingRights {
        &self.castling
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.slots[color.king_slot()].square()
    }

    /// Slots of `color` currently on the board.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        color.slots().filter(move |&slot| self.slots[slot].in_play)
    }

    /// Moves `slot` to `to` with no legality checks and pushes one history
    /// entry. Handles captures, en passant, castling's rook, and castling
    /// rights bookkeeping; promotion is a separate step ([`Position::promote`]).
    pub(crate) fn make(&mut self, slot: usize, to: Square) {
        let before = self.slots[slot];
        let from = before.square();
        let color = before.color;
        let kind = self.kinds[slot];
        let mut entry = HistoryEntry::new(slot, before);

        if let Some(rights) = RightsPiece::from_home(color, kind, from) {
            entry.rights |= rights.bit();
        }

        let captured = match self.slot_at(to) {
            Some(target) => Some(target),
            None if kind == Type::Pawn && to.file() != from.file() => {
                entry.flags.insert(HistoryFlags::EN_PASSANT);
                self.slot_at(Square::new(to.file(), from.rank()))
            }
            None => None,
        };

        if let Some(target) = captured {
            let victim = self.slots[target];
            if let Some(rights) = RightsPiece::from_home(victim.color, self.kinds[target], victim.square()) {
                entry.rights |= rights.bit();
            }
            self.board[victim.file as usize][victim.rank as usize] = None;
            self.slots[target].in_play = false;
            entry.captured = Some(target as u8);
            entry.flags.insert(HistoryFlags::CAPTURE);
        }

        if kind == Type::King && from.file().abs_diff(to.file()) == 2 {
            let side = if to.file() > from.file() {
                entry.flags.insert(HistoryFlags::CASTLE_KINGSIDE);
                CastleSide::Kingside
            } else {
                entry.flags.insert(HistoryFlags::CASTLE_QUEENSIDE);
                CastleSide::Queenside
            };
            let rook_from = Square::new(side.rook_file(), from.rank());
            let rook_to = Square::new(side.rook_target_file(), from.rank());
            match self.slot_at(rook_from) {
                Some(rook) => {
                    entry.rook = Some((rook as u8, self.slots[rook]));
                    if let Some(rights) = RightsPiece::from_home(color, Type::Rook, rook_from) {
                        entry.rights |= rights.bit();
                    }
                    self.relocate(rook, rook_to);
                }
                None => panic!("castling from {from} without a rook on {rook_from}"),
            }
        }

        self.relocate(slot, to);

        if entry.rights != 0 {
            entry.flags.insert(HistoryFlags::RIGHTS_CHANGED);
            self.castling.apply_mask(entry.rights);
        }

        self.history.push(entry);
    }

    fn relocate(&mut self, slot: usize, to: Square) {
        let from = self.slots[slot].square();
        self.board[from.file() as usize][from.rank() as usize] = None;
        self.board[to.file() as usize][to.rank() as usize] = Some(slot as u8);
        self.slots[slot].file = to.file();
        self.slots[slot].rank = to.rank();
    }

    /// Turns the pawn moved by the last history entry into `kind`.
    pub(crate) fn promote(&mut self, kind: Type) {
        let entry = match self.history.last_mut() {
            Some(entry) => entry,
            None => panic!("move history underflow"),
        };
        entry.flags.insert(HistoryFlags::PROMOTED);
        self.kinds[entry.slot()] = kind;
    }

    /// Pops the last history entry and reverses it exactly.
    ///
    /// # Panics
    /// On an empty history; every unmake must pair with an earlier make.
    pub(crate) fn unmake(&mut self) -> HistoryEntry {
        let entry = match self.history.pop() {
            Some(entry) => entry,
            None => panic!("move history underflow"),
        };
        let slot = entry.slot();

        let now = self.slots[slot].square();
        self.board[now.file() as usize][now.rank() as usize] = None;
        self.slots[slot] = entry.before;
        self.board[entry.before.file as usize][entry.before.rank as usize] = Some(slot as u8);

        if entry.flags.contains(HistoryFlags::PROMOTED) {
            self.kinds[slot] = Type::Pawn;
        }

        if let Some((rook, before)) = entry.rook {
            let now = self.slots[rook as usize].square();
            self.board[now.file() as usize][now.rank() as usize] = None;
            self.slots[rook as usize] = before;
            self.board[before.file as usize][before.rank as usize] = Some(rook);
        }

        if let Some(target) = entry.captured() {
            let victim = &mut self.slots[target];
            victim.in_play = true;
            self.board[victim.file as usize][victim.rank as usize] = Some(target as u8);
        }

        self.castling.revert_mask(entry.rights);
        entry
    }

    /// Takes back the last move, if any.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if self.history.is_empty() {
            return None;
        }
        let entry = self.unmake();
        debug!("undid move of slot {}", entry.slot);
        Some(entry)
    }

    /// True when the board grid and the slot table describe the same
    /// placement and both kings are on the board.
    pub fn is_consistent(&self) -> bool {
        for square in Square::all() {
            if let Some(slot) = self.slot_at(square) {
                let state = self.slots[slot];
                if !state.in_play || state.square() != square || self.kinds[slot] == Type::None {
                    return false;
                }
            }
        }
        let slots_agree = (0..32)
            .filter(|&slot| self.slots[slot].in_play)
            .all(|slot| self.slot_at(self.slots[slot].square()) == Some(slot));
        let kings = [Color::White, Color::Black].into_iter().all(|color| {
            let king = color.king_slot();
            self.kinds[king] == Type::King && self.slots[king].in_play
        });
        slots_agree && kings
    }

    /// # Panics
    /// When board and slots disagree.
    pub fn assert_consistent(&self) {
        assert!(self.is_consistent(), "board/slot desync:\n{self}");
    }

    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }

    /// Counts leaf nodes of the legal move tree, `depth` plies deep.
    pub fn perft(&mut self, side: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.legal_moves_with(side, &Type::PROMOTIONS, &mut moves);

        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            if self.try_move(side, mv).is_applied() {
                nodes += self.perft(side.opposite(), depth - 1);
                self.unmake();
            }
        }
        nodes
    }

    /// Perft count below each root move.
    pub fn divide(&mut self, side: Color, depth: u32) -> Vec<(Move, u64)> {
        let mut moves = MoveList::new();
        self.legal_moves_with(side, &Type::PROMOTIONS, &mut moves);

        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            if self.try_move(side, mv).is_applied() {
                let count = if depth > 1 {
                    self.perft(side.opposite(), depth - 1)
                } else {
                    1
                };
                self.unmake();
                counts.push((mv, count));
            }
        }
        counts
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self
                    .piece_at(Square::new(file, rank))
                    .map_or('.', |piece| piece.to_char());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
