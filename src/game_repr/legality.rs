use log::{debug, trace};

use super::*;

impl Position {
    /// Applies `mv` for `side` if, and only if, it is legal.
    ///
    /// A rejected move leaves the position untouched. An accepted one pushes
    /// exactly one history entry. A pawn move to the last rank without a
    /// promotion kind stands as a pawn and reports the pending slot.
    pub fn try_move(&mut self, side: Color, mv: Move) -> MoveOutcome {
        let slot = match self.slot_at(mv.from) {
            Some(slot) => slot,
            None => return MoveOutcome::Rejected(IllegalMove::NoPiece(mv.from)),
        };
        let owner = self.slots[slot].color;
        if owner != side {
            return MoveOutcome::Rejected(IllegalMove::WrongColor {
                square: mv.from,
                owner,
            });
        }

        if !self.is_mechanically_valid(slot, mv.to) {
            trace!("rejected {mv}: not a valid move for {:?}", self.kinds[slot]);
            return MoveOutcome::Rejected(IllegalMove::Mechanical(mv));
        }

        let reaches_last_rank =
            self.kinds[slot] == Type::Pawn && mv.to.rank() == side.promotion_rank();
        if let Some(kind) = mv.promotion {
            if !reaches_last_rank || !kind.is_promotion_kind() {
                return MoveOutcome::Rejected(IllegalMove::BadPromotion(kind));
            }
        }

        let in_check_before = self.is_in_check(side);

        if self.kinds[slot] == Type::King {
            if let Some(side_of) = Self::castle_side_of(mv.from, mv.to) {
                if in_check_before {
                    trace!("rejected {mv}: castling out of check");
                    return MoveOutcome::Rejected(IllegalMove::CastlesOutOfCheck);
                }
                let transit = Square::new(side_of.rook_target_file(), mv.from.rank());
                self.make(slot, transit);
                let attacked = self.is_in_check(side);
                self.unmake();
                if attacked {
                    trace!("rejected {mv}: {transit} is attacked");
                    return MoveOutcome::Rejected(IllegalMove::CastlesThroughCheck);
                }
            }
        }

        self.make(slot, mv.to);
        if self.is_in_check(side) {
            self.unmake();
            trace!("rejected {mv}: leaves the king in check");
            return MoveOutcome::Rejected(IllegalMove::LeavesKingInCheck(mv));
        }

        if let Some(kind) = mv.promotion {
            self.promote(kind);
        }
        let gives_check = self.is_in_check(side.opposite());
        if let Some(entry) = self.history.last_mut() {
            entry.flags.set(HistoryFlags::IN_CHECK_BEFORE, in_check_before);
            entry.flags.set(HistoryFlags::GIVES_CHECK, gives_check);
        }

        if reaches_last_rank && mv.promotion.is_none() {
            MoveOutcome::AppliedPendingPromotion(slot)
        } else {
            MoveOutcome::Applied
        }
    }

    /// Slot of a pawn that reached the last rank on the previous move and
    /// has not been given a kind yet.
    pub fn pending_promotion(&self) -> Option<usize> {
        let entry = self.history.last()?;
        let slot = entry.slot();
        let state = self.slots[slot];
        let waiting = self.kinds[slot] == Type::Pawn
            && state.rank == state.color.promotion_rank()
            && !entry.flags.contains(HistoryFlags::PROMOTED);
        waiting.then_some(slot)
    }

    /// Gives the pending pawn its kind, re-checking whether the move now
    /// checks the opponent.
    pub fn complete_promotion(&mut self, kind: Type) -> Result<(), IllegalMove> {
        let slot = self
            .pending_promotion()
            .ok_or(IllegalMove::NoPromotionPending)?;
        if !kind.is_promotion_kind() {
            return Err(IllegalMove::BadPromotion(kind));
        }
        self.promote(kind);
        let opponent = self.slots[slot].color.opposite();
        let gives_check = self.is_in_check(opponent);
        if let Some(entry) = self.history.last_mut() {
            entry.flags.set(HistoryFlags::GIVES_CHECK, gives_check);
        }
        debug!("promoted slot {slot} to {kind:?}");
        Ok(())
    }

    /// Collects the legal moves of `side` into `moves`. Promotions branch on
    /// each kind in `promotions`.
    pub fn legal_moves_with(&mut self, side: Color, promotions: &[Type], moves: &mut MoveList) {
        let mut candidates = MoveList::new();
        self.pseudo_legal_moves_into(side, promotions, &mut candidates);
        for mv in candidates {
            if self.try_move(side, mv).is_applied() {
                self.unmake();
                moves.push(mv);
            }
        }
    }

    /// Every legal move of `side`, listing all four promotion kinds.
    pub fn legal_moves(&mut self, side: Color) -> Vec<Move> {
        let mut moves = MoveList::new();
        self.legal_moves_with(side, &Type::PROMOTIONS, &mut moves);
        moves.into_vec()
    }

    /// Stops at the first legal move found.
    pub fn has_legal_move(&mut self, side: Color) -> bool {
        let mut candidates = MoveList::new();
        self.pseudo_legal_moves_into(side, &[Type::Queen], &mut candidates);
        for mv in candidates {
            if self.try_move(side, mv).is_applied() {
                self.unmake();
                return true;
            }
        }
        false
    }

    pub fn is_checkmate(&mut self, side: Color) -> bool {
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// `side` is to move, not in check, and has nothing legal to play.
    pub fn is_stalemate(&mut self, side: Color) -> bool {
        !self.is_in_check(side) && !self.has_legal_move(side)
    }
}
