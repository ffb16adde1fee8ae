use bitflags::bitflags;

use super::PieceSlot;

bitflags! {
    /// Flags byte of a history entry.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct HistoryFlags: u8 {
        const CAPTURE = 1 << 0;
        const EN_PASSANT = 1 << 1;
        const CASTLE_KINGSIDE = 1 << 2;
        const CASTLE_QUEENSIDE = 1 << 3;
        const RIGHTS_CHANGED = 1 << 4;
        const PROMOTED = 1 << 5;
        /// The mover was in check before the move.
        const IN_CHECK_BEFORE = 1 << 6;
        /// The move left the opponent in check.
        const GIVES_CHECK = 1 << 7;
    }
}

/// Everything needed to reverse one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub flags: HistoryFlags,
    /// Slot of the piece that moved.
    pub slot: u8,
    /// The moved slot's state before the move.
    pub before: PieceSlot,
    /// Slot taken off the board, including a pawn captured en passant.
    pub captured: Option<u8>,
    /// Castling-rights counters bumped by this move.
    pub rights: u8,
    /// Rook relocated by castling and its state before the move.
    pub rook: Option<(u8, PieceSlot)>,
}

impl HistoryEntry {
    pub fn new(slot: usize, before: PieceSlot) -> Self {
        Self {
            flags: HistoryFlags::empty(),
            slot: slot as u8,
            before,
            captured: None,
            rights: 0,
            rook: None,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot as usize
    }

    pub fn captured(&self) -> Option<usize> {
        self.captured.map(usize::from)
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn gives_check(&self) -> bool {
        self.flags.contains(HistoryFlags::GIVES_CHECK)
    }
}

/// Undo log; one entry per applied move, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.entries.last_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_insert_remove() {
        let mut flags = HistoryFlags::CAPTURE | HistoryFlags::GIVES_CHECK;
        assert!(flags.contains(HistoryFlags::CAPTURE));
        assert!(!flags.contains(HistoryFlags::EN_PASSANT));

        flags.set(HistoryFlags::GIVES_CHECK, false);
        assert_eq!(flags, HistoryFlags::CAPTURE);
        flags.insert(HistoryFlags::PROMOTED);
        assert_eq!(flags.bits(), 0b0010_0001);
    }

    #[test]
    fn test_flags_fill_one_byte() {
        assert_eq!(HistoryFlags::all().bits(), u8::MAX);
        assert_eq!(HistoryFlags::all().iter().count(), 8);
        assert_eq!(HistoryFlags::from_bits(0b0100_0000), Some(HistoryFlags::IN_CHECK_BEFORE));
        assert!(HistoryFlags::default().is_empty());
    }
}
