//! Transposition table for caching search results.
//!
//! A direct-mapped table of full 64-bit keys. Every store overwrites the slot
//! its key maps to, whatever was there before. Two positions sharing a
//! fingerprint will read each other's entries; that risk is accepted.

use std::mem;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= original alpha)
}

/// Result of a completed node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub bound: BoundType,
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
}

impl TTEntry {
    #[must_use]
    pub fn new(bound: BoundType, best_move: Option<Move>, score: i32, depth: u32) -> Self {
        TTEntry {
            bound,
            best_move,
            score,
            depth,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    key: u64,
    entry: TTEntry,
}

pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    mask: usize,
    filled: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes, rounded down to a power-of-two slot count.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<Slot>>().max(1);
        let requested = size_mb.max(1) * 1024 * 1024 / slot_size;
        let count = if requested.is_power_of_two() {
            requested
        } else {
            (requested.next_power_of_two() >> 1).max(1)
        };
        TranspositionTable {
            slots: vec![None; count],
            mask: count - 1,
            filled: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Look up `key`; `None` when the slot is empty or holds another key.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        match self.slots[self.index(key)] {
            Some(slot) if slot.key == key => Some(slot.entry),
            _ => None,
        }
    }

    /// Store unconditionally, replacing whatever the slot held.
    pub fn store(&mut self, key: u64, entry: TTEntry) {
        let idx = self.index(key);
        if self.slots[idx].is_none() {
            self.filled += 1;
        }
        self.slots[idx] = Some(Slot { key, entry });
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.filled = 0;
    }

    /// Number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.filled as u64 * 1000) / self.slots.len() as u64) as u32
    }
}
