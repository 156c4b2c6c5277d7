//! Player slot identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed player positions on the deck.
pub const SLOT_COUNT: usize = 4;

/// One of the four fixed player positions (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    /// All slots in positional order.
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(1), Slot(2), Slot(3), Slot(4)];

    /// Create a slot from its 1-based number.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= SLOT_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The 1-based slot number shown to users.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-slot tables.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Error returned when a number does not name a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid player slot {0}, expected 1..=4")]
pub struct InvalidSlot(pub u8);

impl TryFrom<u8> for Slot {
    type Error = InvalidSlot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(value).ok_or(InvalidSlot(value))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.number()
    }
}
