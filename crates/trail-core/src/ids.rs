//! Strongly typed, zero-cost identifier for landmarks.

use std::fmt;

/// Index of a landmark in a `LocationSet`, assigned in insertion order.
///
/// `Copy + Ord + Hash` so it works as a map key and sorts without ceremony.
/// The inner integer is `pub` to allow direct indexing via `id.0 as usize`,
/// but callers should prefer [`index`](Self::index) for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl TryFrom<usize> for LocationId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LocationId, Self::Error> {
        u32::try_from(n).map(LocationId)
    }
}
