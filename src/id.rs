use core::fmt;

/// Opaque handle to one item in a [`Collection`](crate::Collection).
///
/// Identifiers are issued from a strictly monotonic counter starting at zero,
/// so they order by insertion. The identifier of a removed item is never
/// reissued.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(u64);

impl Id {
    pub(crate) fn new(raw: u64) -> Self {
        Id(raw)
    }

    /// The raw counter value behind this identifier.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
