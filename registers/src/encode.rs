//! Field encoding helpers

/// A bit pattern that does not match any variant of a field enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownVariant<T>(T);

impl<T: Copy> UnknownVariant<T> {
    #[must_use]
    pub const fn new(bits: T) -> Self {
        Self(bits)
    }

    /// The unmatched bit pattern
    #[must_use]
    pub const fn bits(&self) -> T {
        self.0
    }
}

impl<T: core::fmt::LowerHex> core::fmt::Display for UnknownVariant<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown enum variant bits 0x{:x}", self.0)
    }
}
