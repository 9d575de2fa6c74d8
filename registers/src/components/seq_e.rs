//! Field Enum: SEQ

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeqE {
    /// Disable sequencer
    Disable = 0,
    /// Update configuration during sequence
    UpdateCfg = 1,
    /// Scan IN0 to INX, then temperature
    ScanAllThenTemp = 2,
    /// Scan IN0 to INX
    ScanAll = 3,
}

impl SeqE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Disable),
            1 => Ok(Self::UpdateCfg),
            2 => Ok(Self::ScanAllThenTemp),
            3 => Ok(Self::ScanAll),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
