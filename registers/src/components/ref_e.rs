//! Field Enum: REF

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefE {
    /// Internal reference and temperature sensor enabled, REF = 2.5 V buffered output
    Internal2p5V = 0,
    /// Internal reference and temperature sensor enabled, REF = 4.096 V buffered output
    Internal4p096V = 1,
    /// External reference, temperature sensor enabled, internal buffer disabled
    ExternalTemp = 2,
    /// External reference, internal buffer and temperature sensor enabled
    ExternalTempIbuf = 3,
    /// External reference; internal reference, buffer and temperature sensor disabled
    External = 6,
    /// External reference, internal buffer enabled; internal reference and
    /// temperature sensor disabled
    Ibuf = 7,
}

impl RefE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Internal2p5V),
            1 => Ok(Self::Internal4p096V),
            2 => Ok(Self::ExternalTemp),
            3 => Ok(Self::ExternalTempIbuf),
            6 => Ok(Self::External),
            7 => Ok(Self::Ibuf),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Whether the on-chip temperature sensor is powered
    #[must_use]
    pub const fn temperature_sensor_enabled(&self) -> bool {
        !matches!(self, Self::External | Self::Ibuf)
    }
}
