//! Field Enum: INCC

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InccE {
    /// Bipolar differential pairs; INx- referenced to VREF/2 +/- 0.1 V
    BipolarDifferentialPairs = 1,
    /// Bipolar; INx referenced to COM = VREF/2 +/- 0.1 V
    BipolarCom = 2,
    /// Temperature sensor
    TemperatureSensor = 3,
    /// Unipolar differential pairs; INx- referenced to GND +/- 0.1 V
    UnipolarDifferentialPairs = 5,
    /// Unipolar; INx referenced to COM = GND +/- 0.1 V
    UnipolarCom = 6,
    /// Unipolar; INx referenced to GND
    UnipolarGnd = 7,
}

impl InccE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            1 => Ok(Self::BipolarDifferentialPairs),
            2 => Ok(Self::BipolarCom),
            3 => Ok(Self::TemperatureSensor),
            5 => Ok(Self::UnipolarDifferentialPairs),
            6 => Ok(Self::UnipolarCom),
            7 => Ok(Self::UnipolarGnd),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
