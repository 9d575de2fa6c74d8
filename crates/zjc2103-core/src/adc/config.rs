//! Logical CFG register contents and their wire encoding.

use super::registers::{BwE, CfgReg, InccE, RefE, SeqE, UnknownVariant, PAD_BITS};

/// Contents of the device's CFG register.
///
/// Plain value type; the driver copies it between the caller, the pipeline
/// shadow and the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterConfig {
    /// Input channel configuration.
    pub incc: InccE,
    /// Channel selection. The sequencer iterates from IN0 to INx; only the
    /// low three bits are transmitted.
    pub inx: u8,
    /// Low-pass filter bandwidth.
    pub bw: BwE,
    /// Reference/buffer selection.
    pub reference: RefE,
    /// Channel sequencer mode.
    pub seq: SeqE,
    /// Append the CFG in effect to each data read.
    pub rb: bool,
}

impl Default for RegisterConfig {
    /// The power-on register contents (all ones on the wire, readback off).
    fn default() -> Self {
        Self {
            incc: InccE::UnipolarGnd,
            inx: 7,
            bw: BwE::Full,
            reference: RefE::Ibuf,
            seq: SeqE::ScanAll,
            rb: false,
        }
    }
}

impl RegisterConfig {
    /// Register image of this configuration with the CFG (overwrite) bit set.
    pub fn to_reg(&self) -> CfgReg {
        let mut reg = CfgReg::from_raw(0);
        reg.set_cfg(true);
        reg.set_incc(self.incc);
        reg.set_inx(self.inx);
        reg.set_bw(self.bw);
        reg.set_reference(self.reference);
        reg.set_seq(self.seq);
        // RB is active low on the wire.
        reg.set_rb(!self.rb);
        reg
    }

    /// Decode a register image. The CFG bit is ignored.
    ///
    /// # Errors
    /// Returns the offending bits if INCC or REF holds a reserved code.
    pub fn from_reg(reg: CfgReg) -> Result<Self, UnknownVariant<u8>> {
        Ok(Self {
            incc: reg.incc()?,
            inx: reg.inx(),
            bw: reg.bw(),
            reference: reg.reference()?,
            seq: reg.seq(),
            rb: !reg.rb(),
        })
    }
}

/// Pack a configuration into the 16-bit outbound frame (CFG word followed by
/// the padding bits).
pub fn pack(config: &RegisterConfig) -> u16 {
    config.to_reg().to_raw() << PAD_BITS
}

/// Unpack a 16-bit frame carrying a CFG word in its upper 14 bits.
///
/// # Errors
/// Returns the offending bits if INCC or REF holds a reserved code.
pub fn unpack(frame: u16) -> Result<RegisterConfig, UnknownVariant<u8>> {
    RegisterConfig::from_reg(CfgReg::from_raw(frame >> PAD_BITS))
}
