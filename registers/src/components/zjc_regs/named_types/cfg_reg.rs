//! Register: CFG

// Instances of named component types
pub use crate::components::bw_e as bw;
pub use crate::components::incc_e as incc;
pub use crate::components::ref_e as reference;
pub use crate::components::seq_e as seq;

/// CFG
///
/// Configuration register. A word with CFG set is latched at the end of the
/// transaction that carried it and governs the following conversion.
/// RB is active low: 0 appends the CFG in effect to the next data read.
/// Power-on value is all ones.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CfgReg(u16);

impl core::default::Default for CfgReg {
    fn default() -> Self {
        Self(0x3FFF)
    }
}

impl CfgReg {
    /// Mask of the implemented register bits
    pub const REG_MASK: u16 = 0x3FFF;

    #[inline(always)]
    #[must_use]
    pub const fn from_raw(val: u16) -> Self {
        Self(val & Self::REG_MASK)
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_raw(self) -> u16 {
        self.0
    }

    pub const RB_OFFSET: usize = 0;
    pub const RB_WIDTH: usize = 1;
    pub const RB_MASK: u16 = 0x1;

    /// RB
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rb(&self) -> bool {
        let val = (self.0 >> Self::RB_OFFSET) & Self::RB_MASK;
        val != 0
    }

    /// RB
    #[inline(always)]
    pub fn set_rb(&mut self, val: bool) {
        let val = val as u16;
        self.0 = (self.0 & !(Self::RB_MASK << Self::RB_OFFSET))
            | ((val & Self::RB_MASK) << Self::RB_OFFSET);
    }

    pub const SEQ_OFFSET: usize = 1;
    pub const SEQ_WIDTH: usize = 2;
    pub const SEQ_MASK: u16 = 0x3;

    /// SEQ
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn seq(&self) -> seq::SeqE {
        let val = (self.0 >> Self::SEQ_OFFSET) & Self::SEQ_MASK;
        seq::SeqE::from_bits(val as u8).expect("All possible field values represented by enum")
    }

    /// SEQ
    #[inline(always)]
    pub fn set_seq(&mut self, val: seq::SeqE) {
        let val = val.bits() as u16;
        self.0 = (self.0 & !(Self::SEQ_MASK << Self::SEQ_OFFSET))
            | ((val & Self::SEQ_MASK) << Self::SEQ_OFFSET);
    }

    pub const REF_OFFSET: usize = 3;
    pub const REF_WIDTH: usize = 3;
    pub const REF_MASK: u16 = 0x7;

    /// REF
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn reference(&self) -> Result<reference::RefE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::REF_OFFSET) & Self::REF_MASK;
        reference::RefE::from_bits(val as u8)
    }

    /// REF
    #[inline(always)]
    pub fn set_reference(&mut self, val: reference::RefE) {
        let val = val.bits() as u16;
        self.0 = (self.0 & !(Self::REF_MASK << Self::REF_OFFSET))
            | ((val & Self::REF_MASK) << Self::REF_OFFSET);
    }

    pub const BW_OFFSET: usize = 6;
    pub const BW_WIDTH: usize = 1;
    pub const BW_MASK: u16 = 0x1;

    /// BW
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn bw(&self) -> bw::BwE {
        let val = (self.0 >> Self::BW_OFFSET) & Self::BW_MASK;
        bw::BwE::from_bits(val as u8).expect("All possible field values represented by enum")
    }

    /// BW
    #[inline(always)]
    pub fn set_bw(&mut self, val: bw::BwE) {
        let val = val.bits() as u16;
        self.0 = (self.0 & !(Self::BW_MASK << Self::BW_OFFSET))
            | ((val & Self::BW_MASK) << Self::BW_OFFSET);
    }

    pub const INX_OFFSET: usize = 7;
    pub const INX_WIDTH: usize = 3;
    pub const INX_MASK: u16 = 0x7;

    /// INX
    ///
    /// Last channel of a sequence, or the single channel converted when the
    /// sequencer is disabled.
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn inx(&self) -> u8 {
        let val = (self.0 >> Self::INX_OFFSET) & Self::INX_MASK;
        val as u8
    }

    /// INX
    #[inline(always)]
    pub fn set_inx(&mut self, val: u8) {
        let val = val as u16;
        self.0 = (self.0 & !(Self::INX_MASK << Self::INX_OFFSET))
            | ((val & Self::INX_MASK) << Self::INX_OFFSET);
    }

    pub const INCC_OFFSET: usize = 10;
    pub const INCC_WIDTH: usize = 3;
    pub const INCC_MASK: u16 = 0x7;

    /// INCC
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn incc(&self) -> Result<incc::InccE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::INCC_OFFSET) & Self::INCC_MASK;
        incc::InccE::from_bits(val as u8)
    }

    /// INCC
    #[inline(always)]
    pub fn set_incc(&mut self, val: incc::InccE) {
        let val = val.bits() as u16;
        self.0 = (self.0 & !(Self::INCC_MASK << Self::INCC_OFFSET))
            | ((val & Self::INCC_MASK) << Self::INCC_OFFSET);
    }

    pub const CFG_OFFSET: usize = 13;
    pub const CFG_WIDTH: usize = 1;
    pub const CFG_MASK: u16 = 0x1;

    /// CFG
    ///
    /// Overwrite contents of register. Words shifted in with CFG clear are ignored.
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn cfg(&self) -> bool {
        let val = (self.0 >> Self::CFG_OFFSET) & Self::CFG_MASK;
        val != 0
    }

    /// CFG
    #[inline(always)]
    pub fn set_cfg(&mut self, val: bool) {
        let val = val as u16;
        self.0 = (self.0 & !(Self::CFG_MASK << Self::CFG_OFFSET))
            | ((val & Self::CFG_MASK) << Self::CFG_OFFSET);
    }
}

impl core::fmt::Debug for CfgReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CfgReg")
            .field("cfg", &self.cfg())
            .field("incc", &self.incc())
            .field("inx", &self.inx())
            .field("bw", &self.bw())
            .field("reference", &self.reference())
            .field("seq", &self.seq())
            .field("rb", &self.rb())
            .finish()
    }
}
