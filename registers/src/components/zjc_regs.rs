//! Addrmap: ZJC2103 register file
//!
//! The device exposes a single 14-bit CFG register. It has no address: the
//! word is shifted in MSB first at the start of every SPI transaction,
//! followed by `PAD_BITS` don't-care bits.

/// Named types defined within this component's body
pub mod named_types {
    pub mod cfg_reg;
}

// Instances of named component types
pub use crate::components::zjc_regs::named_types::cfg_reg as cfg;

/// Significant bits of the CFG register.
pub const WORD_BITS: u32 = 14;

/// Don't-care bits that pad the CFG word to a 16-bit frame.
pub const PAD_BITS: u32 = 2;
