//! CFG register layout and field enums.
//!
//! Re-exported from the `zjc2103-registers` crate (single source of truth).

pub use zjc2103_registers::components::zjc_regs::cfg::bw::BwE;
pub use zjc2103_registers::components::zjc_regs::cfg::incc::InccE;
pub use zjc2103_registers::components::zjc_regs::cfg::reference::RefE;
pub use zjc2103_registers::components::zjc_regs::cfg::seq::SeqE;
pub use zjc2103_registers::encode::UnknownVariant;
pub use zjc2103_registers::{CfgReg, PAD_BITS};
