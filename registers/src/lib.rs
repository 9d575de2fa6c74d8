//! Control/Status Register crate for the ZJC2103 SAR ADC family
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;

pub use crate::components::zjc_regs::cfg::CfgReg;
pub use crate::components::zjc_regs::{PAD_BITS, WORD_BITS};
