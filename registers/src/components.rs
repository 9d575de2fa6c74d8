//! Register component definitions
#![allow(non_camel_case_types)] // needed for type normalization suffixes

pub mod bw_e;
pub mod incc_e;
pub mod ref_e;
pub mod seq_e;
pub mod zjc_regs;
