//! Platform-agnostic driver for the ZJC2103 family of SAR ADCs.
//!
//! Generic over [`zjc2103_hal::AdcTransport`]; runs unchanged on
//! `embedded-hal` targets, the PC host and the device twin.

#![no_std]

pub mod adc;
