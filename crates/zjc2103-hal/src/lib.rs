#![no_std]

use embedded_hal::spi::SpiDevice;

/// Abstracts the ZJC2103 read-after-conversion bus cycle over any SPI
/// implementation.
///
/// The device has no addressing: every transaction shifts a CFG word out and
/// the previous conversion result (optionally followed by a CFG echo) in.
/// Implementations handle chip select and CNV timing internally.
pub trait AdcTransport {
    type Error: core::fmt::Debug;

    /// Full-duplex exchange. `buf` holds the outbound bytes on entry and the
    /// inbound bytes on return. The length is always 2 or 4.
    ///
    /// Blocking. Timeouts, if any, are reported as `Self::Error`.
    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// `AdcTransport` over an `embedded-hal` SPI device.
///
/// The `SpiDevice` owns chip select; for this family CS doubles as CNV, so
/// each call to [`AdcTransport::transfer`] is exactly one conversion cycle.
pub struct SpiDeviceTransport<D> {
    spi: D,
}

impl<D: SpiDevice> SpiDeviceTransport<D> {
    pub fn new(spi: D) -> Self {
        Self { spi }
    }

    /// Give back the underlying SPI device.
    pub fn free(self) -> D {
        self.spi
    }
}

impl<D: SpiDevice> AdcTransport for SpiDeviceTransport<D> {
    type Error = D::Error;

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transfer_in_place(buf)
    }
}
