//! Platform-agnostic ZJC2103 driver, generic over AdcTransport.
//!
//! Every bus cycle is a read-after-conversion (RAC) cycle: it shifts out the
//! next CFG word (or zeros), starts the next conversion and shifts in the
//! previous result. All public operations are sequences of [`AdcDriver::transact`].

use zjc2103_hal::AdcTransport;

use super::config::{self, RegisterConfig};
use super::pipeline::PipelineShadow;
use super::variant::DeviceVariant;

/// Error type for ADC driver operations, generic over transport errors.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError<E: core::fmt::Debug> {
    /// Unknown device id, or a destination too small for the request.
    InvalidArgument,
    /// The CFG echo held a reserved INCC or REF code. Carries the 14-bit word.
    InvalidReadback(u16),
    /// SPI transport error, passed through unchanged.
    Transport(E),
}

impl<E: core::fmt::Debug> From<E> for AdcError<E> {
    fn from(e: E) -> Self {
        AdcError::Transport(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for AdcError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AdcError::InvalidArgument => f.write_str("invalid argument"),
            AdcError::InvalidReadback(word) => {
                write!(f, "CFG readback 0x{word:04X} holds a reserved code")
            }
            AdcError::Transport(e) => write!(f, "transport error: {e:?}"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for AdcError<E> {}

/// Parameters for [`AdcDriver::init`].
#[derive(Clone, Copy, Debug)]
pub struct InitParam {
    /// Numeric device id, see [`DeviceVariant::from_id`].
    pub id: u8,
    /// CFG written during initialization.
    pub config: RegisterConfig,
}

/// ZJC2103 driver. Owns the transport and the host-side shadow of the CFG
/// pipeline.
///
/// Not synchronized: share between threads only behind an external lock.
pub struct AdcDriver<S: AdcTransport> {
    variant: DeviceVariant,
    spi: S,
    shadow: PipelineShadow,
}

impl<S: AdcTransport> AdcDriver<S> {
    /// Validate the device id, open the transport and bring the device into
    /// `param.config`.
    ///
    /// Writes the CFG, then runs one more conversion: two conversions are
    /// needed after power-up before the first result is valid. On any failure
    /// the transport is dropped before returning.
    pub fn init<F>(param: &InitParam, open: F) -> Result<Self, AdcError<S::Error>>
    where
        F: FnOnce() -> Result<S, S::Error>,
    {
        let Some(variant) = DeviceVariant::from_id(param.id) else {
            log::error!("unknown device id {}", param.id);
            return Err(AdcError::InvalidArgument);
        };

        let spi = open().map_err(|e| {
            log::error!("{variant} initialization failed: transport open: {e:?}");
            AdcError::Transport(e)
        })?;

        let mut driver = Self {
            variant,
            spi,
            shadow: PipelineShadow::new(RegisterConfig::default()),
        };

        if let Err(e) = driver
            .write_config(&param.config)
            .and_then(|()| driver.transact(None, None, None))
        {
            log::error!("{variant} initialization failed: {e}");
            return Err(e);
        }

        log::debug!("{variant} initialized with {:?}", param.config);
        Ok(driver)
    }

    /// Tear down a driver, releasing its transport.
    ///
    /// `None` is reported as [`AdcError::InvalidArgument`].
    pub fn remove(dev: Option<Self>) -> Result<(), AdcError<S::Error>> {
        let dev = dev.ok_or(AdcError::InvalidArgument)?;
        log::debug!("{} removed", dev.variant);
        drop(dev.release());
        Ok(())
    }

    /// Consume the driver and give back the transport.
    pub fn release(self) -> S {
        self.spi
    }

    pub fn variant(&self) -> DeviceVariant {
        self.variant
    }

    /// Human-readable part name.
    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    /// One RAC cycle.
    ///
    /// * `config_in` - CFG to write this cycle; `None` shifts out zeros and
    ///   leaves the device configuration alone.
    /// * `config_out` - receives the CFG echo. Only filled if readback was
    ///   enabled in the CFG now in effect; otherwise left untouched and the
    ///   cycle is a plain 2-byte exchange.
    /// * `data` - receives the previous conversion result.
    ///
    /// The shadow advances as soon as the transfer succeeds. A transport
    /// error leaves it unchanged.
    pub fn transact(
        &mut self,
        config_in: Option<&RegisterConfig>,
        config_out: Option<&mut RegisterConfig>,
        data: Option<&mut i16>,
    ) -> Result<(), AdcError<S::Error>> {
        let readback = self.shadow.active().rb && config_out.is_some();
        let len = if readback { 4 } else { 2 };

        let mut buf = [0u8; 4];
        if let Some(config) = config_in {
            buf[..2].copy_from_slice(&config::pack(config).to_be_bytes());
        }
        log::trace!(
            "{} RAC {len}B out {:02X}{:02X}",
            self.variant,
            buf[0],
            buf[1]
        );

        self.spi.transfer(&mut buf[..len])?;

        self.shadow.advance(config_in);

        if let Some(data) = data {
            *data = self.variant.scale_sample(u16::from_be_bytes([buf[0], buf[1]]));
        }

        if let (true, Some(out)) = (readback, config_out) {
            let frame = self.variant.readback_frame(&buf);
            *out = config::unpack(frame).map_err(|e| {
                log::warn!(
                    "{} CFG readback 0x{:04X}: {e}",
                    self.variant,
                    frame >> 2
                );
                AdcError::InvalidReadback(frame >> 2)
            })?;
        }

        Ok(())
    }

    /// Write the CFG register.
    ///
    /// The new configuration governs the next conversion; it is reflected in
    /// data from the transaction after this one.
    pub fn write_config(&mut self, config: &RegisterConfig) -> Result<(), AdcError<S::Error>> {
        self.transact(Some(config), None, None)
    }

    /// Read the CFG register.
    ///
    /// With readback already enabled this is a single transaction. Otherwise
    /// readback is enabled and disabled again around the read, which takes
    /// three transactions; the value returned is the CFG with readback off.
    /// A failure part way through is returned as is: the cycles that did
    /// complete have already reconfigured the device.
    pub fn read_config(&mut self) -> Result<RegisterConfig, AdcError<S::Error>> {
        let active = *self.shadow.active();
        let mut config = active;

        if active.rb {
            self.transact(None, Some(&mut config), None)?;
            return Ok(config);
        }

        let mut c_in = active;
        c_in.rb = true;
        self.transact(Some(&c_in), None, None)?;

        c_in.rb = false;
        self.transact(Some(&c_in), None, None)?;

        self.transact(None, Some(&mut config), None)?;
        Ok(config)
    }

    /// Read `count` samples into the front of `data`, one RAC cycle each.
    ///
    /// `count == 0` succeeds without touching the bus. On a transport error
    /// the samples already read stay in `data` and the rest are untouched.
    pub fn read(&mut self, data: &mut [i16], count: usize) -> Result<(), AdcError<S::Error>> {
        let dest = data.get_mut(..count).ok_or(AdcError::InvalidArgument)?;
        for sample in dest {
            self.transact(None, None, Some(sample))?;
        }
        Ok(())
    }
}
