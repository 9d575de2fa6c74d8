use zjc2103_core::adc::{AdcError, DeviceVariant};
use zjc2103_twin::TwinError;

/// Errors reported by the host tool.
#[derive(Debug, thiserror::Error)]
pub enum PcError {
    /// Channel select beyond the part's input count.
    #[error("channel {channel} out of range for {part} ({count} inputs)")]
    ChannelOutOfRange {
        channel: u8,
        part: DeviceVariant,
        count: u8,
    },

    /// Input level given for a channel the part does not have.
    #[error("input level for channel {channel} out of range for {part}")]
    InputOutOfRange { channel: u8, part: DeviceVariant },

    /// Driver or bus failure.
    #[error("ADC error: {0}")]
    Adc(#[from] AdcError<TwinError>),
}
