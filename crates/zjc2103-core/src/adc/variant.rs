//! Device variants and their data-width differences.

/// Members of the ZJC2103 family.
///
/// The variants differ only in two numbers: the width of the conversion
/// result and the channel count. The wire protocol is otherwise identical.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceVariant {
    /// 16-bit, 8-channel, 250 kSPS
    Zjc2103_16 = 0,
    /// 16-bit, 4-channel, 250 kSPS
    Zjc2104_16 = 1,
    /// 14-bit, 8-channel, 300 kSPS
    Zjc2103_14 = 2,
    /// 16-bit, 8-channel, 500 kSPS
    Zjc2102_16 = 3,
}

impl DeviceVariant {
    pub const ALL: [DeviceVariant; 4] = [
        DeviceVariant::Zjc2103_16,
        DeviceVariant::Zjc2104_16,
        DeviceVariant::Zjc2103_14,
        DeviceVariant::Zjc2102_16,
    ];

    /// Look up a variant by its numeric device id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceVariant::Zjc2103_16 => "ZJC2103_16",
            DeviceVariant::Zjc2104_16 => "ZJC2104_16",
            DeviceVariant::Zjc2103_14 => "ZJC2103_14",
            DeviceVariant::Zjc2102_16 => "ZJC2102_16",
        }
    }

    pub fn channel_count(self) -> u8 {
        match self {
            DeviceVariant::Zjc2104_16 => 4,
            _ => 8,
        }
    }

    /// Width of a conversion result in bits.
    pub fn resolution_bits(self) -> u32 {
        match self {
            DeviceVariant::Zjc2103_14 => 14,
            _ => 16,
        }
    }

    /// Turn the first two inbound bytes into a sample in the device's native
    /// range.
    ///
    /// The 14-bit part left-aligns its result in the 16-bit frame and is
    /// scaled down by division, which keeps the sign and truncates toward
    /// zero.
    pub fn scale_sample(self, frame: u16) -> i16 {
        let raw = frame as i16;
        match self {
            DeviceVariant::Zjc2103_14 => raw / 4,
            _ => raw,
        }
    }

    /// Extract the 16-bit frame holding the CFG echo (CFG word in bits 15..2)
    /// from a 4-byte exchange.
    ///
    /// The echo follows the last data bit. With a 16-bit result it occupies
    /// bytes 2..3 exactly; a 14-bit result ends two bits earlier, so the echo
    /// starts at bit 14 of the stream and is taken from the 24-bit window of
    /// bytes 1..3.
    pub fn readback_frame(self, buf: &[u8; 4]) -> u16 {
        match self {
            DeviceVariant::Zjc2103_14 => {
                let window = u32::from_be_bytes([0, buf[1], buf[2], buf[3]]);
                (window >> 2) as u16
            }
            _ => u16::from_be_bytes([buf[2], buf[3]]),
        }
    }
}

impl core::fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for variant in DeviceVariant::ALL {
            assert_eq!(DeviceVariant::from_id(variant.id()), Some(variant));
        }
        assert_eq!(DeviceVariant::from_id(4), None);
        assert_eq!(DeviceVariant::from_id(0xFF), None);
    }

    #[test]
    fn fourteen_bit_scaling_truncates_toward_zero() {
        let v = DeviceVariant::Zjc2103_14;
        assert_eq!(v.scale_sample(0xFFFC), -1);
        assert_eq!(v.scale_sample(0xFFFB), -1);
        assert_eq!(v.scale_sample(0x8000), -8192);
        assert_eq!(v.scale_sample(0x7FFC), 8191);
        assert_eq!(v.scale_sample(0x0007), 1);
    }

    #[test]
    fn sixteen_bit_variants_pass_through() {
        for v in [
            DeviceVariant::Zjc2103_16,
            DeviceVariant::Zjc2104_16,
            DeviceVariant::Zjc2102_16,
        ] {
            assert_eq!(v.scale_sample(0xFFFB), -5);
            assert_eq!(v.scale_sample(0x1234), 0x1234);
        }
    }

    #[test]
    fn readback_frame_sixteen_bit() {
        let buf = [0xAA, 0x55, 0xB3, 0x14];
        assert_eq!(DeviceVariant::Zjc2103_16.readback_frame(&buf), 0xB314);
    }

    #[test]
    fn readback_frame_fourteen_bit_is_two_bits_earlier() {
        // 14 data bits, then a 14-bit CFG word, then 4 idle bits.
        let cfg: u32 = 0x2A5B;
        let data: u32 = 0x1FFF;
        let stream = (data << 18) | (cfg << 4);
        let buf = stream.to_be_bytes();
        let frame = DeviceVariant::Zjc2103_14.readback_frame(&buf);
        assert_eq!(u32::from(frame >> 2), cfg);
    }

    #[test]
    fn metadata() {
        assert_eq!(DeviceVariant::Zjc2104_16.channel_count(), 4);
        assert_eq!(DeviceVariant::Zjc2102_16.channel_count(), 8);
        assert_eq!(DeviceVariant::Zjc2103_14.resolution_bits(), 14);
        assert_eq!(DeviceVariant::Zjc2103_14.name(), "ZJC2103_14");
    }
}
