//! Digital twin of a ZJC2103 family ADC, seen from its SPI pins.
//!
//! Models the CFG pipeline of the real part: a word shifted in during
//! transaction N is latched at the end of N and governs the conversion whose
//! result is shifted out during N+1, together with its CFG echo when the CFG
//! written at N-1 enabled readback. Conversion results come from per-channel
//! input codes set by the test.

use zjc2103_hal::AdcTransport;
use zjc2103_registers::components::zjc_regs::cfg::incc::InccE;
use zjc2103_registers::components::zjc_regs::cfg::seq::SeqE;
use zjc2103_registers::{CfgReg, PAD_BITS, WORD_BITS};

/// Errors raised by the twin's bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinError {
    /// Failure injected with [`AdcTwin::fail_transfer`].
    Injected,
    /// A transaction that is neither 2 nor 4 bytes long.
    BadLength(usize),
}

impl core::fmt::Display for TwinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TwinError::Injected => f.write_str("injected bus failure"),
            TwinError::BadLength(len) => write!(f, "unsupported transaction length {len}"),
        }
    }
}

impl core::error::Error for TwinError {}

const CHANNELS: usize = 8;

/// Behavioral model of one ADC.
#[derive(Debug, Clone)]
pub struct AdcTwin {
    resolution_bits: u32,
    channel_count: u8,
    inputs: [u16; CHANNELS],
    temperature: u16,
    /// CFG governing the conversion in progress.
    cfg_conv: CfgReg,
    /// CFG that governed the previous conversion; its RB bit decides whether
    /// the next transaction carries an echo.
    cfg_prev: CfgReg,
    /// Left-aligned 16-bit result of the conversion in progress.
    result: u16,
    /// Position in the sequencer scan. `inx + 1` stands for the temperature slot.
    seq_pos: u8,
    transfers: usize,
    fail_at: Option<usize>,
}

impl AdcTwin {
    /// A freshly powered part. `resolution_bits` is 16 or 14; any other
    /// width is modeled as 16.
    pub fn new(resolution_bits: u32, channel_count: u8) -> Self {
        Self {
            resolution_bits: if resolution_bits == 14 { 14 } else { 16 },
            channel_count: channel_count.clamp(1, CHANNELS as u8),
            inputs: [0; CHANNELS],
            temperature: 0,
            cfg_conv: CfgReg::default(),
            cfg_prev: CfgReg::default(),
            result: 0,
            seq_pos: 0,
            transfers: 0,
            fail_at: None,
        }
    }

    /// Set the code an input converts to, as a left-aligned 16-bit value.
    /// The 14-bit part drops the two least significant bits.
    pub fn set_input(&mut self, channel: u8, code: u16) {
        if let Some(slot) = self.inputs.get_mut(usize::from(channel)) {
            *slot = code;
        }
    }

    /// Set the code the temperature sensor converts to.
    pub fn set_temperature(&mut self, code: u16) {
        self.temperature = code;
    }

    /// Make the transaction with zero-based index `index` fail without
    /// touching the device state.
    pub fn fail_transfer(&mut self, index: usize) {
        self.fail_at = Some(index);
    }

    /// Number of transactions attempted so far, failed ones included.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// CFG governing the conversion in progress.
    pub fn cfg(&self) -> CfgReg {
        self.cfg_conv
    }

    fn readback_enabled(&self) -> bool {
        // RB is active low.
        !self.cfg_prev.rb()
    }

    /// Bits shifted out, MSB first: result, optional echo, idle zeros.
    fn output_stream(&self) -> u32 {
        let data_bits = self.resolution_bits;
        let data = u32::from(self.result >> (16 - data_bits));
        let mut stream = data << (32 - data_bits);
        if self.readback_enabled() {
            stream |= u32::from(self.cfg_conv.to_raw()) << (32 - data_bits - WORD_BITS);
        }
        stream
    }

    fn input_code(&self, channel: u8) -> u16 {
        self.inputs[usize::from(channel % self.channel_count)]
    }

    /// Pick the source for the next conversion and sample it.
    fn convert(&mut self) {
        let cfg = self.cfg_conv;
        let inx = cfg.inx();
        let temp_slot = inx + 1;

        // Sensor powered down by the REF selection reads as zero.
        let temperature = match cfg.reference() {
            Ok(r) if r.temperature_sensor_enabled() => self.temperature,
            _ => 0,
        };

        if cfg.incc() == Ok(InccE::TemperatureSensor) {
            self.result = temperature;
            return;
        }

        self.result = match cfg.seq() {
            SeqE::Disable | SeqE::UpdateCfg => self.input_code(inx),
            SeqE::ScanAll => {
                let ch = self.seq_pos;
                self.seq_pos = if ch >= inx { 0 } else { ch + 1 };
                self.input_code(ch)
            }
            SeqE::ScanAllThenTemp => {
                let pos = self.seq_pos;
                self.seq_pos = if pos >= temp_slot { 0 } else { pos + 1 };
                if pos == temp_slot {
                    temperature
                } else {
                    self.input_code(pos)
                }
            }
        };
    }
}

impl AdcTransport for AdcTwin {
    type Error = TwinError;

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let index = self.transfers;
        self.transfers += 1;
        if self.fail_at == Some(index) {
            log::trace!("twin: transaction {index} fails");
            return Err(TwinError::Injected);
        }
        if buf.len() != 2 && buf.len() != 4 {
            return Err(TwinError::BadLength(buf.len()));
        }

        let word = CfgReg::from_raw(u16::from_be_bytes([buf[0], buf[1]]) >> PAD_BITS);
        let out = self.output_stream().to_be_bytes();
        let len = buf.len();
        buf.copy_from_slice(&out[..len]);

        self.cfg_prev = self.cfg_conv;
        if word.cfg() {
            log::trace!("twin: CFG <= 0x{:04X}", word.to_raw());
            self.cfg_conv = word;
            self.seq_pos = 0;
        }
        self.convert();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zjc2103_registers::components::zjc_regs::cfg::reference::RefE;

    fn cfg_word(reg: CfgReg) -> [u8; 2] {
        (reg.to_raw() << PAD_BITS).to_be_bytes()
    }

    fn single_channel(inx: u8, rb_enabled: bool) -> CfgReg {
        let mut reg = CfgReg::default();
        reg.set_seq(SeqE::Disable);
        reg.set_inx(inx);
        reg.set_rb(!rb_enabled);
        reg
    }

    #[test]
    fn written_cfg_governs_the_next_result() {
        let mut twin = AdcTwin::new(16, 8);
        twin.set_input(2, 0x1234);

        let mut buf = cfg_word(single_channel(2, false));
        twin.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0, 0]);

        let mut buf = [0u8; 2];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x34]);
        assert_eq!(twin.transfers(), 2);
    }

    #[test]
    fn echo_appears_two_transactions_after_enabling() {
        let mut twin = AdcTwin::new(16, 8);
        let cfg = single_channel(0, true);

        let mut buf = [0u8; 4];
        buf[..2].copy_from_slice(&cfg_word(cfg));
        twin.transfer(&mut buf).unwrap();
        // Power-on CFG has readback disabled.
        assert_eq!(&buf[2..], &[0, 0]);

        let mut buf = [0u8; 4];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(&buf[2..], &[0, 0]);

        let mut buf = [0u8; 4];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(u16::from_be_bytes([buf[2], buf[3]]), cfg.to_raw() << 2);
    }

    #[test]
    fn fourteen_bit_part_shifts_echo_two_bits_earlier() {
        let mut twin = AdcTwin::new(14, 8);
        let cfg = single_channel(1, true);
        twin.set_input(1, 0x4008);

        for _ in 0..3 {
            let mut buf = [0u8; 4];
            buf[..2].copy_from_slice(&cfg_word(cfg));
            twin.transfer(&mut buf).unwrap();
        }
        let mut buf = [0u8; 4];
        twin.transfer(&mut buf).unwrap();

        let stream = u32::from_be_bytes(buf);
        assert_eq!(stream >> 18, 0x4008 >> 2);
        assert_eq!((stream >> 4) & 0x3FFF, u32::from(cfg.to_raw()));
        assert_eq!(stream & 0xF, 0);
    }

    #[test]
    fn sequencer_scans_then_reads_temperature() {
        let mut twin = AdcTwin::new(16, 8);
        for ch in 0..3 {
            twin.set_input(ch, 0x100 * u16::from(ch + 1));
        }
        twin.set_temperature(0x0ABC);
        let mut cfg = single_channel(2, false);
        cfg.set_seq(SeqE::ScanAllThenTemp);
        cfg.set_reference(RefE::Internal2p5V);

        let mut buf = cfg_word(cfg);
        twin.transfer(&mut buf).unwrap();

        let mut seen = Vec::new();
        for _ in 0..5 {
            let mut buf = [0u8; 2];
            twin.transfer(&mut buf).unwrap();
            seen.push(u16::from_be_bytes(buf));
        }
        assert_eq!(seen, vec![0x100, 0x200, 0x300, 0x0ABC, 0x100]);
    }

    #[test]
    fn temperature_reads_zero_with_sensor_powered_down() {
        let mut twin = AdcTwin::new(16, 8);
        twin.set_temperature(0x0ABC);
        let mut cfg = single_channel(0, false);
        cfg.set_incc(InccE::TemperatureSensor);
        cfg.set_reference(RefE::External);

        let mut buf = cfg_word(cfg);
        twin.transfer(&mut buf).unwrap();
        let mut buf = [0u8; 2];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0, 0]);

        cfg.set_reference(RefE::ExternalTemp);
        let mut buf = cfg_word(cfg);
        twin.transfer(&mut buf).unwrap();
        let mut buf = [0u8; 2];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0x0A, 0xBC]);
    }

    #[test]
    fn four_channel_part_wraps_channel_select() {
        let mut twin = AdcTwin::new(16, 4);
        twin.set_input(1, 0x7777);

        let mut buf = cfg_word(single_channel(5, false));
        twin.transfer(&mut buf).unwrap();
        let mut buf = [0u8; 2];
        twin.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0x77, 0x77]);
    }

    #[test]
    fn injected_failure_leaves_state_alone() {
        let mut twin = AdcTwin::new(16, 8);
        twin.fail_transfer(0);
        let before = twin.cfg();

        let mut buf = cfg_word(single_channel(3, true));
        assert_eq!(twin.transfer(&mut buf), Err(TwinError::Injected));
        assert_eq!(twin.cfg(), before);
        assert_eq!(twin.transfers(), 1);

        twin.transfer(&mut buf).unwrap();
        assert_eq!(twin.cfg().inx(), 3);
    }

    #[test]
    fn unsupported_width_converts_as_sixteen_bits() {
        for bits in [0, 15, 32] {
            let mut twin = AdcTwin::new(bits, 8);
            twin.set_input(0, 0xBEEF);

            let mut buf = cfg_word(single_channel(0, false));
            twin.transfer(&mut buf).unwrap();
            let mut buf = [0u8; 2];
            twin.transfer(&mut buf).unwrap();
            assert_eq!(buf, [0xBE, 0xEF]);
        }
    }

    #[test]
    fn rejects_odd_lengths() {
        let mut twin = AdcTwin::new(16, 8);
        let mut buf = [0u8; 3];
        assert_eq!(twin.transfer(&mut buf), Err(TwinError::BadLength(3)));
    }
}
