//! Command line surface of the host tool.

use clap::{Args, Parser, Subcommand, ValueEnum};
use zjc2103_core::adc::{BwE, DeviceVariant, InccE, RefE, RegisterConfig, SeqE};

#[derive(Parser, Debug)]
#[command(name = "zjc2103-pc")]
#[command(about = "Exercise the ZJC2103 ADC driver against the device twin", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub device: DeviceArgs,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read back the CFG register in effect
    Config,
    /// Read conversion results, one per line
    Sample {
        /// Number of samples
        #[arg(short = 'n', long, default_value = "8")]
        count: usize,
    },
}

/// Part selection, CFG contents and simulated input levels.
#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// Part number
    #[arg(long, value_enum, global = true, default_value_t = Part::Zjc2103_16)]
    pub part: Part,

    /// Input channel configuration
    #[arg(long, value_enum, global = true, default_value_t = InputMode::UnipolarGnd)]
    pub incc: InputMode,

    /// Channel select (last channel when scanning)
    #[arg(long, global = true, default_value = "0")]
    pub channel: u8,

    /// Limit the input filter to a quarter of the full bandwidth
    #[arg(long, global = true)]
    pub quarter_bandwidth: bool,

    /// Reference and buffer selection
    #[arg(long = "ref", value_enum, global = true, default_value_t = Reference::Int4v096)]
    pub reference: Reference,

    /// Channel sequencer mode
    #[arg(long, value_enum, global = true, default_value_t = Sequencer::Off)]
    pub seq: Sequencer,

    /// Keep CFG readback enabled
    #[arg(long, global = true)]
    pub readback: bool,

    /// Twin input level as CHANNEL=CODE (16-bit left-aligned code, hex with 0x)
    #[arg(long = "input", value_parser = parse_input, global = true)]
    pub inputs: Vec<(u8, u16)>,

    /// Twin temperature sensor code
    #[arg(long, value_parser = parse_code, global = true, default_value = "0")]
    pub temperature: u16,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    #[value(name = "zjc2103-16")]
    Zjc2103_16,
    #[value(name = "zjc2104-16")]
    Zjc2104_16,
    #[value(name = "zjc2103-14")]
    Zjc2103_14,
    #[value(name = "zjc2102-16")]
    Zjc2102_16,
}

impl Part {
    pub fn variant(self) -> DeviceVariant {
        match self {
            Part::Zjc2103_16 => DeviceVariant::Zjc2103_16,
            Part::Zjc2104_16 => DeviceVariant::Zjc2104_16,
            Part::Zjc2103_14 => DeviceVariant::Zjc2103_14,
            Part::Zjc2102_16 => DeviceVariant::Zjc2102_16,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    BipolarDiff,
    BipolarCom,
    Temperature,
    UnipolarDiff,
    UnipolarCom,
    UnipolarGnd,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    Int2v5,
    Int4v096,
    ExtTemp,
    ExtTempIbuf,
    Ext,
    ExtIbuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sequencer {
    Off,
    UpdateCfg,
    ScanTemp,
    Scan,
}

impl DeviceArgs {
    /// CFG written at initialization.
    pub fn register_config(&self) -> RegisterConfig {
        RegisterConfig {
            incc: match self.incc {
                InputMode::BipolarDiff => InccE::BipolarDifferentialPairs,
                InputMode::BipolarCom => InccE::BipolarCom,
                InputMode::Temperature => InccE::TemperatureSensor,
                InputMode::UnipolarDiff => InccE::UnipolarDifferentialPairs,
                InputMode::UnipolarCom => InccE::UnipolarCom,
                InputMode::UnipolarGnd => InccE::UnipolarGnd,
            },
            inx: self.channel,
            bw: if self.quarter_bandwidth {
                BwE::Quarter
            } else {
                BwE::Full
            },
            reference: match self.reference {
                Reference::Int2v5 => RefE::Internal2p5V,
                Reference::Int4v096 => RefE::Internal4p096V,
                Reference::ExtTemp => RefE::ExternalTemp,
                Reference::ExtTempIbuf => RefE::ExternalTempIbuf,
                Reference::Ext => RefE::External,
                Reference::ExtIbuf => RefE::Ibuf,
            },
            seq: match self.seq {
                Sequencer::Off => SeqE::Disable,
                Sequencer::UpdateCfg => SeqE::UpdateCfg,
                Sequencer::ScanTemp => SeqE::ScanAllThenTemp,
                Sequencer::Scan => SeqE::ScanAll,
            },
            rb: self.readback,
        }
    }
}

fn parse_code(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid code '{s}': {e}"))
}

fn parse_input(s: &str) -> Result<(u8, u16), String> {
    let (channel, code) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHANNEL=CODE, got '{s}'"))?;
    let channel = channel
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid channel '{channel}': {e}"))?;
    Ok((channel, parse_code(code.trim())?))
}
