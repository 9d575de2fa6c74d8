//! PC host for the ZJC2103 ADC driver.
//!
//! Single-threaded: builds a device twin from the command line, brings it up
//! through the same driver the embedded targets use, and prints either the
//! CFG readback or a run of conversion results.

mod cli;
mod error;

use std::process;

use clap::Parser;
use zjc2103_core::adc::{AdcDriver, InitParam};
use zjc2103_twin::AdcTwin;

use cli::{Cli, Commands, DeviceArgs};
use error::PcError;

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let result = open(&cli.device).and_then(|mut driver| {
        let output = run(&mut driver, &cli.command)?;
        AdcDriver::remove(Some(driver))?;
        Ok(output)
    });

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Build the twin and initialize the driver on it.
fn open(device: &DeviceArgs) -> Result<AdcDriver<AdcTwin>, PcError> {
    let variant = device.part.variant();
    if device.channel >= variant.channel_count() {
        return Err(PcError::ChannelOutOfRange {
            channel: device.channel,
            part: variant,
            count: variant.channel_count(),
        });
    }

    let mut twin = AdcTwin::new(variant.resolution_bits(), variant.channel_count());
    for &(channel, code) in &device.inputs {
        if channel >= variant.channel_count() {
            return Err(PcError::InputOutOfRange {
                channel,
                part: variant,
            });
        }
        twin.set_input(channel, code);
    }
    twin.set_temperature(device.temperature);

    let param = InitParam {
        id: variant.id(),
        config: device.register_config(),
    };
    let driver = AdcDriver::init(&param, || Ok(twin))?;
    log::info!("{} initialized", driver.name());
    Ok(driver)
}

/// Execute one command and return the lines to print.
fn run(driver: &mut AdcDriver<AdcTwin>, command: &Commands) -> Result<Vec<String>, PcError> {
    match command {
        Commands::Config => {
            let config = driver.read_config()?;
            Ok(vec![format!("{config:#?}")])
        }
        Commands::Sample { count } => {
            let mut samples = vec![0i16; *count];
            driver.read(&mut samples, *count)?;
            log::info!("{} read {} samples", driver.name(), count);
            Ok(samples.iter().map(|s| s.to_string()).collect())
        }
    }
}
