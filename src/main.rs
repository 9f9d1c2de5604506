mod config;
mod emit;
mod error;
mod interrupts;
mod layout;
mod model;
mod util;

use std::io::prelude::*;
use clap::Parser;
use clap::AppSettings;
use anyhow::{Result, Context};
use env_logger::fmt::Color;
use log::LevelFilter;

use config::Config;
use interrupts::InterruptTable;
use model::DeviceModel;
use util::read_file_str;

#[macro_use]
extern crate log;

/// Generate chip specific code from a CMSIS-SVD definition
#[derive(Parser, Debug)]
#[clap(
    global_setting(AppSettings::DeriveDisplayOrder)
)]
pub struct Args {
    /// Config file
    config: String,

    /// Verbosity. Can be repeated
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logging(level: u8) {
    let lf = match level {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(lf)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                log::Level::Error => style.set_color(Color::Red).set_intense(true).value("ERROR"),
                log::Level::Warn =>  style.set_color(Color::Yellow).set_intense(true).value("WARN "),
                log::Level::Info =>  style.set_color(Color::Green).set_intense(true).value("INFO "),
                log::Level::Debug => style.set_color(Color::Cyan).set_intense(true).value("DEBUG"),
                log::Level::Trace => style.set_color(Color::Blue).set_intense(true).value("TRACE"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config: Config = serde_yaml::from_str(&read_file_str(&args.config)?)
        .with_context(|| format!("Failed to parse {}", args.config))?;

    let device = svd_parser::parse(&read_file_str(&config.svd)?)
        .with_context(|| format!("Failed to parse {}", config.svd))?;

    let model = DeviceModel::from_svd(&device);
    debug!("Loaded {} peripherals from {}", model.peripherals.len(), config.svd);

    // Both outputs are computed in full before anything is written, so a bad
    // SVD never leaves a half-generated file behind.
    let table = InterruptTable::build(&model)?;
    let layouts = layout::build_layouts(&model, &config.peripherals)?;

    let header = emit::render_interrupt_header(&table);
    let structs = emit::render_register_structs(&layouts);

    info!("Writing {}", config.output.interrupts);
    util::write_file(&config.output.interrupts, &header)?;

    info!("Writing {}", config.output.registers);
    util::write_file(&config.output.registers, &structs)?;

    Ok(())
}
