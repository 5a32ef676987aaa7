use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use dsfdem::utils::logger::Logger;
use dsfdem::commands::{CommandFactory, DsfDemCommandFactory};

fn main() {
    let matches = ClapCommand::new("dsfdem")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the elevation model of an X-Plane DSF tile as a grayscale raster")
        .arg(
            Arg::new("input")
                .help("Input DSF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output raster (.png, .tif, .raw/.r16)")
                .value_name("FILE")
                .required_unless_present("info"),
        )
        .arg(
            Arg::new("bits")
                .short('b')
                .long("bits")
                .help("Output sample depth (8 or 16)")
                .value_name("BITS")
                .default_value("8"),
        )
        .arg(
            Arg::new("trim")
                .short('t')
                .long("trim")
                .help("Drop the last row and column shared with neighbouring tiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Describe the DSF atoms and DEM instead of extracting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let logger = match Logger::new("dsfdem.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("dsfdem-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = DsfDemCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
