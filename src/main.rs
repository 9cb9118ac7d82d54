use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use carvekit::utils::logger::Logger;
use carvekit::commands::{CommandFactory, CarvekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CarveKit")
        .version("0.1.0")
        .about("Extract embedded JPEG and PNG images from PDF files")
        .arg(
            Arg::new("input")
                .help("Input PDF file, or directory to scan recursively")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List detected images without writing any files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Root directory for extraction results")
                .value_name("DIR")
                .required(false),
        )
        .get_matches();

    let log_file = "carvekit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let verbose = matches.get_flag("verbose");
    if let Err(e) = Logger::init_global_logger("carvekit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CarvekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
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
