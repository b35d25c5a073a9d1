extern crate chrono;
extern crate serde_derive;

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod reporter;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::app::App;
use self::{
    configuration::command_line::{LogLevel, Opt},
    configuration::manifest::Manifest,
};

fn main() {
    let options = Opt::from_args();

    init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    );

    let manifest = match options.expectations {
        Some(file) => match Manifest::from(file) {
            Ok(manifest) => {
                debug!("Loaded expectations {:#?}", manifest);
                Some(manifest)
            }
            Err(e) => {
                error!("Failed to load expectations file {}", e);
                exit(2);
            }
        },
        None => None,
    };

    let app = App::new(manifest);
    if let Err(e) = app.run(&options.file) {
        error!("{}", e);
        exit(1);
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        match fern::log_file(log_file) {
            Ok(file) => dispatcher = dispatcher.chain(file),
            Err(e) => {
                eprintln!("Cannot open log output file: {}", e);
                exit(2);
            }
        }
    }
    if dispatcher.apply().is_ok() {
        debug!("Logging level {} enabled", level);
    }
}
