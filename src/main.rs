mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use music_group::{Report, load_catalog_from_path};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let group = match load_catalog_from_path(&cli.catalog) {
        Ok(group) => group,
        Err(e) => {
            error!("Failed to load {:?}: {}", cli.catalog, e);
            return ExitCode::FAILURE;
        }
    };

    let report = Report::new(&group, cli.year);

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report);
    }

    ExitCode::SUCCESS
}
