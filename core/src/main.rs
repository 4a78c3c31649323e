use clap::Parser;
use log::{error, info};
use scenetab_core::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.input.is_dir() {
        eprintln!("Error: {} is not a directory", cli.input.display());
        process::exit(1);
    }

    if let Err(e) = std::fs::create_dir_all(&cli.output) {
        error!("Failed to create output directory: {}", e);
        eprintln!(
            "Error: cannot create output directory {}: {}",
            cli.output.display(),
            e
        );
        process::exit(1);
    }

    info!("Processing directory: {}", cli.input.display());

    match scenetab_core::run(&cli.input, &cli.output) {
        Ok(tables) => {
            println!(
                "Wrote {} records, {} visit rows, {} topic rows to {}",
                tables.wide.len(),
                tables.lung_attribute_mapping.len(),
                tables.topic_model.len(),
                cli.output.display()
            );
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
