use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgMatches, Command};
use sleigh_importer::{check_document, make_document, read_gifts, write_document};
use sleigh_structs::config::ReaderConfig;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

fn cli() -> Command {
    Command::new("sleigh")
        .about("Charts an OptaPlanner <VrpTimeWindowedVehicleRoutingSolution> XML file from a gifts CSV file")
        .arg_required_else_help(true)
        .arg(
            arg!(<CSV> "The CSV file to convert")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(<XML> "The <VrpTimeWindowedVehicleRoutingSolution> file to be created")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let csv_path = matches
        .get_one::<PathBuf>("CSV")
        .ok_or_else(|| anyhow!("Missing CSV path"))?;
    let xml_path = matches
        .get_one::<PathBuf>("XML")
        .ok_or_else(|| anyhow!("Missing XML path"))?;
    convert(csv_path, xml_path, &ReaderConfig::default())
}

fn convert(csv_path: &Path, xml_path: &Path, config: &ReaderConfig) -> Result<()> {
    let gifts = read_gifts(csv_path, config)
        .with_context(|| format!("Failed to read gifts from {}", csv_path.display()))?;
    info!("read {} gifts from {}", gifts.len(), csv_path.display());

    let solution = make_document(&gifts)?;
    let summary = check_document(&solution)?;
    info!(
        "built {} locations, {} customers, {} depots, {} vehicles ({} identifiers)",
        summary.locations,
        summary.customers,
        summary.depots,
        summary.vehicles,
        summary.identifiers
    );

    write_document(&solution, xml_path)
        .with_context(|| format!("Failed to write {}", xml_path.display()))?;
    info!("wrote {}", xml_path.display());

    Ok(())
}
