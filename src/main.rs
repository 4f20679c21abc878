use std::io::stdout;

use log::{error, warn};
use crate::material::SynonymTable;

mod aggregator;
mod csv_utils;
mod material;
mod report;
mod types;

fn main() {
    env_logger::init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() != 2 {
        error!("Usage: {} <CSV file> | --guidance", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--guidance" {
        if let Err(e) = report::save(stdout(), &report::epr_guidance()) {
            error!("Error while writing guidance: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // The whole upload fits in memory; the reader parses the buffer directly.
    let content = match std::fs::read(&args[1]) {
        Ok(content) => content,
        Err(e) => {
            error!("Cannot read {}: {}", args[1], e);
            std::process::exit(1);
        }
    };

    let rows = match csv_utils::read_rows(content.as_slice()) {
        Ok(rows) => rows,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let table = SynonymTable::builtin();
    let result = aggregator::aggregate(&table, rows);

    for invalid in &result.invalid_rows {
        warn!(
            "{}: material={:?} weight={:?}",
            invalid.message, invalid.row.material, invalid.row.weight
        );
    }

    if let Err(e) = report::save(stdout(), &report::build(result)) {
        error!("Error while writing report: {}", e);
        std::process::exit(1);
    }
}
