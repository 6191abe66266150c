use std::process::ExitCode;

use edgemap::config::EdgeMapConfig;
use edgemap::io::{geojson, series};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: edgemap <series.(csv|parquet)> <edges.geojson>");
        return ExitCode::from(2);
    }

    let series = match series::load_series_from_path(&args[1]) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("edgemap: {e}");
            return ExitCode::FAILURE;
        }
    };
    let network = match geojson::load_edges_from_path(&args[2], geojson::DEFAULT_ID_PROPERTY) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("edgemap: {e}");
            return ExitCode::FAILURE;
        }
    };

    match edgemap::run_edgemap(series, network, EdgeMapConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("edgemap: {e}");
            ExitCode::FAILURE
        }
    }
}
