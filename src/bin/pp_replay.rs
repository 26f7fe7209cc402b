//! Replay position events through the overlay on a headless chart
//!
//! Run with: cargo run --bin pp_replay -- config.toml events.jsonl [SYMBOL]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use pp_overlay::runner::ReplayRunner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let default_config = "config.toml".to_string();
    let config_path = args.get(1).unwrap_or(&default_config);
    let Some(events_path) = args.get(2) else {
        eprintln!("Usage: pp_replay <config.toml> <events.jsonl> [SYMBOL]");
        std::process::exit(1);
    };
    let symbol = args.get(3).map(String::as_str).unwrap_or("pp");

    for path in [config_path, events_path] {
        if !Path::new(path).exists() {
            eprintln!("File '{}' not found.", path);
            std::process::exit(1);
        }
    }

    let runner = ReplayRunner::new(config_path)?;
    runner.init_logging();
    info!("Loaded config from {}", config_path);

    let input = BufReader::new(File::open(events_path)?);
    match runner.run(symbol, input) {
        Ok(snapshots) => {
            for snapshot in snapshots {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
        Err(e) => {
            eprintln!("Replay error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
