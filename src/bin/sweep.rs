use std::path::PathBuf;

use queen_pawns::config::SweepConfig;
use queen_pawns::search::sweep::sweep;
use queen_pawns::Engine;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let cfg = match args.len() {
        1 => SweepConfig::default(),
        2 => match SweepConfig::from_json_file(&PathBuf::from(&args[1])) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        _ => {
            eprintln!("Usage: sweep [config.json]");
            std::process::exit(2);
        }
    };

    let mut engine = Engine::new();
    let report = match sweep(&mut engine, &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Sweep failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}
