// src/main.rs

use std::time::Instant;

use tracing::info;

use waveplan::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("waveplan error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    cli::validate(&args)?;

    info!(
        input = ?args.input,
        max_workers = %args.max_workers,
        output = ?args.output,
        "waveplan starts"
    );
    let started = Instant::now();

    let waves = run(&args)?;

    info!(waves, elapsed = ?started.elapsed(), "waveplan ends");
    Ok(())
}
