mod cli;

use clap::Parser;
use log::{error, info};

use aes256_bruteforce::search::{self, HexDumpReporter, SearchConfig};
use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let ciphertext = match hex::decode(&cli.ciphertext) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("invalid --ciphertext: {e}");
            std::process::exit(1);
        }
    };

    let config = match SearchConfig::new(
        cli.mode,
        cli.mask,
        &ciphertext,
        cli.portable_only,
        cli.threads,
    ) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "starting search: mode={:?} mask={} workers={}",
        config.mode,
        config.use_prng_mask,
        config.worker_count()
    );

    let reporter = HexDumpReporter::new();
    let stats = search::run(&config, &reporter, None);

    info!(
        "search complete: counters={} candidates={} hits={}",
        stats.counters_evaluated, stats.candidates_evaluated, stats.hits
    );
}
