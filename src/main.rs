use clap::Parser;
use prime_age::utils::logger;
use prime_age::{run_interactive, CliConfig, PrimeAgeEngine, PrimeAgeError, SystemClock};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run() {
        tracing::error!("prime-age failed: {:#}", e);
        eprintln!("{:#}", e);
        let exit_code = e
            .downcast_ref::<PrimeAgeError>()
            .map_or(1, PrimeAgeError::exit_code);
        std::process::exit(exit_code);
    }
}

fn run() -> anyhow::Result<()> {
    let engine = PrimeAgeEngine::new(SystemClock);
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_interactive(&engine, stdin.lock(), stdout.lock())?;
    Ok(())
}
