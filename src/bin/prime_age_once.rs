use clap::Parser;
use prime_age::utils::logger;
use prime_age::{run_once, OnceArgs, PrimeAgeEngine, PrimeAgeError, SystemClock};
use std::io;

fn main() {
    let args = OnceArgs::parse();

    logger::init_cli_logger(args.verbose);

    match run(&args) {
        Ok(year) => tracing::debug!(year, "done"),
        Err(e) => {
            tracing::error!("prime-age-once failed: {:#}", e);
            eprintln!("{:#}", e);
            let exit_code = e
                .downcast_ref::<PrimeAgeError>()
                .map_or(1, PrimeAgeError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &OnceArgs) -> anyhow::Result<i64> {
    let engine = PrimeAgeEngine::new(SystemClock);
    let answer = run_once(&engine, &args.years, io::stdout().lock())?;
    Ok(answer.year)
}
