use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "prime-age")]
#[command(version)]
#[command(about = "Reads birth years from stdin and prints the year of the next prime age")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "prime-age-once")]
#[command(version)]
#[command(about = "Prints the year of the next prime age for one birth year")]
pub struct OnceArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Birth year. Collected as a list so a wrong count gets its own message.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub years: Vec<String>,
}
