use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "breach-check")]
#[command(version, about = "Check email addresses against the Have I Been Pwned database", long_about = None)]
pub struct Cli {
    /// File containing emails to check (one per line or mixed with other text)
    #[arg(short, long)]
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
