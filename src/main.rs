use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic corpus and its ground-truth frequency table.
    Generate(cmd::generate::GenerateArgs),
    /// Compare a counter's frequency table against the ground truth.
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
