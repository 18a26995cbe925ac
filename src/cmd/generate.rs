use crate::reports;
use clap::Args;
use corpusforge::config::GenParams;
use corpusforge::consts;
use corpusforge::emitter;
use corpusforge::error::CfResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: GenParams,

    /// Output corpus file.
    #[arg(short, long, default_value = "corpus.txt")]
    pub corpus: String,

    /// Output ground-truth frequency table.
    #[arg(short, long, default_value = "correct_vocab_count.txt")]
    pub truth: String,

    /// Seed for all sampling and separator randomness. Fixed by default
    /// so repeated runs reproduce the same corpus; override per run.
    #[arg(short = 'S', long, default_value_t = consts::DEFAULT_SEED)]
    pub seed: u64,

    /// JSON params file; takes precedence over individual CLI flags.
    #[arg(long)]
    pub params_file: Option<String>,
}

pub fn run(args: GenerateArgs) -> CfResult<bool> {
    let params = if let Some(path) = &args.params_file {
        info!("⚖️  Loading params from: {}", path);
        GenParams::load_from_file(path)
    } else {
        args.params.clone()
    };

    info!(
        "🚀 Generating corpus → {} (truth → {})",
        args.corpus, args.truth
    );

    let table = emitter::generate_to_files(&params, args.seed, &args.corpus, &args.truth)?;

    reports::print_generation_summary(&table, &params);
    Ok(true)
}
