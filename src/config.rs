use crate::consts;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Generation knobs for one oracle run. Flattened into the `generate`
/// subcommand; also loadable from a JSON file for saved test profiles.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenParams {
    #[arg(long, default_value_t = consts::DEFAULT_CORPUS_SIZE)]
    pub corpus_size: usize,

    #[arg(long, default_value_t = consts::DEFAULT_TOKEN_VOCAB_SIZE)]
    pub token_vocab_size: u32,

    #[arg(long, default_value_t = consts::DEFAULT_PHRASE_VOCAB_SIZE)]
    pub phrase_vocab_size: usize,

    #[arg(long, default_value_t = consts::DEFAULT_MAX_PHRASE_LEN)]
    pub max_phrase_len: usize,

    /// Denominator N for the 1/N per-item line-break chance.
    #[arg(long, default_value_t = consts::DEFAULT_LINE_BREAK_DENOMINATOR)]
    pub line_break_denominator: u32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            corpus_size: consts::DEFAULT_CORPUS_SIZE,
            token_vocab_size: consts::DEFAULT_TOKEN_VOCAB_SIZE,
            phrase_vocab_size: consts::DEFAULT_PHRASE_VOCAB_SIZE,
            max_phrase_len: consts::DEFAULT_MAX_PHRASE_LEN,
            line_break_denominator: consts::DEFAULT_LINE_BREAK_DENOMINATOR,
        }
    }
}

impl GenParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("❌ Failed to read params file: {}", e));

        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("❌ Failed to parse params JSON: {}", e))
    }
}
