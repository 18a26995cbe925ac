// Defaults match the reference oracle scale: a corpus that is still a
// tractable single in-memory pass on commodity hardware.
pub const DEFAULT_CORPUS_SIZE: usize = 1_000_000;
pub const DEFAULT_TOKEN_VOCAB_SIZE: u32 = 10_000;
pub const DEFAULT_PHRASE_VOCAB_SIZE: usize = 500;
pub const DEFAULT_MAX_PHRASE_LEN: usize = 5;
pub const DEFAULT_LINE_BREAK_DENOMINATOR: u32 = 50;

pub const DEFAULT_SEED: u64 = 42;

// Attempt budget per requested phrase before construction gives up.
// Duplicate draws are discarded, so a target close to the reachable
// tuple space can stall; this converts a hang into a config error.
pub const PHRASE_ATTEMPTS_PER_TARGET: usize = 1_000;
