use crate::config::GenParams;
use crate::error::{CfResult, CorpusForgeError};
use crate::sampler::{build_vocabulary, sample_item, PhraseTable};
use crate::table::FrequencyTable;
use fastrand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Realizes `item_count` sampled items as a textual corpus while tallying
/// the authoritative frequency table in the same pass.
///
/// After each surface form, a line break is written with probability
/// `1/line_break_denominator`, otherwise a single space. Randomized breaks
/// force the counter under test to handle records split across arbitrary
/// line boundaries instead of assuming one line per record.
///
/// The table is owned here and returned at completion; a sink write failure
/// aborts the run, and the partial corpus must be discarded because corpus
/// and table are only consistent as a pair.
pub fn emit_corpus<W: Write>(
    sink: &mut W,
    rng: &mut Rng,
    vocab: &[u32],
    phrases: &PhraseTable,
    item_count: usize,
    line_break_denominator: u32,
) -> CfResult<FrequencyTable> {
    if vocab.is_empty() {
        return Err(CorpusForgeError::Config(
            "Cannot emit items from an empty vocabulary".to_string(),
        ));
    }
    if line_break_denominator == 0 {
        return Err(CorpusForgeError::Config(
            "Line-break denominator must be at least 1".to_string(),
        ));
    }

    let mut table = FrequencyTable::new();

    for _ in 0..item_count {
        let form = sample_item(rng, vocab, phrases).surface();

        sink.write_all(form.as_bytes())?;
        table.record(&form);

        if rng.u32(1..=line_break_denominator) == 1 {
            sink.write_all(b"\n")?;
        } else {
            sink.write_all(b" ")?;
        }
    }

    Ok(table)
}

/// Full generation run: build vocabulary and phrase table, emit the corpus,
/// save the ground-truth table. One consistent pass; there is no partial
/// recovery, a failed run restarts from scratch.
pub fn generate_to_files<P: AsRef<Path>>(
    params: &GenParams,
    seed: u64,
    corpus_path: P,
    table_path: P,
) -> CfResult<FrequencyTable> {
    if params.token_vocab_size == 0 {
        return Err(CorpusForgeError::Config(
            "Token vocabulary size must be at least 1".to_string(),
        ));
    }
    if params.line_break_denominator == 0 {
        return Err(CorpusForgeError::Config(
            "Line-break denominator must be at least 1".to_string(),
        ));
    }

    let mut rng = Rng::with_seed(seed);

    let vocab = build_vocabulary(params.token_vocab_size);
    let phrases = PhraseTable::build(
        &mut rng,
        &vocab,
        params.phrase_vocab_size,
        params.max_phrase_len,
    )?;

    info!(
        "Emitting {} items ({} tokens, {} phrases, seed {})",
        params.corpus_size,
        vocab.len(),
        phrases.len(),
        seed
    );

    let mut writer = BufWriter::new(File::create(corpus_path)?);
    let table = emit_corpus(
        &mut writer,
        &mut rng,
        &vocab,
        &phrases,
        params.corpus_size,
        params.line_break_denominator,
    )?;
    writer.flush()?;

    table.save(table_path)?;

    info!(
        "Ground truth saved: {} distinct forms, {} items",
        table.len(),
        table.total()
    );

    Ok(table)
}
