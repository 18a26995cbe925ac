use crate::consts::PHRASE_ATTEMPTS_PER_TARGET;
use crate::error::{CfResult, CorpusForgeError};
use fastrand::Rng;
use std::collections::HashSet;
use tracing::info;

/// Ordered token ids `0..size`. Fixed at generation start.
pub fn build_vocabulary(size: u32) -> Vec<u32> {
    (0..size).collect()
}

/// Draws one token id with the reference skew shape: uniform candidate,
/// then odd ids donate mass to their even neighbor (1/2 keep-chance when
/// divisible by 3, 1/3 otherwise). This stresses counters against a
/// long-tailed key distribution instead of a flat one.
///
/// The `x - 1` branches only trigger for odd `x`, so `x >= 1` and the
/// result never underflows. Keep that property if the shape ever changes.
pub fn sample_token(rng: &mut Rng, vocab: &[u32]) -> u32 {
    let x = vocab[rng.usize(0..vocab.len())];
    if x % 2 == 0 {
        x
    } else if x % 3 == 0 {
        if rng.u32(1..=2) == 1 {
            x
        } else {
            x - 1
        }
    } else if rng.u32(1..=3) == 1 {
        x
    } else {
        x - 1
    }
}

/// Distinct multi-word tuples, selectable by index. Insertion order is
/// retained so a fixed seed reproduces the same table (a bare HashSet
/// would randomize phrase selection across runs).
#[derive(Debug, Clone)]
pub struct PhraseTable {
    phrases: Vec<Vec<u32>>,
}

impl PhraseTable {
    /// Draws random-length tuples via `sample_token` until `target_count`
    /// distinct ones exist. Duplicate draws are discarded and do not count
    /// toward progress, so the loop is bounded by an attempt budget:
    /// exceeding it is a configuration error, not a hang.
    pub fn build(
        rng: &mut Rng,
        vocab: &[u32],
        target_count: usize,
        max_phrase_len: usize,
    ) -> CfResult<Self> {
        if target_count > 0 && (vocab.is_empty() || max_phrase_len == 0) {
            return Err(CorpusForgeError::Config(format!(
                "Cannot build {} phrases from vocab of {} with max length {}",
                target_count,
                vocab.len(),
                max_phrase_len
            )));
        }

        let budget = target_count.saturating_mul(PHRASE_ATTEMPTS_PER_TARGET);
        let mut seen: HashSet<Vec<u32>> = HashSet::with_capacity(target_count);
        let mut phrases: Vec<Vec<u32>> = Vec::with_capacity(target_count);
        let mut attempts = 0;

        while phrases.len() < target_count {
            if attempts >= budget {
                return Err(CorpusForgeError::Config(format!(
                    "Phrase table stalled at {}/{} distinct tuples after {} draws. \
                     Target likely exceeds the reachable tuple space.",
                    phrases.len(),
                    target_count,
                    attempts
                )));
            }
            attempts += 1;

            let len = rng.usize(1..=max_phrase_len);
            let tuple: Vec<u32> = (0..len).map(|_| sample_token(rng, vocab)).collect();

            if seen.insert(tuple.clone()) {
                phrases.push(tuple);
            }
        }

        info!(
            "Phrase table built: {} distinct tuples in {} draws",
            phrases.len(),
            attempts
        );

        Ok(Self { phrases })
    }

    /// Direct construction from explicit tuples. Duplicates collapse;
    /// empty tuples are rejected (they would render as an empty surface form).
    pub fn from_tuples<I>(tuples: I) -> CfResult<Self>
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        let mut seen: HashSet<Vec<u32>> = HashSet::new();
        let mut phrases = Vec::new();
        for tuple in tuples {
            if tuple.is_empty() {
                return Err(CorpusForgeError::Config(
                    "Phrase tuples must contain at least one token".to_string(),
                ));
            }
            if seen.insert(tuple.clone()) {
                phrases.push(tuple);
            }
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, idx: usize) -> &[u32] {
        &self.phrases[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.phrases.iter().map(|p| p.as_slice())
    }
}

/// One corpus position: a bare token or a reference into the phrase table.
/// Transient; only its surface form outlives the emission step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Token(u32),
    Phrase(&'a [u32]),
}

impl Item<'_> {
    /// Textual encoding: a token is its decimal id; a phrase is its ids
    /// joined by `_` with a trailing `_`. The trailing separator keeps
    /// phrase forms disjoint from every bare-token decimal string.
    pub fn surface(&self) -> String {
        match self {
            Item::Token(id) => id.to_string(),
            Item::Phrase(ids) => {
                let mut s = String::with_capacity(ids.len() * 4);
                for id in *ids {
                    s.push_str(&id.to_string());
                    s.push('_');
                }
                s
            }
        }
    }
}

/// Weighted flip between a skewed bare token and a uniform phrase, with
/// weights proportional to vocabulary size vs phrase table size. Models
/// multi-word expressions being rarer than single tokens but still common.
pub fn sample_item<'a>(rng: &mut Rng, vocab: &[u32], phrases: &'a PhraseTable) -> Item<'a> {
    let total = vocab.len() + phrases.len();
    if !phrases.is_empty() && rng.usize(1..=total) > vocab.len() {
        Item::Phrase(phrases.get(rng.usize(0..phrases.len())))
    } else {
        Item::Token(sample_token(rng, vocab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_ids_pass_through() {
        let mut rng = Rng::with_seed(42);
        let vocab = vec![4];
        for _ in 0..100 {
            assert_eq!(sample_token(&mut rng, &vocab), 4);
        }
    }

    #[test]
    fn test_odd_ids_fall_back_to_even_neighbor() {
        let mut rng = Rng::with_seed(42);
        let vocab = vec![7];
        for _ in 0..200 {
            let t = sample_token(&mut rng, &vocab);
            assert!(t == 7 || t == 6, "Unexpected token {}", t);
        }
    }

    #[test]
    fn test_surface_forms() {
        assert_eq!(Item::Token(17).surface(), "17");
        assert_eq!(Item::Phrase(&[1, 2]).surface(), "1_2_");
        assert_eq!(Item::Phrase(&[3, 4, 5]).surface(), "3_4_5_");
    }

    #[test]
    fn test_unreachable_phrase_target_errors() {
        let mut rng = Rng::with_seed(42);
        // vocab {0}, length 1: exactly one distinct tuple exists.
        let err = PhraseTable::build(&mut rng, &[0], 2, 1);
        assert!(matches!(err, Err(CorpusForgeError::Config(_))));
    }
}
