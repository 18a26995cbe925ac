use corpusforge::emitter::emit_corpus;
use corpusforge::sampler::{build_vocabulary, sample_token, PhraseTable};
use proptest::prelude::*;
use regex::Regex;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_sample_token_never_leaves_vocab(
        seed in any::<u64>(),
        vocab_size in 1u32..10_000,
    ) {
        let vocab = build_vocabulary(vocab_size);
        let mut rng = fastrand::Rng::with_seed(seed);

        for _ in 0..500 {
            let t = sample_token(&mut rng, &vocab);
            prop_assert!(t < vocab_size, "Token {} escaped vocab of {}", t, vocab_size);
        }
    }

    #[test]
    fn test_tally_sum_equals_item_count(
        seed in any::<u64>(),
        vocab_size in 4u32..200,
        item_count in 0usize..2_000,
        denom in 1u32..100,
        phrase_count in 0usize..3,
    ) {
        let vocab = build_vocabulary(vocab_size);
        let mut rng = fastrand::Rng::with_seed(seed);
        // Tiny target against a roomy tuple space, so construction
        // always terminates inside the attempt budget.
        let phrases = PhraseTable::build(&mut rng, &vocab, phrase_count, 3).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        let table = emit_corpus(&mut sink, &mut rng, &vocab, &phrases, item_count, denom).unwrap();

        prop_assert_eq!(table.total(), item_count as u64);

        let emitted_forms = String::from_utf8(sink)
            .unwrap()
            .split_whitespace()
            .count();
        prop_assert_eq!(emitted_forms, item_count);
    }

    #[test]
    fn test_surface_forms_match_exactly_one_pattern(
        seed in any::<u64>(),
        vocab_size in 4u32..200,
    ) {
        let token_re = Regex::new(r"^\d+$").unwrap();
        let phrase_re = Regex::new(r"^(\d+_)+$").unwrap();

        let vocab = build_vocabulary(vocab_size);
        let mut rng = fastrand::Rng::with_seed(seed);
        let phrases = PhraseTable::build(&mut rng, &vocab, 2, 3).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        let table = emit_corpus(&mut sink, &mut rng, &vocab, &phrases, 500, 50).unwrap();

        for (form, count) in table.sorted_entries() {
            prop_assert!(count > 0);
            let is_token = token_re.is_match(&form);
            let is_phrase = phrase_re.is_match(&form);
            prop_assert!(
                is_token ^ is_phrase,
                "Form '{}' matched token={} phrase={}",
                form, is_token, is_phrase
            );
        }
    }
}
