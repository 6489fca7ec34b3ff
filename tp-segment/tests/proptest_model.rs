//! Property-based tests for the statistical pipeline.
//!
//! Verifies the table invariants of the learner and the determinism of the
//! whole learn-then-predict pipeline over arbitrary small corpora.

use proptest::prelude::*;

use tp_segment::{remove_boundaries, Markers, Segmenter, Symbol, SymbolStream};

const SYLLABLES: &[&str] = &["ba", "di", "ku", "pa", "to", "gu", "mi", "ne"];

fn utterance_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(SYLLABLES.to_vec()), 1..8)
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(utterance_strategy(), 1..12).prop_map(|utterances| {
        let markers = Markers::default();
        let mut out = String::new();
        for utterance in utterances {
            for syllable in utterance {
                out.push_str(syllable);
                out.push(markers.sub());
            }
            out.push(markers.utterance());
        }
        out
    })
}

proptest! {
    #[test]
    fn probabilities_stay_in_unit_interval(raw in corpus_strategy()) {
        let stream = SymbolStream::parse(&raw, &Markers::default());
        let segmenter = Segmenter::learn(&stream);
        for tp in segmenter.probabilities().values() {
            prop_assert!(*tp > 0.0 && *tp <= 1.0);
        }
    }

    #[test]
    fn outgoing_transitions_never_exceed_frequency(raw in corpus_strategy()) {
        let stream = SymbolStream::parse(&raw, &Markers::default());
        let segmenter = Segmenter::learn(&stream);

        let mut outgoing: std::collections::HashMap<&Symbol, u64> = Default::default();
        for (pair, count) in segmenter.transitions() {
            *outgoing.entry(&pair.0).or_insert(0) += count;
        }
        for (symbol, total) in outgoing {
            prop_assert!(total <= segmenter.frequency(symbol));
        }
    }

    #[test]
    fn initial_symbols_cover_every_utterance(raw in corpus_strategy()) {
        let stream = SymbolStream::parse(&raw, &Markers::default());
        let segmenter = Segmenter::learn(&stream);

        let initials: std::collections::HashSet<&Symbol> = stream
            .utterances()
            .iter()
            .map(|utterance| &utterance.symbols()[0])
            .collect();
        let total: u64 = initials
            .iter()
            .map(|symbol| segmenter.frequency(symbol))
            .sum();
        prop_assert!(total >= stream.utterances().len() as u64);
    }

    #[test]
    fn pipeline_is_deterministic(raw in corpus_strategy()) {
        let markers = Markers::default();
        let stream = SymbolStream::parse(&raw, &markers);
        let first = Segmenter::learn(&stream)
            .predict_stream(&stream, &markers)
            .unwrap();
        let second = Segmenter::learn(&stream)
            .predict_stream(&stream, &markers)
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn boundary_removal_is_idempotent(raw in "[a-zA-Z]{0,64}") {
        let once = remove_boundaries(&raw, 'W');
        let twice = remove_boundaries(&once, 'W');
        prop_assert_eq!(once, twice);
    }
}
