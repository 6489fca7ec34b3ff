//! Built-in artificial-language corpus for exercising a learned segmenter.
//!
//! Four trisyllabic words arranged so that every within-word transition is
//! fully predictable while every word-final syllable is followed by at least
//! two distinct word-initial syllables. On such a corpus the transition
//! probabilities dip exactly at the hidden word boundaries, so the
//! local-minimum heuristic recovers all of them.

use crate::score::{score, words, Averaging};
use crate::stream::SymbolStream;
use crate::{Markers, Segmenter};

/// The lexicon, one entry per word, syllables separated by spaces
pub const WORDS: &[&str] = &["tu pi ro", "go la bu", "bi da ku", "pa do ti"];

/// Word orderings of the corpus utterances, as indices into [`WORDS`]
pub const UTTERANCES: &[&[usize]] = &[
    &[0, 1, 2, 3],
    &[1, 0, 3, 2],
    &[2, 3, 0, 1],
    &[3, 2, 1, 0],
];

/// Render the corpus with the given markers, word boundaries included
pub fn corpus(markers: &Markers) -> String {
    let mut out = String::new();
    for utterance in UTTERANCES {
        for word in utterance.iter() {
            for syllable in WORDS[*word].split(' ') {
                out.push_str(syllable);
                out.push(markers.sub());
            }
            out.push(markers.word());
        }
        out.push(markers.utterance());
    }
    out
}

/// Train on the built-in corpus and assert every hidden boundary is recovered
pub fn run(markers: &Markers) {
    let raw = corpus(markers);
    let stream = SymbolStream::parse(&raw, markers);
    let segmenter = Segmenter::learn(&stream);

    let gold: Vec<Vec<String>> = raw
        .split(markers.utterance())
        .filter(|utterance| !utterance.is_empty())
        .map(|utterance| words(utterance, markers.word()))
        .collect();
    let hypothesis: Vec<Vec<String>> = segmenter
        .predict_stream(&stream, markers)
        .unwrap()
        .iter()
        .map(|annotated| words(annotated, markers.word()))
        .collect();
    assert_eq!(gold, hypothesis);

    let scores = score(&gold, &hypothesis, Averaging::Micro);
    assert_eq!(scores.precision, 100.0);
    assert_eq!(scores.recall, 100.0);
    assert_eq!(scores.fscore, 100.0);
}
