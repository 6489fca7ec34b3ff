//! Decomposition of a raw corpus into utterances and symbols.

use crate::{Markers, Symbol};

/// An ordered, non-empty run of symbols between utterance delimiters
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Utterance {
    symbols: Vec<Symbol>,
}

impl Utterance {
    /// Create an utterance, or `None` when `symbols` is empty
    ///
    /// A zero-length utterance represents no information, not an utterance of
    /// length zero, so it cannot be constructed.
    pub fn new(symbols: Vec<Symbol>) -> Option<Self> {
        if symbols.is_empty() {
            None
        } else {
            Some(Self { symbols })
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// The word-boundary-free view of a corpus
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolStream {
    utterances: Vec<Utterance>,
}

impl SymbolStream {
    /// Decompose `raw` into utterances of symbols
    ///
    /// The word-boundary marker is erased first, so the learner never sees
    /// the boundaries it is supposed to discover; erasing it leaves every
    /// other character untouched. The remainder is cut on the utterance
    /// delimiter, then each fragment on the sub-boundary marker. Zero-length
    /// fragments at either level are dropped.
    pub fn parse(raw: &str, markers: &Markers) -> Self {
        let hidden = remove_boundaries(raw, markers.word());
        let utterances = hidden
            .split(markers.utterance())
            .filter_map(|fragment| {
                let symbols = fragment
                    .split(markers.sub())
                    .filter(|text| !text.is_empty())
                    .map(Symbol::unchecked)
                    .collect();
                Utterance::new(symbols)
            })
            .collect();
        Self { utterances }
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }
}

/// Returns `input` with every occurrence of `delim` removed
pub fn remove_boundaries(input: &str, delim: char) -> String {
    input.chars().filter(|c| *c != delim).collect()
}
