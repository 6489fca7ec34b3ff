use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String;
use thiserror::Error;

pub mod corpus;
mod model;
mod score;
mod stream;
#[cfg(feature = "test-cases")]
pub mod test_cases;

pub use model::{EdgePolicy, Segmenter};
pub use score::{score, words, Averaging, Scoreboard, Scores};
pub use stream::{remove_boundaries, SymbolStream, Utterance};

/// The three reserved delimiter characters of a corpus
///
/// The utterance delimiter cuts the raw stream into utterances, the word
/// marker carries the hidden ground truth, and the sub marker separates
/// symbols within an utterance. The three must be pairwise distinct and can
/// never occur inside a [`Symbol`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Markers {
    utterance: char,
    word: char,
    sub: char,
}

impl Markers {
    /// Create a marker configuration from three pairwise distinct characters
    pub fn new(utterance: char, word: char, sub: char) -> Result<Self, Error> {
        if utterance == word || utterance == sub || word == sub {
            return Err(Error::MarkerClash {
                utterance,
                word,
                sub,
            });
        }
        Ok(Self {
            utterance,
            word,
            sub,
        })
    }

    /// The utterance delimiter
    pub fn utterance(&self) -> char {
        self.utterance
    }

    /// The hidden word-boundary marker the model must predict
    pub fn word(&self) -> char {
        self.word
    }

    /// The sub-boundary marker separating symbols within an utterance
    pub fn sub(&self) -> char {
        self.sub
    }

    fn reserved(&self, c: char) -> bool {
        c == self.utterance || c == self.word || c == self.sub
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            utterance: 'U',
            word: 'W',
            sub: 'S',
        }
    }
}

/// A single syllable or phoneme
///
/// Symbols compare by exact text equality. Construction through [`Symbol::new`]
/// rejects empty text and text containing any reserved marker character, so a
/// symbol can never collide with the structural delimiters of the stream.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol, validating it against the reserved markers
    pub fn new(text: &str, markers: &Markers) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::EmptySymbol);
        }
        if let Some(marker) = text.chars().find(|c| markers.reserved(*c)) {
            return Err(Error::ReservedMarker {
                symbol: text.to_owned(),
                marker,
            });
        }
        Ok(Self(text.into()))
    }

    // The parser splits on the marker characters, so its fragments cannot
    // contain them.
    pub(crate) fn unchecked(text: &str) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("markers {utterance:?}, {word:?} and {sub:?} must be pairwise distinct")]
    MarkerClash {
        utterance: char,
        word: char,
        sub: char,
    },

    #[error("a symbol must contain at least one character")]
    EmptySymbol,

    #[error("symbol {symbol:?} contains reserved marker {marker:?}")]
    ReservedMarker {
        symbol: std::string::String,
        marker: char,
    },

    /// The predictor asked for a pair the learner never observed. Defaulting
    /// the probability to zero or one would silently bias the segmentation
    /// heuristic, so the lookup fails instead and the caller decides whether
    /// to skip the utterance or abort the run.
    #[error("transition ({0}, {1}) was never observed during learning")]
    UnseenTransition(Symbol, Symbol),
}

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
pub(crate) type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;
