//! Transition statistics and the local-minimum boundary predictor.

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::stream::{SymbolStream, Utterance};
use crate::{Error, HashMap, Markers, Symbol};

/// Whether a local minimum at the first or last transition of an utterance
/// may trigger a word boundary
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
pub enum EdgePolicy {
    /// Boundaries are only proposed at interior transitions, so an utterance
    /// of two symbols is always a single word.
    StrictInterior,
    /// A missing neighbor satisfies its comparison vacuously, so a dip at the
    /// first or last transition also takes a boundary.
    EdgeInclusive,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        EdgePolicy::StrictInterior
    }
}

/// Central data structure holding the learned transition statistics
///
/// All tables are built once by [`Segmenter::learn`] and are immutable
/// afterwards, so any number of predictions can share one instance.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
pub struct Segmenter {
    frequencies: HashMap<Symbol, u64>,
    transitions: HashMap<(Symbol, Symbol), u64>,
    probabilities: HashMap<(Symbol, Symbol), f64>,
    policy: EdgePolicy,
}

impl Segmenter {
    /// Accumulate transition statistics over `stream`
    ///
    /// Each utterance is walked independently with a previous-symbol cursor
    /// that resets at the utterance start, so transition counts never cross
    /// an utterance boundary. Frequencies count token occurrences, not
    /// distinct types, which makes the derived table a maximum-likelihood
    /// estimate of P(B | A).
    pub fn learn(stream: &SymbolStream) -> Self {
        let mut frequencies = HashMap::default();
        let mut transitions = HashMap::default();
        for utterance in stream.utterances() {
            let mut previous: Option<&Symbol> = None;
            for symbol in utterance.symbols() {
                *frequencies.entry(symbol.clone()).or_insert(0) += 1;
                if let Some(previous) = previous {
                    *transitions
                        .entry((previous.clone(), symbol.clone()))
                        .or_insert(0) += 1;
                }
                previous = Some(symbol);
            }
        }
        Self::from_counts(frequencies, transitions)
    }

    /// Create `Segmenter` from pre-computed count tables
    ///
    /// Note: the `HashMap` type here refers to `std::collections::HashMap`
    /// parametrized with the `ahash::RandomState`. Pairs whose first symbol
    /// has no frequency count carry no usable estimate and are dropped;
    /// tables built by [`Segmenter::learn`] cannot contain such pairs, since
    /// every transition's source symbol was itself just counted.
    pub fn from_counts(
        frequencies: HashMap<Symbol, u64>,
        transitions: HashMap<(Symbol, Symbol), u64>,
    ) -> Self {
        let probabilities = transitions
            .iter()
            .filter_map(|((a, b), count)| {
                let total = *frequencies.get(a)?;
                if total == 0 {
                    return None;
                }
                Some(((a.clone(), b.clone()), *count as f64 / total as f64))
            })
            .collect();
        Self {
            frequencies,
            transitions,
            probabilities,
            policy: EdgePolicy::default(),
        }
    }

    /// Customize the edge `policy` used when proposing boundaries
    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.policy = policy;
    }

    /// Number of times `symbol` occurred in the training stream
    pub fn frequency(&self, symbol: &Symbol) -> u64 {
        self.frequencies.get(symbol).copied().unwrap_or(0)
    }

    /// Number of times `a` was immediately followed by `b` within an utterance
    pub fn transition(&self, a: &Symbol, b: &Symbol) -> u64 {
        self.transitions
            .get(&(a.clone(), b.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// P(`b` | `a`), defined only for pairs observed during learning
    pub fn probability(&self, a: &Symbol, b: &Symbol) -> Option<f64> {
        self.probabilities.get(&(a.clone(), b.clone())).copied()
    }

    /// Read-only view of the frequency table
    pub fn frequencies(&self) -> &HashMap<Symbol, u64> {
        &self.frequencies
    }

    /// Read-only view of the transition-count table
    pub fn transitions(&self) -> &HashMap<(Symbol, Symbol), u64> {
        &self.transitions
    }

    /// Read-only view of the transition-probability table
    pub fn probabilities(&self) -> &HashMap<(Symbol, Symbol), f64> {
        &self.probabilities
    }

    /// Annotate `utterance` with hypothesized word boundaries
    ///
    /// Emits the utterance's symbols in order, each followed by the sub
    /// marker, inserting the word marker wherever the transition-probability
    /// curve dips to a local minimum under the configured [`EdgePolicy`]. A
    /// trailing word marker always closes the utterance.
    ///
    /// Every adjacent pair must have been observed during learning; an unseen
    /// pair fails the whole utterance with [`Error::UnseenTransition`].
    pub fn predict(&self, utterance: &Utterance, markers: &Markers) -> Result<String, Error> {
        let symbols = utterance.symbols();
        let mut tps = Vec::with_capacity(symbols.len().saturating_sub(1));
        for pair in symbols.windows(2) {
            match self.probability(&pair[0], &pair[1]) {
                Some(tp) => tps.push(tp),
                None => return Err(Error::UnseenTransition(pair[0].clone(), pair[1].clone())),
            }
        }

        let mut out = String::new();
        out.push_str(symbols[0].as_str());
        out.push(markers.sub());
        for (i, symbol) in symbols.iter().enumerate().skip(1) {
            if self.boundary_at(&tps, i - 1) {
                out.push(markers.word());
            }
            out.push_str(symbol.as_str());
            out.push(markers.sub());
        }
        out.push(markers.word());
        Ok(out)
    }

    /// Annotate every utterance in `stream`, failing on the first unseen pair
    ///
    /// Decisions stay local to each utterance; this is a convenience over
    /// calling [`Segmenter::predict`] in a loop.
    pub fn predict_stream(
        &self,
        stream: &SymbolStream,
        markers: &Markers,
    ) -> Result<Vec<String>, Error> {
        stream
            .utterances()
            .iter()
            .map(|utterance| self.predict(utterance, markers))
            .collect()
    }

    fn boundary_at(&self, tps: &[f64], i: usize) -> bool {
        match self.policy {
            EdgePolicy::StrictInterior => {
                i > 0 && i + 1 < tps.len() && tps[i - 1] > tps[i] && tps[i] < tps[i + 1]
            }
            EdgePolicy::EdgeInclusive => {
                (i == 0 || tps[i - 1] > tps[i]) && (i + 1 == tps.len() || tps[i] < tps[i + 1])
            }
        }
    }
}
