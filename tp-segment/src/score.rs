//! Precision, recall and F-score over hypothesized word boundaries.

use crate::HashSet;

/// How per-utterance tallies combine into corpus-level metrics
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Averaging {
    /// Accumulate matched, hypothesized and gold word counts over the whole
    /// corpus and divide once.
    Micro,
    /// Compute precision and recall per utterance and take their arithmetic
    /// means.
    Macro,
}

impl Default for Averaging {
    fn default() -> Self {
        Averaging::Micro
    }
}

/// Corpus-level segmentation metrics, as percentages
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
}

impl Scores {
    const ZERO: Scores = Scores {
        precision: 0.0,
        recall: 0.0,
        fscore: 0.0,
    };

    fn from_fractions(precision: f64, recall: f64) -> Self {
        let fscore = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        Scores {
            precision: precision * 100.0,
            recall: recall * 100.0,
            fscore: fscore * 100.0,
        }
    }
}

/// Accumulates per-utterance word matches into corpus-level metrics
#[derive(Debug)]
pub struct Scoreboard {
    averaging: Averaging,
    gold_total: usize,
    hypothesis_total: usize,
    matched_total: usize,
    precision_sum: f64,
    recall_sum: f64,
    utterances: usize,
}

impl Scoreboard {
    pub fn new(averaging: Averaging) -> Self {
        Self {
            averaging,
            gold_total: 0,
            hypothesis_total: 0,
            matched_total: 0,
            precision_sum: 0.0,
            recall_sum: 0.0,
            utterances: 0,
        }
    }

    /// Tally one utterance's gold and hypothesized word lists
    ///
    /// A hypothesized word counts as matched when its text occurs anywhere
    /// among the utterance's gold words; position is not considered. An
    /// utterance with no gold or no hypothesized words carries no evaluable
    /// signal and is skipped under both averaging policies.
    pub fn tally(&mut self, gold: &[String], hypothesis: &[String]) {
        if gold.is_empty() || hypothesis.is_empty() {
            return;
        }
        let gold_set: HashSet<&str> = gold.iter().map(|word| word.as_str()).collect();
        let matched = hypothesis
            .iter()
            .filter(|word| gold_set.contains(word.as_str()))
            .count();

        self.gold_total += gold.len();
        self.hypothesis_total += hypothesis.len();
        self.matched_total += matched;

        self.precision_sum += matched as f64 / hypothesis.len() as f64;
        self.recall_sum += matched as f64 / gold.len() as f64;
        self.utterances += 1;
    }

    /// Combine the tallies under the configured [`Averaging`] policy
    ///
    /// A corpus where every utterance was skipped scores zero across the
    /// board rather than dividing by zero.
    pub fn finish(&self) -> Scores {
        if self.utterances == 0 {
            return Scores::ZERO;
        }
        match self.averaging {
            Averaging::Micro => Scores::from_fractions(
                self.matched_total as f64 / self.hypothesis_total as f64,
                self.matched_total as f64 / self.gold_total as f64,
            ),
            Averaging::Macro => Scores::from_fractions(
                self.precision_sum / self.utterances as f64,
                self.recall_sum / self.utterances as f64,
            ),
        }
    }
}

/// Score a corpus of per-utterance word lists
///
/// `gold` and `hypothesis` are expected in per-utterance alignment; trailing
/// utterances without a counterpart are ignored.
pub fn score(gold: &[Vec<String>], hypothesis: &[Vec<String>], averaging: Averaging) -> Scores {
    let mut board = Scoreboard::new(averaging);
    for (gold, hypothesis) in gold.iter().zip(hypothesis) {
        board.tally(gold, hypothesis);
    }
    board.finish()
}

/// Split a boundary-annotated utterance into its words
///
/// Empty fragments left behind by adjacent markers are dropped.
pub fn words(annotated: &str, word_marker: char) -> Vec<String> {
    annotated
        .split(word_marker)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
