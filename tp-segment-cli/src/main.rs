use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};

use tp_segment::{
    corpus, words, Averaging, EdgePolicy, Markers, Scoreboard, Segmenter, SymbolStream,
};

#[derive(Parser)]
#[command(
    name = "tp-segment",
    version,
    about = "Learn syllable transition probabilities from a boundary-marked corpus \
             and evaluate local-minimum word segmentation against it"
)]
struct Cli {
    /// Corpus file with marked utterance and word boundaries
    path: PathBuf,

    /// Which hidden boundary to predict
    #[arg(long, value_enum, default_value = "word")]
    boundary: Boundary,

    /// Keep stress-accent digits instead of stripping them
    #[arg(long)]
    keep_accents: bool,

    /// Allow boundaries at the first and last transition of an utterance
    #[arg(long)]
    edge_inclusive: bool,

    /// Average precision and recall per utterance instead of over the corpus
    #[arg(long)]
    macro_average: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Boundary {
    /// Hide word boundaries and learn over syllable transitions
    Word,
    /// Hide syllable boundaries and learn over phoneme transitions
    Syllable,
}

impl Boundary {
    fn markers(self) -> Result<Markers, tp_segment::Error> {
        match self {
            Boundary::Word => Markers::new('U', 'W', 'S'),
            Boundary::Syllable => Markers::new('U', 'S', 'P'),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    let cli = Cli::parse();

    let markers = cli.boundary.markers()?;
    let mut raw = corpus::load(&cli.path)
        .with_context(|| format!("failed to read corpus {}", cli.path.display()))?;
    if !cli.keep_accents {
        raw = corpus::strip_accents(&raw);
    }

    let stream = SymbolStream::parse(&raw, &markers);
    info!(utterances = stream.utterances().len(), "corpus parsed");

    let mut segmenter = Segmenter::learn(&stream);
    if cli.edge_inclusive {
        segmenter.set_edge_policy(EdgePolicy::EdgeInclusive);
    }
    info!(
        symbols = segmenter.frequencies().len(),
        transitions = segmenter.transitions().len(),
        "transition statistics learned"
    );

    let averaging = if cli.macro_average {
        Averaging::Macro
    } else {
        Averaging::Micro
    };
    let mut board = Scoreboard::new(averaging);
    let mut skipped = 0usize;
    for fragment in raw.split(markers.utterance()) {
        if fragment.is_empty() {
            continue;
        }
        let gold = words(fragment, markers.word());
        let parsed = SymbolStream::parse(fragment, &markers);
        let utterance = match parsed.utterances().first() {
            Some(utterance) => utterance,
            None => continue,
        };
        match segmenter.predict(utterance, &markers) {
            Ok(annotated) => board.tally(&gold, &words(&annotated, markers.word())),
            Err(err) => {
                warn!(%err, "skipping utterance");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        info!(skipped, "utterances skipped on unseen transitions");
    }

    let scores = board.finish();
    println!("Precision: {:.3}%", scores.precision);
    println!("Recall: {:.3}%", scores.recall);
    println!("F-score: {:.3}%", scores.fscore);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn boundary_choice_selects_the_marker_set() {
        let markers = Boundary::Syllable.markers().unwrap();
        assert_eq!(markers.word(), 'S');
        assert_eq!(markers.sub(), 'P');
    }
}
