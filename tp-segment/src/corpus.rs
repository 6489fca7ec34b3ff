//! Corpus loading and normalization, upstream of the statistical core.
//!
//! These helpers produce the single pre-normalized string the parser
//! consumes; they carry no statistics of their own.

use std::fs;
use std::io;
use std::path::Path;

/// Digits marking stress levels in accented corpora.
const STRESS_DIGITS: &[char] = &['0', '1', '2'];

/// Read a corpus file into the single raw string the parser consumes
///
/// Lines are trimmed and concatenated; utterance structure comes from the
/// utterance delimiter, not from line breaks.
pub fn load(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.lines().map(str::trim).collect())
}

/// Remove stress-accent digits from an accented corpus
pub fn strip_accents(input: &str) -> String {
    input.chars().filter(|c| !STRESS_DIGITS.contains(c)).collect()
}
