use super::distance::{FoldedText, fold, levenshtein};
use super::types::MatchResult;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 10;

/// How many ranked results a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultLimit {
    /// Keep the best `n` results.
    Top(usize),
    /// Keep the best match of every sentence that produced one.
    All,
}

/// What an empty query does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQueryPolicy {
    /// No results; the HTTP layer answers 400 before searching.
    #[default]
    Reject,
    /// Every non-empty sentence matches as a whole, at distance 0.
    MatchAll,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub limit: ResultLimit,
    /// Window matches farther than this are dropped. Containment matches are
    /// always kept.
    pub max_distance: Option<usize>,
    pub empty_query: EmptyQueryPolicy,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            limit: ResultLimit::Top(DEFAULT_TOP_N),
            max_distance: None,
            empty_query: EmptyQueryPolicy::default(),
        }
    }
}

/// The query in every form the per-sentence scan needs, computed once.
struct Needle<'a> {
    text: &'a str,
    folded: Vec<char>,
    width: usize,
}

impl<'a> Needle<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            folded: fold(text).chars().collect(),
            width: text.chars().count(),
        }
    }
}

/// Approximate substring matcher over an ordered list of sentences.
///
/// Sentences are scored independently on the rayon pool and the merged
/// output is sorted by `(distance, index)`, so results never depend on
/// which worker finished first.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn search<S>(&self, query: &str, sentences: &[S]) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        if query.is_empty() {
            return match self.config.empty_query {
                EmptyQueryPolicy::Reject => Vec::new(),
                EmptyQueryPolicy::MatchAll => self.rank(whole_sentence_matches(sentences)),
            };
        }

        let needle = Needle::new(query);
        let matches: Vec<MatchResult> = sentences
            .par_iter()
            .enumerate()
            .filter_map(|(index, sentence)| self.best_match(&needle, index, sentence.as_ref()))
            .collect();

        tracing::debug!(
            "Fuzzy search for {:?}: {} of {} sentences matched",
            query,
            matches.len(),
            sentences.len()
        );

        self.rank(matches)
    }

    fn best_match(&self, needle: &Needle<'_>, index: usize, sentence: &str) -> Option<MatchResult> {
        let text = FoldedText::new(sentence);
        if text.contains(&needle.folded) {
            return Some(MatchResult {
                sentence: sentence.to_string(),
                index,
                matched_text: needle.text.to_string(),
                distance: 0,
            });
        }

        if text.len() < needle.width {
            return None;
        }

        // Leftmost window wins ties.
        let mut best: Option<(usize, usize)> = None;
        for start in 0..=text.len() - needle.width {
            let distance = levenshtein(text.folded_window(start, needle.width), &needle.folded);
            if best.is_none_or(|(lowest, _)| distance < lowest) {
                best = Some((distance, start));
            }
        }

        let (distance, start) = best?;
        if self.config.max_distance.is_some_and(|max| distance > max) {
            return None;
        }

        Some(MatchResult {
            sentence: sentence.to_string(),
            index,
            matched_text: text.original_window(start, needle.width).iter().collect(),
            distance,
        })
    }

    fn rank(&self, mut matches: Vec<MatchResult>) -> Vec<MatchResult> {
        matches.sort_by_key(|m| (m.distance, m.index));
        if let ResultLimit::Top(n) = self.config.limit {
            matches.truncate(n);
        }
        matches
    }
}

fn whole_sentence_matches<S: AsRef<str>>(sentences: &[S]) -> Vec<MatchResult> {
    sentences
        .iter()
        .enumerate()
        .filter(|(_, sentence)| !sentence.as_ref().is_empty())
        .map(|(index, sentence)| MatchResult {
            sentence: sentence.as_ref().to_string(),
            index,
            matched_text: sentence.as_ref().to_string(),
            distance: 0,
        })
        .collect()
}
