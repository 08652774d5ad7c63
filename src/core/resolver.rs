//! Fuzzy course-name resolution for roster imports
//!
//! Roster exports abbreviate and misspell course names. Resolution scores
//! every canonical candidate with a character-level similarity ratio, boosts
//! candidates that share whole words with the input, and accepts the best
//! candidate only when it both shares at least one word and clears the
//! score threshold. Shared vocabulary is the trust signal: a high
//! character-level score alone is not enough to rewrite a transcript entry.

use serde::{Deserialize, Serialize};

/// Minimum score for an accepted match.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Tokens shorter than this are ignored ("AP", "I", "II" would otherwise
/// connect unrelated courses).
pub const MIN_TOKEN_LEN: usize = 3;

/// How a candidate earned its score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMethod {
    /// Shares at least one whole word with the input (boosted score)
    CommonWords,
    /// Character-level similarity only
    Similarity,
}

impl MatchMethod {
    /// Short label for match reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommonWords => "common words",
            Self::Similarity => "similarity",
        }
    }
}

/// The best-scoring candidate for an input name.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Canonical name of the candidate
    pub name: String,
    /// Final score, capped at 1.0
    pub score: f64,
    /// How the score was earned
    pub method: MatchMethod,
    /// Words shared with the input, in input order
    pub shared_tokens: Vec<String>,
}

/// Outcome of resolving one input name against a candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The best candidate shares vocabulary and clears the threshold
    Accepted(Candidate),
    /// A best candidate exists but fails the acceptance gate
    Rejected(Candidate),
    /// No candidate scored above zero
    NoCandidates,
}

impl Resolution {
    /// The accepted candidate, if any.
    #[must_use]
    pub const fn accepted(&self) -> Option<&Candidate> {
        match self {
            Self::Accepted(candidate) => Some(candidate),
            Self::Rejected(_) | Self::NoCandidates => None,
        }
    }
}

fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    // Tokens are lowercase ASCII-alphanumeric runs; catalog names contain
    // nothing else, so non-ASCII roster text can only match on similarity.
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| token.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Whole words (length >= `min_len`, case-insensitive) present in both `a`
/// and `b`, in order of appearance in `a`, without duplicates.
#[must_use]
pub fn shared_tokens(a: &str, b: &str, min_len: usize) -> Vec<String> {
    let b_tokens = tokenize(b, min_len);
    let mut shared = Vec::new();
    for token in tokenize(a, min_len) {
        if b_tokens.contains(&token) && !shared.contains(&token) {
            shared.push(token);
        }
    }
    shared
}

/// Longest common block between `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(a_start, b_start, length)`; length 0 means no common block.
/// Ties prefer the earliest block in `a`.
fn longest_block(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    // lengths[j] = length of the common run ending at a[i], b[j]
    let mut lengths = vec![0usize; bhi.saturating_sub(blo)];
    for i in alo..ahi {
        let mut new_lengths = vec![0usize; lengths.len()];
        for j in blo..bhi {
            if a[i] == b[j] {
                let run = if j > blo { lengths[j - blo - 1] + 1 } else { 1 };
                new_lengths[j - blo] = run;
                if run > best_len {
                    best_len = run;
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                }
            }
        }
        lengths = new_lengths;
    }
    (best_i, best_j, best_len)
}

/// Total matched characters between `a[alo..ahi]` and `b[blo..bhi]`:
/// the longest common block plus whatever matches recursively on each side.
fn matched_chars(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, len) = longest_block(a, b, alo, ahi, blo, bhi);
    if len == 0 {
        return 0;
    }
    len + matched_chars(a, b, alo, i, blo, j) + matched_chars(a, b, i + len, ahi, j + len, bhi)
}

/// Character-level similarity in [0, 1]: twice the matched character count
/// over the combined length, case-insensitive. Two empty strings are
/// identical (ratio 1.0).
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.trim().to_lowercase().chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_chars(&a_chars, &b_chars, 0, a_chars.len(), 0, b_chars.len());
    #[allow(clippy::cast_precision_loss)]
    {
        2.0 * matched as f64 / total as f64
    }
}

/// Resolve `input` against `candidates`.
///
/// Every candidate gets a similarity ratio; candidates sharing whole words
/// with the input get a boost of half the shared-character fraction. The
/// single best candidate (strict comparison, first wins ties) is accepted
/// only when it shares vocabulary and its score clears `threshold`.
#[must_use]
pub fn find_best_match(input: &str, candidates: &[&str], threshold: f64) -> Resolution {
    let input_len = input.chars().count();
    let mut best: Option<(Candidate, f64)> = None;

    for candidate in candidates {
        let base = similarity_ratio(input, candidate);
        let tokens = shared_tokens(input, candidate, MIN_TOKEN_LEN);
        let (raw_score, method) = if tokens.is_empty() || input_len == 0 {
            (base, MatchMethod::Similarity)
        } else {
            let shared_len: usize = tokens.iter().map(|t| t.chars().count()).sum();
            #[allow(clippy::cast_precision_loss)]
            let boost = 0.5 * shared_len as f64 / input_len as f64;
            (base + boost, MatchMethod::CommonWords)
        };

        if raw_score > 0.0 && best.as_ref().map_or(true, |(_, held)| raw_score > *held) {
            best = Some((
                Candidate {
                    name: (*candidate).to_string(),
                    score: raw_score.min(1.0),
                    method,
                    shared_tokens: tokens,
                },
                raw_score,
            ));
        }
    }

    match best {
        Some((candidate, raw_score)) => {
            if candidate.method == MatchMethod::CommonWords && raw_score >= threshold {
                Resolution::Accepted(candidate)
            } else {
                Resolution::Rejected(candidate)
            }
        }
        None => Resolution::NoCandidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::catalog;

    #[test]
    fn tokens_respect_min_length_and_order() {
        // "AP" is shorter than the minimum and drops out
        let shared = shared_tokens("AP Calculus AB", "AP Calculus BC", MIN_TOKEN_LEN);
        assert_eq!(shared, vec!["calculus"]);

        let shared = shared_tokens("Honors Biology", "Biology Honors", MIN_TOKEN_LEN);
        assert_eq!(shared, vec!["honors", "biology"]);
    }

    #[test]
    fn tokens_are_ascii_only() {
        // Non-ASCII course names carry no tokens, so they can never earn the
        // common-words boost
        assert!(shared_tokens("语文课程", "语文课程", MIN_TOKEN_LEN).is_empty());
        let shared = shared_tokens("Chinese 语文", "Chinese", MIN_TOKEN_LEN);
        assert_eq!(shared, vec!["chinese"]);

        let resolution = find_best_match("语文课程", &["语文课程"], DEFAULT_THRESHOLD);
        match resolution {
            Resolution::Rejected(candidate) => {
                assert_eq!(candidate.method, MatchMethod::Similarity);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn tokens_are_case_insensitive_and_deduplicated() {
        let shared = shared_tokens("chinese CHINESE Chinese", "Chinese History", MIN_TOKEN_LEN);
        assert_eq!(shared, vec!["chinese"]);
        assert!(shared_tokens("Physics", "Chemistry", MIN_TOKEN_LEN).is_empty());
    }

    #[test]
    fn ratio_bounds_and_identity() {
        assert!((similarity_ratio("Biology", "Biology") - 1.0).abs() < f64::EPSILON);
        assert!((similarity_ratio("", "") - 1.0).abs() < f64::EPSILON);
        assert!((similarity_ratio("abc", "") - 0.0).abs() < f64::EPSILON);
        let partial = similarity_ratio("Biology", "Geology");
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn ratio_counts_matched_characters() {
        // "Biology Honors" vs "Biology": 7 matched chars over 21 total
        let ratio = similarity_ratio("Biology Honors", "Biology");
        assert!((ratio - 14.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn exact_match_resolves_with_full_score() {
        let resolution = find_best_match("Biology", &["Biology", "Chemistry Honors"], DEFAULT_THRESHOLD);
        let candidate = resolution.accepted().expect("exact match accepted");
        assert_eq!(candidate.name, "Biology");
        assert!((candidate.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(candidate.method, MatchMethod::CommonWords);
    }

    #[test]
    fn abbreviated_name_resolves_against_catalog() {
        let names = catalog::all_canonical_names();
        let resolution = find_best_match("Biology Honors Class", &names, DEFAULT_THRESHOLD);
        let candidate = resolution.accepted().expect("boosted match accepted");
        assert_eq!(candidate.name, "Biology Honors");
        assert!(candidate.shared_tokens.contains(&"biology".to_string()));
        assert!(candidate.shared_tokens.contains(&"honors".to_string()));
    }

    #[test]
    fn unrelated_name_is_not_accepted() {
        let names = catalog::all_canonical_names();
        let resolution = find_best_match("Underwater Basket Weaving", &names, DEFAULT_THRESHOLD);
        assert!(resolution.accepted().is_none());
    }

    #[test]
    fn similarity_alone_never_accepts() {
        // One transposition, very high character similarity, zero shared words
        let resolution = find_best_match("Bioolgy", &["Biology"], DEFAULT_THRESHOLD);
        match resolution {
            Resolution::Rejected(candidate) => {
                assert_eq!(candidate.method, MatchMethod::Similarity);
                assert!(candidate.score > 0.8);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn threshold_gates_acceptance() {
        // Shares a word but most of the input is noise
        let input = "Chinese Underwater Basket Weaving Extravaganza";
        let resolution = find_best_match(input, &["Chinese"], 0.9);
        assert!(resolution.accepted().is_none());
        let resolution = find_best_match(input, &["Chinese"], 0.1);
        assert!(resolution.accepted().is_some());
    }

    #[test]
    fn first_of_tied_candidates_wins() {
        // Both candidates have the same length, the same matched characters,
        // and the same shared token, so they score identically; strict
        // comparison keeps the first.
        let resolution = find_best_match("Dance", &["Dance I", "Dance X"], DEFAULT_THRESHOLD);
        let candidate = resolution.accepted().expect("dance accepted");
        assert_eq!(candidate.name, "Dance I");
    }

    #[test]
    fn empty_input_finds_nothing() {
        assert_eq!(
            find_best_match("", &["Biology"], DEFAULT_THRESHOLD),
            Resolution::NoCandidates
        );
        assert_eq!(find_best_match("Biology", &[], DEFAULT_THRESHOLD), Resolution::NoCandidates);
    }

    #[test]
    fn resolved_names_are_stable_on_reimport() {
        // A name the resolver already produced resolves to itself
        let names = catalog::all_canonical_names();
        let first = find_best_match("Chemistry Honors", &names, DEFAULT_THRESHOLD);
        let candidate = first.accepted().expect("canonical accepted");
        assert_eq!(candidate.name, "Chemistry Honors");
        assert!((candidate.score - 1.0).abs() < f64::EPSILON);
    }
}
