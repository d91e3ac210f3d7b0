//! Partial-ratio scoring and best-candidate selection.

use rapidfuzz::fuzz;

/// Best-scoring candidate for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The candidate exactly as it appeared in the input.
    pub candidate: &'a str,
    /// Position of the candidate in the input sequence.
    pub index: usize,
    /// Similarity score (0 to 100).
    pub score: u8,
}

impl Match<'_> {
    /// Whether the score is strictly greater than `threshold`.
    #[must_use]
    pub fn exceeds(&self, threshold: u8) -> bool {
        self.score > threshold
    }
}

/// Partial-ratio similarity between two strings, 0 to 100.
///
/// Both strings are normalized first (see [`normalize`]), so `"ESPN"` and
/// `"Espn"` are identical to the scorer. The shorter string is compared with every window of the same length in
/// the longer string. Windows never hang over either edge, so a short prefix
/// like `"ESPN"` cannot outscore a longer, better aligned candidate. Each
/// window is scored with the normalized Indel similarity and the best one is
/// returned, rounded to the nearest integer. Empty input scores 0.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return 0;
    }

    let mut best = 0.0_f64;
    for window in long.windows(short.len()) {
        let similarity = fuzz::ratio(short.iter().copied(), window.iter().copied());
        if similarity > best {
            best = similarity;
            if best >= 1.0 {
                break;
            }
        }
    }
    to_percent(best)
}

/// Return the highest-scoring candidate for `query`.
///
/// Ties go to the earliest candidate. Returns `None` only when `candidates`
/// is empty. No threshold is applied here; see [`best_match_above`].
pub fn best_match<'a, S>(query: &str, candidates: &'a [S]) -> Option<Match<'a>>
where
    S: AsRef<str>,
{
    let mut best: Option<Match<'a>> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let score = partial_ratio(query, candidate);
        if best.is_none_or(|current| score > current.score) {
            best = Some(Match {
                candidate,
                index,
                score,
            });
        }
    }
    best
}

/// [`best_match`], kept only when the score is strictly above `threshold`.
pub fn best_match_above<'a, S>(
    query: &str,
    candidates: &'a [S],
    threshold: u8,
) -> Option<Match<'a>>
where
    S: AsRef<str>,
{
    best_match(query, candidates).filter(|found| found.exceeds(threshold))
}

/// Normalize a channel name for scoring.
///
/// - Replaces every non-alphanumeric character with a space
/// - Converts to lowercase
/// - Trims surrounding whitespace
///
/// Inner runs of spaces are kept, so `"ESPN (HD)"` becomes `"espn  hd"`.
fn normalize(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.to_lowercase().trim().to_string()
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}
