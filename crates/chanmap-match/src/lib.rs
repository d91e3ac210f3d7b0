//! Fuzzy matching of tuner channel names against an EPG provider lineup.
//!
//! Scores are partial-ratio style: the shorter name is slid across the longer
//! one and the best-aligned window decides the score. This makes
//! `"ESPN HD"` a strong match for `"ESPN (HD)"` even though a full-string
//! comparison would penalise the extra characters.

#![deny(unsafe_code)]

mod score;

pub use score::{Match, best_match, best_match_above, partial_ratio};

/// Acceptance threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 85;
