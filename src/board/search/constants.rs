//! Search constants.

/// Search scores in centipawns, from the side to move's point of view
pub type Score = i32;

/// Window bound larger than any reachable score
pub const INF: Score = 10_000_000;

/// Base of the mate band. A side with no legal move while in check scores
/// `-(MATE + remaining depth)`; static evaluations never come close.
pub const MATE: Score = 1_000_000;

/// Returns true for scores in the mate band
#[inline]
#[must_use]
pub const fn is_mate_score(score: Score) -> bool {
    score >= MATE || score <= -MATE
}
