//! Conflict resolution between overlapping candidates.
//!
//! Greedy interval scheduling: candidates are ordered by start, then longest
//! first, then highest score, then entity name; each is accepted only if it
//! does not intersect anything accepted before it. Losers are dropped, never
//! merged.

use std::cmp::Ordering;

use veil_core::{AcceptedSpan, CandidateSpan};

/// Resolve raw candidates into disjoint spans sorted by ascending start.
///
/// Zero-length and inverted candidates are discarded. Output is fully
/// determined by the input set, independent of input order, except between
/// candidates identical in range, score and entity type, which are
/// interchangeable.
pub fn resolve(candidates: Vec<CandidateSpan>) -> Vec<AcceptedSpan> {
    let mut ordered: Vec<CandidateSpan> = candidates
        .into_iter()
        .filter(|c| c.start < c.end)
        .collect();
    ordered.sort_by(priority);

    let mut accepted: Vec<AcceptedSpan> = Vec::with_capacity(ordered.len());
    for candidate in ordered {
        // Accepted spans are disjoint and sorted, and every later candidate
        // starts at or after the last accepted start, so only the last one
        // can intersect.
        if let Some(last) = accepted.last() {
            if candidate.start < last.end {
                continue;
            }
        }
        accepted.push(candidate.into());
    }
    accepted
}

fn priority(a: &CandidateSpan, b: &CandidateSpan) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.entity_type.cmp(&b.entity_type))
}
