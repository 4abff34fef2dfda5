//! Overlap resolution for candidate spans
//!
//! Candidates from independent patterns may nest or partially overlap. The
//! resolver keeps a non-overlapping subset, preferring in order: higher priority,
//! longer span, earlier start, then the canonical order below (which ends in
//! registration order). Stronger candidates are placed first and a candidate is
//! kept only if it overlaps nothing already kept.

use crate::cloaking::models::CandidateSpan;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Canonical total order: start asc, priority desc, name asc, registration asc
pub fn canonical_order(a: &CandidateSpan, b: &CandidateSpan) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.pattern_name.cmp(&b.pattern_name))
        .then_with(|| a.registration_index.cmp(&b.registration_index))
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Conflict order: priority desc, length desc, start asc
fn strength_order(a: &CandidateSpan, b: &CandidateSpan) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.start.cmp(&b.start))
}

/// Reduce candidates to a non-overlapping set sorted by `start`
pub fn resolve(candidates: Vec<CandidateSpan>) -> Vec<CandidateSpan> {
    let mut ordered: Vec<CandidateSpan> = candidates
        .into_iter()
        .filter(|c| {
            if c.is_empty() {
                tracing::warn!(pattern = %c.pattern_name, start = c.start, "Dropping empty candidate");
                false
            } else {
                true
            }
        })
        .collect();
    ordered.sort_by(canonical_order);

    let mut ranking: Vec<usize> = (0..ordered.len()).collect();
    ranking.sort_by(|&a, &b| strength_order(&ordered[a], &ordered[b]).then(a.cmp(&b)));

    // start -> (end, canonical index) of every kept span
    let mut kept: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for index in ranking {
        let candidate = &ordered[index];

        let blocked_before = kept
            .range(..candidate.end)
            .next_back()
            .map(|(_, &(end, _))| end > candidate.start)
            .unwrap_or(false);

        if blocked_before {
            tracing::debug!(
                pattern = %candidate.pattern_name,
                start = candidate.start,
                end = candidate.end,
                "Candidate overlaps a stronger span"
            );
            continue;
        }

        kept.insert(candidate.start, (candidate.end, index));
    }

    let mut keep = vec![false; ordered.len()];
    for (_, (_, index)) in kept {
        keep[index] = true;
    }

    let accepted: Vec<CandidateSpan> = ordered
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect();

    tracing::debug!(accepted = accepted.len(), "Resolved candidate spans");
    accepted
}
