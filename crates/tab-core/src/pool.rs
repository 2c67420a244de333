//! The set of candidates a session may switch to.

use std::collections::HashSet;

use tracing::debug;

use crate::candidate::{Candidate, RawItem, ViewKind};

/// Candidates captured once at session open.
///
/// Candidates keep their insertion order; `baseline` holds indices into
/// `candidates` sorted by recency (most recent first, insertion order on ties).
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    baseline: Vec<usize>,
}

impl CandidatePool {
    /// Build a pool from the host's enumeration.
    ///
    /// Items whose kind is not in `eligible` are dropped, and only the first
    /// item seen for each id is kept.
    pub fn snapshot<I>(items: I, eligible: &[ViewKind]) -> Self
    where
        I: IntoIterator<Item = RawItem>,
    {
        let mut seen = HashSet::new();
        let mut skipped = 0usize;
        let candidates: Vec<Candidate> = items
            .into_iter()
            .filter(|item| {
                let keep = eligible.contains(&item.kind) && seen.insert(item.id);
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .map(Candidate::from)
            .collect();

        debug!(kept = candidates.len(), skipped, "pool snapshot");
        Self::from_candidates(candidates)
    }

    fn from_candidates(candidates: Vec<Candidate>) -> Self {
        let mut baseline: Vec<usize> = (0..candidates.len()).collect();
        // sort_by is stable, so equal timestamps keep insertion order.
        baseline.sort_by(|&a, &b| candidates[b].last_active.cmp(&candidates[a].last_active));
        Self {
            candidates,
            baseline,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Insertion-order indices sorted by recency.
    pub fn baseline_indices(&self) -> &[usize] {
        &self.baseline
    }

    /// Candidates sorted by recency, most recent first.
    pub fn baseline_order(&self) -> Vec<&Candidate> {
        self.baseline.iter().map(|&i| &self.candidates[i]).collect()
    }
}
