//! Query filtering over a candidate pool.
//!
//! A candidate matches when its search key contains the lowercased query as a
//! contiguous substring, anywhere in the key. Matching only decides inclusion:
//! results always come back in the pool's recency order.

use tracing::debug;

use crate::candidate::Candidate;
use crate::pool::CandidatePool;

#[cfg(test)]
mod tests;

/// Check whether `search_key` contains `query_lower` with no gaps or edits.
/// `query_lower` must already be lowercase.
pub fn is_tight_match(search_key: &str, query_lower: &str) -> bool {
    search_key.contains(query_lower)
}

/// Insertion-order indices of the candidates matching `query`, most recent first.
///
/// An empty query returns the full baseline order.
pub fn filter_indices(pool: &CandidatePool, query: &str) -> Vec<usize> {
    let baseline = pool.baseline_indices();
    if query.is_empty() {
        return baseline.to_vec();
    }

    let query_lower = query.to_lowercase();
    let matched: Vec<usize> = baseline
        .iter()
        .copied()
        .filter(|&i| {
            pool.get(i)
                .is_some_and(|c| is_tight_match(&c.search_key, &query_lower))
        })
        .collect();

    debug!(
        query = query_lower.as_str(),
        matched = matched.len(),
        pool = pool.len(),
        "filter"
    );
    matched
}

/// Candidates matching `query`, most recent first.
pub fn filter<'a>(pool: &'a CandidatePool, query: &str) -> Vec<&'a Candidate> {
    filter_indices(pool, query)
        .into_iter()
        .filter_map(|i| pool.get(i))
        .collect()
}
