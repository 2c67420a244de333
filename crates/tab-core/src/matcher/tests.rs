use proptest::prelude::*;

use super::*;
use crate::candidate::{CandidateId, RawItem, ViewKind};

fn pool_of(entries: &[(u64, &str, u64)]) -> CandidatePool {
    let items = entries.iter().map(|&(id, text, last_active)| RawItem {
        id: CandidateId(id),
        display_text: text.to_string(),
        last_active,
        kind: ViewKind::Markdown,
        icon: None,
    });
    CandidatePool::snapshot(items, &[ViewKind::Markdown])
}

fn ids(candidates: &[&Candidate]) -> Vec<u64> {
    candidates.iter().map(|c| c.id.0).collect()
}

fn scenario_pool() -> CandidatePool {
    pool_of(&[
        (1, "Alpha Notes", 300),
        (2, "Beta Draft", 200),
        (3, "Alpha Review", 100),
    ])
}

#[test]
fn empty_query_is_baseline() {
    let pool = scenario_pool();
    assert_eq!(filter(&pool, ""), pool.baseline_order());
    assert_eq!(ids(&filter(&pool, "")), vec![1, 2, 3]);
}

#[test]
fn query_filters_and_keeps_recency_order() {
    let pool = scenario_pool();
    assert_eq!(ids(&filter(&pool, "alpha")), vec![1, 3]);
    assert_eq!(ids(&filter(&pool, "draft")), vec![2]);
}

#[test]
fn match_is_case_insensitive() {
    let pool = scenario_pool();
    assert_eq!(ids(&filter(&pool, "ALPHA")), vec![1, 3]);
    assert_eq!(ids(&filter(&pool, "ReViEw")), vec![3]);
}

#[test]
fn match_is_position_independent() {
    let pool = scenario_pool();
    assert_eq!(ids(&filter(&pool, "otes")), vec![1]);
    assert_eq!(ids(&filter(&pool, "a n")), vec![1]);
}

#[test]
fn no_fuzziness_is_tolerated() {
    let pool = scenario_pool();
    // Subsequence but not substring.
    assert!(filter(&pool, "alpnotes").is_empty());
    // Single substitution.
    assert!(filter(&pool, "alphs").is_empty());
    // Transposition.
    assert!(filter(&pool, "lapha").is_empty());
}

#[test]
fn rank_ignores_match_quality() {
    // The exact title is the least recent, so it ranks last.
    let pool = pool_of(&[
        (1, "my review notes", 30),
        (2, "review backlog", 20),
        (3, "review", 10),
    ]);
    assert_eq!(ids(&filter(&pool, "review")), vec![1, 2, 3]);
}

#[test]
fn equal_timestamps_keep_pool_order() {
    let pool = pool_of(&[(7, "log a", 5), (3, "log b", 5), (9, "log c", 5)]);
    assert_eq!(ids(&filter(&pool, "log")), vec![7, 3, 9]);
}

#[test]
fn romanized_titles_match_on_pinyin() {
    let pool = pool_of(&[(1, "历史", 10), (2, "Beta Draft", 20)]);
    assert_eq!(ids(&filter(&pool, "li")), vec![1]);
    assert_eq!(ids(&filter(&pool, "lishi")), vec![1]);
    assert!(filter(&pool, "xyz").is_empty());
}

#[test]
fn no_match_is_empty_not_error() {
    let pool = scenario_pool();
    assert!(filter(&pool, "zzz").is_empty());
    assert!(filter_indices(&pool, "zzz").is_empty());
}

#[test]
fn empty_pool_never_matches() {
    let pool = pool_of(&[]);
    assert!(filter(&pool, "").is_empty());
    assert!(filter(&pool, "a").is_empty());
}

#[test]
fn tight_match_helper() {
    assert!(is_tight_match("alpha notes", "pha n"));
    assert!(is_tight_match("alpha notes", ""));
    assert!(!is_tight_match("alpha notes", "alphanotes"));
}

// --- property tests ---

fn arb_pool() -> impl Strategy<Value = CandidatePool> {
    prop::collection::vec(("[a-d ]{0,8}", 0u64..5), 0..12).prop_map(|rows| {
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(i, (text, last_active))| RawItem {
                id: CandidateId(i as u64),
                display_text: text,
                last_active,
                kind: ViewKind::Markdown,
                icon: None,
            });
        CandidatePool::snapshot(items, &[ViewKind::Markdown])
    })
}

proptest! {
    #[test]
    fn results_contain_query_and_nothing_else(pool in arb_pool(), query in "[a-dA-D ]{1,3}") {
        let results = filter(&pool, &query);
        let lower = query.to_lowercase();
        for c in &results {
            prop_assert!(c.search_key.contains(&lower));
        }
        let expected = pool.iter().filter(|c| c.search_key.contains(&lower)).count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn results_are_recency_sorted_and_stable(pool in arb_pool(), query in "[a-d]{0,2}") {
        let indices = filter_indices(&pool, &query);
        for pair in indices.windows(2) {
            let (a, b) = (pool.get(pair[0]).unwrap(), pool.get(pair[1]).unwrap());
            prop_assert!(a.last_active >= b.last_active);
            if a.last_active == b.last_active {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn appending_never_widens(pool in arb_pool(), query in "[a-d ]{0,3}", c in "[a-d ]") {
        let before = filter(&pool, &query).len();
        let after = filter(&pool, &format!("{query}{c}")).len();
        prop_assert!(after <= before);
    }
}
