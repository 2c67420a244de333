
use tab_core::{CandidateId, CandidatePool, RawItem, ViewKind};

use super::types::KeyEvent;
use super::{KeyResponse, QuerySession};

pub(super) fn make_pool(entries: &[(u64, &str, u64)]) -> CandidatePool {
    let items = entries.iter().map(|&(id, text, last_active)| RawItem {
        id: CandidateId(id),
        display_text: text.to_string(),
        last_active,
        kind: ViewKind::Markdown,
        icon: None,
    });
    CandidatePool::snapshot(items, &[ViewKind::Markdown])
}

/// Pool from the switcher walkthrough: A@300 "Alpha Notes", B@200
/// "Beta Draft", C@100 "Alpha Review".
pub(super) fn scenario_pool() -> CandidatePool {
    make_pool(&[
        (1, "Alpha Notes", 300),
        (2, "Beta Draft", 200),
        (3, "Alpha Review", 100),
    ])
}

/// Pool with more candidates than there are digit shortcuts.
pub(super) fn large_pool(n: u64) -> CandidatePool {
    let entries: Vec<(u64, String, u64)> = (0..n)
        .map(|i| (i, format!("note {i}"), 1000 - i))
        .collect();
    let refs: Vec<(u64, &str, u64)> = entries
        .iter()
        .map(|(id, text, t)| (*id, text.as_str(), *t))
        .collect();
    make_pool(&refs)
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut QuerySession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|c| session.handle_key(KeyEvent::from_raw(&c.to_string(), false)))
        .collect()
}

pub(super) fn result_ids(session: &QuerySession) -> Vec<u64> {
    session.results().iter().map(|e| e.candidate.id.0).collect()
}
