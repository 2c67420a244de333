//! Keyboard-driven query session for the tab switcher.
//!
//! `QuerySession` owns the query buffer and the current result list, and
//! processes each keystroke, returning effects (render, activate, close) that
//! the host applies.

mod key_handlers;
mod response;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use tab_core::matcher::filter_indices;
use tab_core::shortcuts::bind;
use tab_core::{Candidate, CandidatePool};

pub use types::{Effect, KeyEvent, KeyResponse, RenderFrame, ResultEntry, ResultRow, SessionState};

/// One open switcher: a pool snapshot plus the query typed so far.
pub struct QuerySession {
    pool: CandidatePool,
    buffer: String,
    /// Pool indices of the current results, in display order.
    results: Vec<usize>,
    state: SessionState,
}

impl QuerySession {
    /// Open a session over `pool` in browse mode.
    pub fn open(pool: CandidatePool) -> Self {
        debug!(candidates = pool.len(), "session open");
        let results = pool.baseline_indices().to_vec();
        Self {
            pool,
            buffer: String::new(),
            results,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Current results in display order, with their shortcut labels.
    pub fn results(&self) -> Vec<ResultEntry<'_>> {
        let matched = self.state == SessionState::Filtering;
        let mut labels = bind(&self.results).into_iter().peekable();
        self.results
            .iter()
            .enumerate()
            .filter_map(|(pos, &i)| {
                let shortcut = labels
                    .next_if(|&(labeled, _)| labeled == pos)
                    .map(|(_, label)| label);
                self.pool.get(i).map(|candidate| ResultEntry {
                    candidate,
                    matched,
                    shortcut,
                })
            })
            .collect()
    }

    /// Candidate shown at `position`, if any.
    pub fn result_at(&self, position: usize) -> Option<&Candidate> {
        self.results.get(position).and_then(|&i| self.pool.get(i))
    }

    /// Frame for the current results (used for the initial render at open).
    pub fn render(&self) -> RenderFrame {
        response::build_render_frame(self)
    }

    /// Tear down the session. All state is dropped; later events are ignored.
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        debug!("session close");
        self.buffer.clear();
        self.results.clear();
        self.pool = CandidatePool::default();
        self.state = SessionState::Closed;
    }

    /// Recompute results from the buffer. Called after every buffer mutation.
    fn refresh(&mut self) {
        self.results = filter_indices(&self.pool, &self.buffer);
        self.state = if self.buffer.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Filtering
        };
    }
}
