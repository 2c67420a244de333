//! Keyboard tab switcher.
//!
//! The host workspace implements [`SwitcherHost`]; [`Switcher`] opens one
//! query session at a time over a snapshot of the host's views, feeds it key
//! events and applies the resulting effects back to the host.

mod trace_init;

use tracing::{debug, info};

pub use tab_core::settings::{self, settings};
pub use tab_core::{
    matcher, shortcuts, transliterate, Candidate, CandidateId, CandidatePool, ModifierStyle,
    RawItem, ShortcutLabel, ViewKind,
};
pub use tab_session::{
    Effect, KeyEvent, KeyResponse, QuerySession, RenderFrame, ResultEntry, ResultRow,
    SessionState,
};
pub use trace_init::init_tracing;

/// The host workspace as seen by the switcher.
pub trait SwitcherHost {
    /// Every view currently open in the window. Eligibility filtering happens
    /// on the switcher side.
    fn enumerate_candidates(&self) -> Vec<RawItem>;

    /// Bring the given view to the foreground.
    fn activate(&mut self, id: CandidateId);

    /// Display the current results. Called after every recompute.
    fn render_results(&mut self, frame: &RenderFrame);
}

/// Owner of the (at most one) open session.
#[derive(Default)]
pub struct Switcher {
    session: Option<QuerySession>,
}

impl Switcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&QuerySession> {
        self.session.as_ref()
    }

    /// Open a new session, tearing down any previous one first, and render
    /// the initial frame.
    pub fn open<H: SwitcherHost>(&mut self, host: &mut H) {
        self.close();

        let eligible = &settings().pool.eligible_kinds;
        let pool = CandidatePool::snapshot(host.enumerate_candidates(), eligible);
        info!(candidates = pool.len(), "switcher open");

        let session = QuerySession::open(pool);
        host.render_results(&session.render());
        self.session = Some(session);
    }

    /// Feed a raw key event to the open session. Returns whether the key was
    /// consumed; without an open session nothing is consumed.
    pub fn handle_key<H: SwitcherHost>(&mut self, host: &mut H, key: &str, modifier: bool) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let resp = session.handle_key(KeyEvent::from_raw(key, modifier));
        let consumed = resp.consumed;
        self.apply(host, resp);
        consumed
    }

    /// Pointer selection of the row at `position`.
    pub fn select<H: SwitcherHost>(&mut self, host: &mut H, position: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let resp = session.select_position(position);
        self.apply(host, resp);
    }

    /// Tear down the open session, if any.
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
            debug!("switcher closed");
        }
    }

    fn apply<H: SwitcherHost>(&mut self, host: &mut H, resp: KeyResponse) {
        for effect in resp.effects {
            match effect {
                Effect::Render(frame) => host.render_results(&frame),
                Effect::Activate(id) => {
                    info!(%id, "activate");
                    host.activate(id);
                }
                Effect::Close => self.close(),
            }
        }
    }
}
