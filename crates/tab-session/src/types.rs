use tab_core::unicode::is_query_char;
use tab_core::{Candidate, CandidateId, ShortcutLabel, ViewKind};

/// A keystroke, classified for the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Typeable character (letter, digit, space, hyphen, underscore).
    Char(char),
    /// Backspace or forward Delete; both drop the last buffer character.
    Backspace,
    Enter,
    /// Digit pressed with the platform modifier held.
    SelectDigit(u8),
    /// Anything else. Swallowed without a state change.
    Other(String),
}

impl KeyEvent {
    /// Classify a raw host key event.
    ///
    /// `key` is the host's key identifier ("a", "Enter", "Backspace", ...),
    /// `modifier` whether Ctrl/Cmd was held. Modified digits take priority over
    /// typing; other modified printable keys still type.
    pub fn from_raw(key: &str, modifier: bool) -> Self {
        let mut chars = key.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        if let Some(c) = single.filter(char::is_ascii_digit) {
            if modifier {
                return Self::SelectDigit(c as u8 - b'0');
            }
        }

        match key {
            "Enter" => Self::Enter,
            "Backspace" | "Delete" => Self::Backspace,
            _ => match single {
                Some(c) if is_query_char(c) => Self::Char(c),
                _ => Self::Other(key.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Empty buffer: every candidate is listed in baseline order.
    Idle,
    /// Non-empty buffer: only matching candidates are listed.
    Filtering,
    /// A candidate was activated or the session was torn down.
    Closed,
}

/// One entry of the session's current result list.
#[derive(Debug, Clone, Copy)]
pub struct ResultEntry<'a> {
    pub candidate: &'a Candidate,
    /// True when the entry passed a non-empty query.
    pub matched: bool,
    pub shortcut: Option<ShortcutLabel>,
}

/// A row handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub position: usize,
    pub id: CandidateId,
    pub title: String,
    pub kind: ViewKind,
    pub icon: Option<String>,
    pub shortcut: Option<ShortcutLabel>,
}

/// Everything the renderer needs after a recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub query: String,
    pub rows: Vec<ResultRow>,
    /// Set whenever `rows` is empty, whether the pool had no candidates or
    /// the query matched none.
    pub empty_state: bool,
}

/// Instruction for the host, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render(RenderFrame),
    Activate(CandidateId),
    Close,
}

/// Response from `handle_key` / `select_position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// Whether the host should suppress its own handling of the key.
    pub consumed: bool,
    pub effects: Vec<Effect>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            effects: Vec::new(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn render(frame: RenderFrame) -> Self {
        Self {
            consumed: true,
            effects: vec![Effect::Render(frame)],
        }
    }

    pub(crate) fn activate(id: CandidateId) -> Self {
        Self {
            consumed: true,
            effects: vec![Effect::Activate(id), Effect::Close],
        }
    }

    /// The frame carried by this response, if it re-rendered.
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.effects.iter().find_map(|e| match e {
            Effect::Render(frame) => Some(frame),
            _ => None,
        })
    }

    /// The candidate this response activates, if any.
    pub fn activated(&self) -> Option<CandidateId> {
        self.effects.iter().find_map(|e| match e {
            Effect::Activate(id) => Some(*id),
            _ => None,
        })
    }

    pub fn closes(&self) -> bool {
        self.effects.contains(&Effect::Close)
    }
}
