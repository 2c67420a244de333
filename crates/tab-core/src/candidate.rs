use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transliterate::transliterate;

/// Opaque identity of a host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of view behind a tab, as reported by the host's view-type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewKind {
    Markdown,
    WebView,
    WebFrame,
    Other(String),
}

impl ViewKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Markdown => "markdown",
            Self::WebView => "surfing-view",
            Self::WebFrame => "surfing-iframe-view",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ViewKind {
    fn from(s: &str) -> Self {
        match s {
            "markdown" => Self::Markdown,
            "surfing-view" => Self::WebView,
            "surfing-iframe-view" => Self::WebFrame,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ViewKind {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<ViewKind> for String {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view as enumerated by the host, before eligibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: CandidateId,
    pub display_text: String,
    pub last_active: u64,
    pub kind: ViewKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Immutable snapshot of a switchable view, taken once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub display_text: String,
    /// `transliterate(display_text)` at snapshot time.
    pub search_key: String,
    pub last_active: u64,
    pub kind: ViewKind,
    pub icon: Option<String>,
}

impl From<RawItem> for Candidate {
    fn from(item: RawItem) -> Self {
        let search_key = transliterate(&item.display_text);
        Self {
            id: item.id,
            display_text: item.display_text,
            search_key,
            last_active: item.last_active,
            kind: item.kind,
            icon: item.icon,
        }
    }
}
