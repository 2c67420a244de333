//! Candidate model, transliteration, matching and shortcut binding for the
//! tab switcher. Everything here is pure and infallible apart from settings
//! parsing.

pub mod candidate;
pub mod matcher;
pub mod pool;
pub mod settings;
pub mod shortcuts;
pub mod transliterate;
pub mod unicode;

pub use candidate::{Candidate, CandidateId, RawItem, ViewKind};
pub use pool::CandidatePool;
pub use shortcuts::{ModifierStyle, ShortcutLabel};
