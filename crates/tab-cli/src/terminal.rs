//! A `SwitcherHost` that renders frames as plain text.

use unicode_width::UnicodeWidthStr;

use tab_switcher::settings::DisplaySettings;
use tab_switcher::{CandidateId, ModifierStyle, RawItem, RenderFrame, SwitcherHost};

/// Render a frame as text lines: the query prompt, the tips line, then one
/// line per row (or the empty-state message).
pub fn format_frame(frame: &RenderFrame, display: &DisplaySettings, style: ModifierStyle) -> String {
    let mut out = format!("> {}\n  {}\n", frame.query, display.tips);

    if frame.empty_state {
        out.push_str(&format!("  {}\n", display.empty_text));
        return out;
    }

    let title_width = frame
        .rows
        .iter()
        .map(|r| r.title.width())
        .max()
        .unwrap_or(0);

    for row in &frame.rows {
        let pad = " ".repeat(title_width - row.title.width());
        let hint = row.shortcut.map(|s| s.hint(style)).unwrap_or_default();
        let line = format!("  {}{}  [{}]  {}", row.title, pad, row.kind, hint);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Host backed by a fixed list of views, recording everything it is asked to do.
pub struct TerminalHost {
    items: Vec<RawItem>,
    display: DisplaySettings,
    style: ModifierStyle,
    pub transcript: Vec<String>,
    pub activated: Vec<CandidateId>,
}

impl TerminalHost {
    pub fn new(items: Vec<RawItem>, display: DisplaySettings) -> Self {
        let style = display.modifier_style();
        Self {
            items,
            display,
            style,
            transcript: Vec::new(),
            activated: Vec::new(),
        }
    }

    fn title_of(&self, id: CandidateId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.display_text.as_str())
    }
}

impl SwitcherHost for TerminalHost {
    fn enumerate_candidates(&self) -> Vec<RawItem> {
        self.items.clone()
    }

    fn activate(&mut self, id: CandidateId) {
        let title = self.title_of(id).unwrap_or("?").to_string();
        self.transcript.push(format!("=> activate {id} {title}\n"));
        self.activated.push(id);
    }

    fn render_results(&mut self, frame: &RenderFrame) {
        self.transcript
            .push(format_frame(frame, &self.display, self.style));
    }
}
