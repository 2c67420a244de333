use std::fs;
use std::path::Path;

use tab_switcher::matcher::filter;
use tab_switcher::shortcuts::label_for_position;
use tab_switcher::transliterate::transliterate;
use tab_switcher::{settings, CandidatePool, RawItem, Switcher};

use crate::keyscript::parse_key_script;
use crate::terminal::TerminalHost;

#[derive(Debug, thiserror::Error)]
pub enum TabsFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tabs JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of raw items.
pub fn load_tabs(path: &Path) -> Result<Vec<RawItem>, TabsFileError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn filter_cmd(tabs_file: &str, query: &str, json: bool) {
    let items = die!(load_tabs(Path::new(tabs_file)), "Error loading {tabs_file}: {}");
    let pool = CandidatePool::snapshot(items, &settings().pool.eligible_kinds);
    let results = filter(&pool, query);

    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .enumerate()
            .map(|(pos, c)| {
                serde_json::json!({
                    "id": c.id,
                    "title": c.display_text,
                    "search_key": c.search_key,
                    "last_active": c.last_active,
                    "shortcut": label_for_position(pos).map(|l| l.digit()),
                })
            })
            .collect();
        println!("{}", die!(serde_json::to_string_pretty(&rows), "Error: {}"));
        return;
    }

    if results.is_empty() {
        println!("{}", settings().display.empty_text);
        return;
    }
    for (pos, c) in results.iter().enumerate() {
        let label = label_for_position(pos)
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{label} {} ({}) t={}", c.display_text, c.search_key, c.last_active);
    }
}

pub fn simulate_cmd(tabs_file: &str, script: &str) {
    let items = die!(load_tabs(Path::new(tabs_file)), "Error loading {tabs_file}: {}");
    let keys = die!(parse_key_script(script), "Error parsing key script: {}");

    let mut host = TerminalHost::new(items, settings().display.clone());
    let mut switcher = Switcher::new();
    switcher.open(&mut host);

    for key in &keys {
        if !switcher.is_open() {
            break;
        }
        switcher.handle_key(&mut host, &key.key, key.modifier);
    }

    for entry in &host.transcript {
        print!("{entry}");
    }
    if switcher.is_open() {
        println!("(switcher still open)");
    }
}

pub fn transliterate_cmd(text: &str) {
    println!("{}", transliterate(text));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tab_switcher::{CandidateId, ViewKind};

    #[test]
    fn load_tabs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "display_text": "Alpha Notes", "last_active": 300, "kind": "markdown"}},
                {{"id": 2, "display_text": "历史", "last_active": 200, "kind": "surfing-view", "icon": "globe"}}
            ]"#
        )
        .unwrap();

        let items = load_tabs(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, CandidateId(2));
        assert_eq!(items[1].kind, ViewKind::WebView);
        assert_eq!(items[1].icon.as_deref(), Some("globe"));
    }

    #[test]
    fn load_tabs_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            load_tabs(file.path()),
            Err(TabsFileError::Json(_))
        ));
    }

    #[test]
    fn load_tabs_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_tabs(&dir.path().join("missing.json")),
            Err(TabsFileError::Io(_))
        ));
    }
}
