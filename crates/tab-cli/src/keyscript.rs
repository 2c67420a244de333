//! Parser for key scripts such as `alpha<BS><C-2>`.
//!
//! Plain characters are typed as-is. Angle-bracket tokens name special keys:
//! `<Enter>`, `<BS>`, `<Del>`, `<Esc>`, `<Tab>`, `<Up>`, `<Down>`, `<lt>` for a
//! literal `<`, and `<C-x>` / `<D-x>` for `x` with Ctrl / Cmd held.

/// One raw key event: host key identifier plus modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptKey {
    pub key: String,
    pub modifier: bool,
}

impl ScriptKey {
    fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifier: false,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("unterminated key token starting at byte {0}")]
    Unterminated(usize),
    #[error("unknown key token: <{0}>")]
    UnknownKey(String),
}

pub fn parse_key_script(script: &str) -> Result<Vec<ScriptKey>, KeyScriptError> {
    let mut keys = Vec::new();
    let mut rest = script;
    let mut offset = 0;

    while let Some(c) = rest.chars().next() {
        if c != '<' {
            keys.push(ScriptKey::plain(c.to_string()));
            offset += c.len_utf8();
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let end = rest.find('>').ok_or(KeyScriptError::Unterminated(offset))?;
        keys.push(parse_token(&rest[1..end])?);
        offset += end + 1;
        rest = &rest[end + 1..];
    }
    Ok(keys)
}

fn parse_token(token: &str) -> Result<ScriptKey, KeyScriptError> {
    let named = match token.to_ascii_lowercase().as_str() {
        "enter" | "cr" => Some("Enter"),
        "bs" | "backspace" => Some("Backspace"),
        "del" | "delete" => Some("Delete"),
        "esc" | "escape" => Some("Escape"),
        "tab" => Some("Tab"),
        "up" => Some("ArrowUp"),
        "down" => Some("ArrowDown"),
        "space" => Some(" "),
        "lt" => Some("<"),
        _ => None,
    };
    if let Some(key) = named {
        return Ok(ScriptKey::plain(key));
    }

    let modified = token
        .strip_prefix("C-")
        .or_else(|| token.strip_prefix("D-"))
        .filter(|k| k.chars().count() == 1);
    match modified {
        Some(key) => Ok(ScriptKey {
            key: key.to_string(),
            modifier: true,
        }),
        None => Err(KeyScriptError::UnknownKey(token.to_string())),
    }
}
