use std::fs;

use tab_switcher::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let kinds: Vec<&str> = s.pool.eligible_kinds.iter().map(|k| k.as_str()).collect();
    println!(
        "OK: pool.eligible_kinds=[{}], display.modifier={}",
        kinds.join(", "),
        s.display.modifier_style().as_str()
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading settings: {}");
}
