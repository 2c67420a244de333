use clap::{Parser, Subcommand};

use tab_cli::commands::{config_ops, switch_ops};

#[derive(Parser)]
#[command(name = "tabtool", about = "Tab switcher diagnostics")]
struct Cli {
    /// Settings TOML to use instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    /// Directory for the JSONL trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter a tabs file with a query and print ranked, labeled results
    Filter {
        /// JSON array of tabs (id, display_text, last_active, kind, icon?)
        tabs_file: String,
        /// Query; empty lists every eligible tab by recency
        #[arg(default_value = "")]
        query: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a key script against a switcher session and print every frame
    Simulate {
        /// JSON array of tabs
        tabs_file: String,
        /// Keys, e.g. "alpha<BS><C-2>" or "li<Enter>"
        keys: String,
    },
    /// Print the search key for a title
    Transliterate {
        /// Title text
        text: String,
    },
    /// Print the embedded default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        tab_switcher::init_tracing(std::path::Path::new(dir));
    }
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Filter {
            tabs_file,
            query,
            json,
        } => switch_ops::filter_cmd(&tabs_file, &query, json),
        Command::Simulate { tabs_file, keys } => switch_ops::simulate_cmd(&tabs_file, &keys),
        Command::Transliterate { text } => switch_ops::transliterate_cmd(&text),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
