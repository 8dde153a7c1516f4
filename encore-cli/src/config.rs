/// Config file loading and creation for the encore CLI.
///
/// Config lives at ~/.config/encore/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct EncoreConfig {
    pub threshold: Option<u32>,
    pub depth: Option<usize>,
    pub skip_policy: Option<String>,
    pub max_comparisons: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# encore configuration
# All values here can be overridden by CLI flags.

# Games threshold for --focus mode: items with fewer decided comparisons
# count as under-ranked.
# threshold = 3

# Maximum win-chain length treated as already answered.
# depth = 3

# What a skipped pair means: \"block\" (never offered again) or
# \"reoffer\" (eligible on later cycles).
# skip_policy = \"block\"

# Stop after this many presented comparisons, even if the pool is not
# ranked yet.
# max_comparisons = 50
";

/// Returns the default config path: ~/.config/encore/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("encore").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> EncoreConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => EncoreConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
