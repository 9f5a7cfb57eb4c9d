use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Optional settings read from `config.toml`. Unknown or malformed content
/// falls back to defaults rather than aborting.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub store_path: Option<String>,
    // Generator default (optional)
    pub generator_length: Option<u16>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub generator_length: Option<u16>,
}

impl Config {
    pub fn create(path: Option<PathBuf>) -> Self {
        // 1) Load config file if present
        let file_cfg = load_file_config();

        // 2) Resolve store path precedence
        let store_path = resolve_store_path(path, &file_cfg);

        // 3) Generator default precedence: env > config file > None (command default)
        let generator_length = env::var("PASSBOOK_GEN_LENGTH")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .or(file_cfg.generator_length);

        debug!("resolved store path {:?}", store_path);
        Config {
            store_path,
            generator_length,
        }
    }
}

fn resolve_store_path(cli_path: Option<PathBuf>, file_cfg: &FileConfig) -> PathBuf {
    if let Some(p) = cli_path {
        return p;
    }

    if let Ok(p) = env::var("PASSBOOK_STORE_PATH") {
        return PathBuf::from(p);
    }

    if let Some(p) = file_cfg.store_path.as_ref() {
        return PathBuf::from(p);
    }

    default_store_path()
}

fn load_file_config() -> FileConfig {
    // Allow tests/users to override config dir via PASSBOOK_CONFIG_DIR; else use platform default
    let cfg_dir = if let Ok(p) = env::var("PASSBOOK_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    let path = cfg_dir.join("passbook").join("config.toml");
    if let Ok(bytes) = std::fs::read(&path) {
        if let Ok(s) = String::from_utf8(bytes) {
            toml::from_str::<FileConfig>(&s).unwrap_or_default()
        } else {
            FileConfig::default()
        }
    } else {
        FileConfig::default()
    }
}

fn default_store_path() -> PathBuf {
    // Prefer platform data_dir, allow override via PASSBOOK_DATA_DIR, fallback to ~/.passbook/passwords.json
    if let Ok(base) = env::var("PASSBOOK_DATA_DIR") {
        return PathBuf::from(base).join("passbook").join("passwords.json");
    }
    if let Some(mut p) = dirs::data_dir() {
        p.push("passbook");
        p.push("passwords.json");
        return p;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&home).join(".passbook").join("passwords.json")
}
