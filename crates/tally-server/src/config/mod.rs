//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use tally_core::error::{Result, TallyError};

pub use schema::{LimitsSection, OpsSection, ServerSection, TallyConfig};

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "TALLY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

pub fn load_from_file(path: &str) -> Result<TallyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TallyConfig> {
    let cfg: TallyConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve config for the binary from `TALLY_CONFIG` or `tally.yaml`.
pub fn load_from_env() -> Result<TallyConfig> {
    let explicit = std::env::var(CONFIG_ENV).ok();
    load_from_path_or_default(explicit.as_deref(), DEFAULT_CONFIG_PATH)
}

/// An explicit path must be readable. A missing default file falls back to
/// built-in defaults; any other read error on it is reported.
pub fn load_from_path_or_default(explicit: Option<&str>, default_path: &str) -> Result<TallyConfig> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }
    match fs::read_to_string(default_path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = default_path, "no config file, using defaults");
            Ok(TallyConfig::default())
        }
        Err(e) => Err(TallyError::Internal(format!(
            "read config failed ({default_path}): {e}"
        ))),
    }
}
