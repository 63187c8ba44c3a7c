#![forbid(unsafe_code)]

//! Harness settings read from the environment.
//!
//! | Variable        | Meaning                                   | Default   |
//! |-----------------|-------------------------------------------|-----------|
//! | `OKTA_SIZE`     | Surface size as `WIDTHxHEIGHT`            | `600x600` |
//! | `OKTA_CONFIG`   | Path to an `OktagramConfig` JSON file     | built-in  |
//! | `OKTA_LOG`      | `tracing` filter directives               | `warn`    |
//! | `OKTA_LOG_JSON` | Emit logs as JSON lines when set to true  | off       |

use std::io;
use std::path::Path;

use okta_core::geometry::Size;
use okta_spell::OktagramConfig;

pub const DEFAULT_SIZE: Size = Size::square(600.0);

/// Resolved harness settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarnessSettings {
    pub size: Size,
    pub config: OktagramConfig,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            config: OktagramConfig::default(),
        }
    }
}

impl HarnessSettings {
    /// Read `OKTA_SIZE` and `OKTA_CONFIG`.
    pub fn from_env() -> okta::Result<Self> {
        let mut settings = Self::default();
        if let Some(raw) = env_string("OKTA_SIZE") {
            settings.size = parse_size(&raw).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("OKTA_SIZE must look like 600x600, got {raw:?}"),
                )
            })?;
        }
        if let Some(path) = env_string("OKTA_CONFIG") {
            settings.config = load_config(Path::new(&path))?;
        }
        settings.config.validate()?;
        Ok(settings)
    }
}

/// Parse `WIDTHxHEIGHT`. Both sides must be positive and finite.
pub fn parse_size(raw: &str) -> Option<Size> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    (w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0).then(|| Size::new(w, h))
}

/// Load a config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> okta::Result<OktagramConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: OktagramConfig = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Boolean env var; `None` when unset or blank.
pub fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let enabled = matches!(
        trimmed,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    );
    Some(enabled)
}

/// Trimmed env var; `None` when unset or blank.
pub fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parsing() {
        assert_eq!(parse_size("800x600"), Some(Size::new(800.0, 600.0)));
        assert_eq!(parse_size(" 320 X 240 "), Some(Size::new(320.0, 240.0)));
        assert_eq!(parse_size("800"), None);
        assert_eq!(parse_size("0x600"), None);
        assert_eq!(parse_size("axb"), None);
        assert_eq!(parse_size("-5x5"), None);
    }

    #[test]
    fn unset_env_reads_as_none() {
        assert_eq!(env_flag("OKTA_HARNESS_UNSET_FLAG"), None);
        assert_eq!(env_string("OKTA_HARNESS_UNSET_STRING"), None);
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let dir = std::env::temp_dir().join(format!("okta-harness-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"logic":{"min_actions_for_skip":2}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.logic.min_actions_for_skip, 2);
        assert_eq!(config.layout, OktagramConfig::default().layout);
        assert_eq!(config.scene, OktagramConfig::default().scene);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, okta::Error::Io(_)));
    }
}
