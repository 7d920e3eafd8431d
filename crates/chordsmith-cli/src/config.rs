//! TOML configuration for the chordsmith binary

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

#[derive(serde::Deserialize, Default)]
pub struct Config {
    /// Root for per-class output directories
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    /// Renderer executable override
    #[serde(default)]
    pub renderer: Option<String>,
    /// Per-class overrides keyed by class name
    #[serde(default)]
    pub classes: BTreeMap<String, ClassConfig>,
}

#[derive(serde::Deserialize, Default, Clone)]
pub struct ClassConfig {
    #[serde(default)]
    pub soundfont: Option<PathBuf>,
    #[serde(default)]
    pub gain: Option<f32>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Load config from `path`; a missing file yields the defaults, a
/// malformed one is an error.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let cfg: Config = toml::from_str(
            r#"
            output_root = "assets"
            renderer = "fluidsynth"

            [classes.guitar]
            soundfont = "fonts/Electric_guitar.SF2"
            gain = 2.5

            [classes.drums]
            soundfont = "fonts/Drum.sf2"
            output_dir = "hits"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.output_root.as_deref(), Some(Path::new("assets")));
        assert_eq!(cfg.classes["guitar"].gain, Some(2.5));
        assert_eq!(
            cfg.classes["drums"].output_dir.as_deref(),
            Some(Path::new("hits"))
        );
    }

    #[test]
    fn test_empty_config_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.output_root.is_none());
        assert!(cfg.classes.is_empty());
    }
}
