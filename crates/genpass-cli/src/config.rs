use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenpassConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
    #[serde(default = "default_remember")]
    pub remember: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: None,
            remember: default_remember(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

fn default_remember() -> bool {
    true
}

impl GenpassConfig {
    pub fn new(store_path: Option<PathBuf>, remember: bool, log_level: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: store_path.map(|path| path.to_string_lossy().to_string()),
                remember,
            },
            logging: LoggingSection { level: log_level },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("constraints.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<GenpassConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &GenpassConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("genpass"));
        }
    }
    Ok(home_dir()?.join(".config").join("genpass"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: GenpassConfig = toml::from_str("").expect("empty config should parse");
        assert!(config.store.path.is_none());
        assert!(config.store.remember);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config: GenpassConfig =
            toml::from_str("[store]\npath = \"/tmp/c.json\"\n").expect("should parse");
        assert_eq!(config.store.path.as_deref(), Some("/tmp/c.json"));
        assert!(config.store.remember);

        let config: GenpassConfig =
            toml::from_str("[store]\nremember = false\n\n[logging]\nlevel = \"debug\"\n")
                .expect("should parse");
        assert!(!config.store.remember);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("genpass").join("config.toml");
        let config = GenpassConfig::new(
            Some(dir.path().join("store.json")),
            false,
            Some("info".to_string()),
        );

        write_config(&path, &config).expect("write should succeed");
        let read = read_config(&path).expect("read should succeed");

        assert_eq!(read.store.path, config.store.path);
        assert!(!read.store.remember);
        assert_eq!(read.logging.level.as_deref(), Some("info"));
    }
}
