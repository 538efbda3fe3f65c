use crate::ids::IdStrategy;
use crate::{Error, Result};
use formsmith_engine::{Breakpoints, CodegenOptions};
use formsmith_types::Layout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FORMSMITH_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.formsmith/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FORMSMITH_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("formsmith").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".formsmith").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuilderConfig {
    pub default_layout: Layout,
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub medium_breakpoint: u32,
    pub large_breakpoint: u32,
    /// Width assumed when no terminal size is known
    pub viewport_width: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        Self {
            medium_breakpoint: breakpoints.medium,
            large_breakpoint: breakpoints.large,
            viewport_width: 1280,
        }
    }
}

impl PreviewConfig {
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            medium: self.medium_breakpoint,
            large: self.large_breakpoint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub codegen: CodegenOptions,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.preview.medium_breakpoint > self.preview.large_breakpoint {
            return Err(Error::Config(format!(
                "preview.medium_breakpoint ({}) must not exceed preview.large_breakpoint ({})",
                self.preview.medium_breakpoint, self.preview.large_breakpoint
            )));
        }

        let name = &self.codegen.component_name;
        let valid_name = name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_name {
            return Err(Error::Config(format!(
                "codegen.component_name '{}' must be a PascalCase identifier",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.builder.default_layout, Layout::Single);
        assert_eq!(config.builder.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.preview.breakpoints(), Breakpoints::default());
        assert_eq!(config.codegen.component_name, "GeneratedForm");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.builder.default_layout = Layout::Triple;
        config.builder.id_strategy = IdStrategy::Random;
        config.codegen.component_name = "ContactForm".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[builder]\ndefault_layout = \"double\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.builder.default_layout, Layout::Double);
        assert_eq!(config.preview, PreviewConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "[preview]\nmedium_breakpoint = 2000\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        std::fs::write(&config_path, "[codegen]\ncomponent_name = \"my-form\"\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        std::fs::write(&config_path, "[builder]\ndefault_layout = \"quad\"\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/formsmith/custom.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/formsmith/custom.toml"));
        Ok(())
    }
}
