//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".globtree/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "Defaults::default_glob")]
    pub glob: String,
    #[serde(default)]
    pub ignore_glob: Option<String>,
    #[serde(default = "Defaults::default_file_count")]
    pub file_count: String,
}

impl Defaults {
    fn default_glob() -> String {
        crate::app::explorer::DEFAULT_GLOB.to_owned()
    }

    fn default_file_count() -> String {
        "multiple".into()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            glob: Self::default_glob(),
            ignore_glob: None,
            file_count: Self::default_file_count(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    glob: Option<String>,
    ignore_glob: Option<String>,
    file_count: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            glob: env::var("GLOBTREE_GLOB").ok(),
            ignore_glob: env::var("GLOBTREE_IGNORE_GLOB").ok(),
            file_count: env::var("GLOBTREE_FILE_COUNT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(glob: &str, file_count: &str) -> Self {
        Self {
            glob: Some(glob.to_owned()),
            ignore_glob: None,
            file_count: Some(file_count.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace
    /// config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        glob: if overlay.glob != Defaults::default_glob() {
            overlay.glob
        } else {
            base.glob
        },
        ignore_glob: overlay.ignore_glob.or(base.ignore_glob),
        file_count: if overlay.file_count != Defaults::default_file_count() {
            overlay.file_count
        } else {
            base.file_count
        },
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("globtree/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(glob) = env.glob {
        config.defaults.glob = glob;
    }
    if let Some(ignore_glob) = env.ignore_glob {
        config.defaults.ignore_glob = Some(ignore_glob);
    }
    if let Some(file_count) = env.file_count {
        config.defaults.file_count = file_count;
    }
    config
}
