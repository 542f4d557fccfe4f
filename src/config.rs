use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::transform::{TransformMode, TransformOptions};

pub const CONFIG_FILE_NAME: &str = ".i18ninjectrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub ignore_test_files: bool,
    #[serde(default)]
    pub mode: TransformMode,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_call_names")]
    pub call_names: Vec<String>,
    #[serde(default = "default_translation_dir", alias = "translationDirectory")]
    pub translation_dir: String,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**"]
        .map(String::from)
        .to_vec()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_package() -> String {
    "@shopify/react-i18n".to_string()
}

fn default_call_names() -> Vec<String> {
    ["useI18n", "withI18n"].map(String::from).to_vec()
}

fn default_translation_dir() -> String {
    "translations".to_string()
}

fn default_fallback_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: false,
            mode: TransformMode::default(),
            package: default_package(),
            call_names: default_call_names(),
            translation_dir: default_translation_dir(),
            fallback_locale: default_fallback_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or a transform
    /// setting would produce unusable output.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.package.trim().is_empty() {
            bail!("'package' must not be empty");
        }
        if self.call_names.is_empty() {
            bail!("'callNames' must list at least one hook or decorator name");
        }
        if self.translation_dir.trim().is_empty()
            || self.translation_dir.contains('/')
            || self.translation_dir.contains('\\')
        {
            bail!(
                "'translationDir' must be a single directory name, got \"{}\"",
                self.translation_dir
            );
        }
        if self.fallback_locale.trim().is_empty() {
            bail!("'fallbackLocale' must not be empty");
        }

        Ok(())
    }

    /// Options for the transform, derived from this configuration.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            mode: self.mode,
            package: self.package.clone(),
            call_names: self.call_names.clone(),
            translation_dir: self.translation_dir.clone(),
            fallback_locale: self.fallback_locale.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
