// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rendering configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "partscad.toml";

/// Global OpenSCAD resolution knobs written at the top of every file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// `$fn`: fixed number of fragments, unset by default
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    pub fn_: Option<u32>,
    /// `$fa`: minimum fragment angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fa: Option<f64>,
    /// `$fs`: minimum fragment size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<f64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fn_: None,
            fa: Some(1.0),
            fs: Some(0.4),
        }
    }
}

/// Partscad configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderSettings,
    /// Directories searched for external `.scad` libraries
    pub library_paths: Vec<PathBuf>,
    /// Where the CLI writes rendered models
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            library_paths: Vec::new(),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `partscad.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PARTSCAD_*` overrides read through `var`
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(paths) = var("PARTSCAD_LIBRARY_PATH") {
            self.library_paths = std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }

        if let Some(output_dir) = var("PARTSCAD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(fn_) = var("PARTSCAD_FN") {
            let fn_ = fn_
                .parse()
                .with_context(|| format!("PARTSCAD_FN is not a fragment count: {fn_:?}"))?;
            self.render.fn_ = Some(fn_);
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.fn_, None);
        assert_eq!(config.render.fa, Some(1.0));
        assert_eq!(config.render.fs, Some(0.4));
        assert!(config.library_paths.is_empty());
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.render.fn_ = Some(64);
        config.library_paths = vec![PathBuf::from("vendored")];
        config.save(&path)?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("fn = 64"));

        assert_eq!(Config::from_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let config: Config = toml::from_str("[render]\nfs = 0.1\n")?;
        assert_eq!(config.render.fs, Some(0.1));
        assert_eq!(config.render.fa, Some(1.0));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("PARTSCAD_LIBRARY_PATH", "/opt/scad:vendored"),
            ("PARTSCAD_OUTPUT_DIR", "/tmp/models"),
            ("PARTSCAD_FN", "32"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;
        assert_eq!(
            config.library_paths,
            vec![PathBuf::from("/opt/scad"), PathBuf::from("vendored")]
        );
        assert_eq!(config.output_dir, PathBuf::from("/tmp/models"));
        assert_eq!(config.render.fn_, Some(32));

        let bad = config.apply_overrides(|key| (key == "PARTSCAD_FN").then(|| "many".to_string()));
        assert!(bad.is_err());
        Ok(())
    }
}
