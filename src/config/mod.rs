pub mod cli;
pub mod toml_config;

use crate::core::plusvalia::builtin_patch_set;
use crate::core::{ConfigProvider, PatchSet};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::core::plusvalia::DEFAULT_TARGET;
#[cfg(feature = "cli")]
use toml_config::TomlPatchConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plusvalia-patch")]
#[command(about = "Set plusvalía real default to 1% and add its help tooltip")]
pub struct CliConfig {
    /// File to patch in place [default: src/App.jsx]
    #[arg(long)]
    pub file: Option<String>,

    /// TOML patch set to apply instead of the built-in one
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Apply in memory and report, without writing")]
    pub dry_run: bool,

    #[arg(long, help = "Print the patch report as JSON")]
    pub report_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<PatchConfig> {
        let patch_set = match &self.config {
            Some(path) => {
                tracing::info!("Loading patch set from: {}", path);
                let toml = TomlPatchConfig::from_file(path)?;
                toml.validate()?;
                toml.into_patch_set(self.file.as_deref())
            }
            None => builtin_patch_set(self.file.as_deref().unwrap_or(DEFAULT_TARGET)),
        };

        Ok(PatchConfig {
            patch_set,
            dry_run: self.dry_run,
        })
    }
}

/// Fully resolved settings for one patch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    pub patch_set: PatchSet,
    pub dry_run: bool,
}

impl PatchConfig {
    pub fn builtin(target: &str) -> Self {
        Self {
            patch_set: builtin_patch_set(target),
            dry_run: false,
        }
    }
}

impl ConfigProvider for PatchConfig {
    fn patch_set(&self) -> &PatchSet {
        &self.patch_set
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for PatchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("target", &self.patch_set.target)?;
        for replacement in &self.patch_set.replacements {
            validation::validate_search_literal(&replacement.name, &replacement.find)?;
        }
        Ok(())
    }
}
