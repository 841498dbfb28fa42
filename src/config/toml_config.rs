use crate::core::plusvalia::{DEFAULT_TARGET, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::core::{PatchSet, Replacement};
use crate::utils::error::{PatchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Patch set described in a TOML file, used instead of the built-in one.
///
/// ```toml
/// [patch]
/// name = "plusvalia-tooltip"
/// target = "src/App.jsx"
///
/// [[replacements]]
/// name = "default-value"
/// find = "useState(0);"
/// replace = "useState(1);"
/// required = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlPatchConfig {
    pub patch: PatchHeader,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchHeader {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target: Option<String>,
    pub success_message: Option<String>,
    pub failure_message: Option<String>,
}

impl TomlPatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PATCH_TARGET})
    ///
    /// Only upper-case names are substituted so JSX template literals such as
    /// `${value}` inside search text stay intact. Unset variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
            PatchError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Build the patch set; `target_override` wins over `patch.target`.
    pub fn into_patch_set(self, target_override: Option<&str>) -> PatchSet {
        let target = target_override
            .map(str::to_string)
            .or(self.patch.target)
            .unwrap_or_else(|| DEFAULT_TARGET.to_string());

        PatchSet {
            name: self.patch.name,
            description: self.patch.description,
            target,
            success_message: self
                .patch
                .success_message
                .unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
            failure_message: self
                .patch
                .failure_message
                .unwrap_or_else(|| FAILURE_MESSAGE.to_string()),
            replacements: self.replacements,
        }
    }
}

impl Validate for TomlPatchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("patch.name", &self.patch.name)?;

        if let Some(target) = &self.patch.target {
            validation::validate_path("patch.target", target)?;
        }

        if self.replacements.is_empty() {
            return Err(PatchError::MissingConfigError {
                field: "replacements".to_string(),
            });
        }

        for replacement in &self.replacements {
            validation::validate_non_empty_string("replacements.name", &replacement.name)?;
            validation::validate_search_literal(
                &format!("replacements.{}.find", replacement.name),
                &replacement.find,
            )?;
        }

        validation::validate_unique_names(
            "replacements.name",
            self.replacements.iter().map(|r| r.name.as_str()),
        )
    }
}
