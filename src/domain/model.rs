use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// One literal find-and-substitute step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub name: String,
    pub find: String,
    pub replace: String,
    /// Gating check: when `find` is absent the whole patch is abandoned.
    #[serde(default)]
    pub required: bool,
}

impl Replacement {
    pub fn optional(name: &str, find: &str, replace: &str) -> Self {
        Self {
            name: name.to_string(),
            find: find.to_string(),
            replace: replace.to_string(),
            required: false,
        }
    }

    pub fn gated(name: &str, find: &str, replace: &str) -> Self {
        Self {
            required: true,
            ..Self::optional(name, find, replace)
        }
    }
}

/// Ordered replacements applied to a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSet {
    pub name: String,
    pub description: String,
    pub target: String,
    pub success_message: String,
    pub failure_message: String,
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementOutcome {
    pub name: String,
    pub occurrences: usize,
}

/// In-memory result of running every replacement over the source text.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub original: String,
    pub patched: String,
    pub outcomes: Vec<ReplacementOutcome>,
}

impl PatchResult {
    pub fn changed(&self) -> bool {
        self.original != self.patched
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchReport {
    pub patch_set: String,
    pub target: String,
    pub outcomes: Vec<ReplacementOutcome>,
    pub written: bool,
    pub dry_run: bool,
}

impl PatchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
