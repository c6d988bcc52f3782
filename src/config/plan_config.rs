use crate::core::{BlockStart, LineEdit, Patch};
use crate::utils::error::{PatchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A set of patches described in TOML instead of compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(rename = "patch", default)]
    pub patches: Vec<PatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    pub name: String,
    pub path: String,
    pub confirmation: Option<String>,
    #[serde(rename = "edit", default)]
    pub edits: Vec<EditConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditConfig {
    OverwriteLine {
        index: usize,
        text: String,
    },
    ReplaceBlock {
        start_index: Option<usize>,
        marker: Option<String>,
        terminator: String,
        lines: Vec<String>,
    },
    OverwriteRange {
        start: usize,
        lines: Vec<String>,
    },
}

impl PlanConfig {
    /// 從 TOML 檔案載入計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Expands `${VAR}` from the environment; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PatchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.patches.is_empty() {
            return Err(PatchError::ConfigError {
                message: "Plan contains no [[patch]] entries".to_string(),
            });
        }

        validation::validate_unique_names("patch.name", self.patches.iter().map(|p| p.name.as_str()))?;

        for patch in &self.patches {
            validation::validate_non_empty_string("patch.name", &patch.name)?;
            validation::validate_path("patch.path", &patch.path)?;

            for edit in &patch.edits {
                if let EditConfig::ReplaceBlock {
                    start_index,
                    marker,
                    terminator,
                    ..
                } = edit
                {
                    if start_index.is_some() == marker.is_some() {
                        return Err(PatchError::InvalidConfigValueError {
                            field: format!("{}.edit", patch.name),
                            value: "replace_block".to_string(),
                            reason: "Exactly one of start_index or marker is required".to_string(),
                        });
                    }
                    if let Some(marker) = marker {
                        validation::validate_non_empty_string("edit.marker", marker)?;
                    }
                    if terminator.is_empty() {
                        return Err(PatchError::InvalidConfigValueError {
                            field: "edit.terminator".to_string(),
                            value: terminator.clone(),
                            reason: "Terminator cannot be empty".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validated patches in file order.
    pub fn to_patches(&self) -> Result<Vec<Patch>> {
        self.validate_config()?;
        Ok(self.patches.iter().map(PatchConfig::to_patch).collect())
    }
}

impl PatchConfig {
    fn to_patch(&self) -> Patch {
        Patch {
            name: self.name.clone(),
            path: self.path.clone(),
            edits: self.edits.iter().map(EditConfig::to_edit).collect(),
            confirmation: self
                .confirmation
                .clone()
                .unwrap_or_else(|| format!("{} fixed", self.name)),
        }
    }
}

impl EditConfig {
    fn to_edit(&self) -> LineEdit {
        match self {
            EditConfig::OverwriteLine { index, text } => LineEdit::overwrite_line(*index, text.clone()),
            EditConfig::ReplaceBlock {
                start_index,
                marker,
                terminator,
                lines,
            } => {
                // validate_config guarantees exactly one is set
                let start = match (start_index, marker) {
                    (Some(index), _) => BlockStart::Index(*index),
                    (None, Some(marker)) => BlockStart::Marker(marker.clone()),
                    (None, None) => BlockStart::Index(0),
                };
                LineEdit::replace_block(start, terminator.clone(), lines.clone())
            }
            EditConfig::OverwriteRange { start, lines } => LineEdit::overwrite_range(*start, lines.clone()),
        }
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
