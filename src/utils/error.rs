use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Line {index} is out of range (file has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    #[error("No line starts with marker '{marker}'")]
    MarkerNotFound { marker: String },

    #[error("Unknown patch: {name}")]
    UnknownPatch { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PatchError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PatchError::IoError(_) => "Check that the target file exists and is writable",
            PatchError::SerializationError(_) => "Report output could not be encoded; retry without --json",
            PatchError::TomlError(_) => "Fix the syntax of the plan file",
            PatchError::LineOutOfRange { .. } => {
                "The target file is shorter than expected; it may already have been patched or moved"
            }
            PatchError::MarkerNotFound { .. } => {
                "The block marker is missing; check the file has not been edited by hand"
            }
            PatchError::UnknownPatch { .. } => "Use one of: page, row, table (or a name from the plan)",
            PatchError::ConfigError { .. } | PatchError::InvalidConfigValueError { .. } => {
                "Review the plan file and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
