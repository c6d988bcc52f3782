use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a block replacement begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockStart {
    /// Zero-based line index.
    Index(usize),
    /// First line whose trimmed content starts with this text.
    Marker(String),
}

/// A single positional edit against a line buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEdit {
    OverwriteLine {
        index: usize,
        text: String,
    },
    /// Replace from `start` through the first line containing `terminator`, inclusive.
    /// Without a terminator the span runs to the end of the file.
    ReplaceBlock {
        start: BlockStart,
        terminator: String,
        lines: Vec<String>,
    },
    /// Overwrite `lines.len()` lines at `start`, clamped at end of file; the rest is appended.
    OverwriteRange {
        start: usize,
        lines: Vec<String>,
    },
}

impl LineEdit {
    pub fn overwrite_line(index: usize, text: impl Into<String>) -> Self {
        LineEdit::OverwriteLine {
            index,
            text: text.into(),
        }
    }

    pub fn replace_block(start: BlockStart, terminator: impl Into<String>, lines: Vec<String>) -> Self {
        LineEdit::ReplaceBlock {
            start,
            terminator: terminator.into(),
            lines,
        }
    }

    pub fn overwrite_range(start: usize, lines: Vec<String>) -> Self {
        LineEdit::OverwriteRange { start, lines }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LineEdit::OverwriteLine { .. } => "overwrite_line",
            LineEdit::ReplaceBlock { .. } => "replace_block",
            LineEdit::OverwriteRange { .. } => "overwrite_range",
        }
    }
}

/// A named read-modify-write against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: String,
    pub path: String,
    pub edits: Vec<LineEdit>,
    pub confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchOutcome {
    pub name: String,
    pub path: String,
    pub changed: bool,
    pub lines_before: usize,
    pub lines_after: usize,
    pub written: bool,
    pub patched_at: DateTime<Utc>,
}
