use crate::domain::model::{BlockStart, LineEdit};
use crate::utils::error::{PatchError, Result};

/// A text file held as an ordered sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Splits on `\n`, `\r\n` and lone `\r`. A trailing break does not add an empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            match rest.find(|c: char| c == '\n' || c == '\r') {
                Some(pos) => {
                    lines.push(rest[..pos].to_string());
                    let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[pos + width..];
                }
                None => {
                    lines.push(rest.to_string());
                    break;
                }
            }
        }

        Self { lines }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Joins with `\n`; no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn overwrite_line(&mut self, index: usize, text: &str) -> Result<()> {
        let len = self.lines.len();
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(PatchError::LineOutOfRange { index, len })?;
        *slot = text.to_string();
        Ok(())
    }

    pub fn find_marker(&self, marker: &str) -> Result<usize> {
        self.lines
            .iter()
            .position(|line| line.trim().starts_with(marker))
            .ok_or_else(|| PatchError::MarkerNotFound {
                marker: marker.to_string(),
            })
    }

    /// Index of the first line at or after `start` containing `terminator`,
    /// or `len()` when there is none.
    pub fn find_terminator(&self, start: usize, terminator: &str) -> usize {
        let mut end = start;
        while end < self.lines.len() && !self.lines[end].contains(terminator) {
            end += 1;
        }
        end
    }

    pub fn replace_block(&mut self, start: &BlockStart, terminator: &str, block: &[String]) -> Result<()> {
        let len = self.lines.len();
        let start = match start {
            BlockStart::Index(index) => *index,
            BlockStart::Marker(marker) => self.find_marker(marker)?,
        };
        if start > len {
            return Err(PatchError::LineOutOfRange { index: start, len });
        }

        let end = self.find_terminator(start, terminator);
        let stop = (end + 1).min(len);
        tracing::debug!("Replacing lines {}..{} with {} lines", start, stop, block.len());

        self.lines.splice(start..stop, block.iter().cloned());
        Ok(())
    }

    pub fn overwrite_range(&mut self, start: usize, block: &[String]) -> Result<()> {
        let len = self.lines.len();
        if start > len {
            return Err(PatchError::LineOutOfRange { index: start, len });
        }

        let stop = (start + block.len()).min(len);
        self.lines.splice(start..stop, block.iter().cloned());
        Ok(())
    }

    pub fn apply(&mut self, edit: &LineEdit) -> Result<()> {
        tracing::debug!("Applying {} edit", edit.kind());
        match edit {
            LineEdit::OverwriteLine { index, text } => self.overwrite_line(*index, text),
            LineEdit::ReplaceBlock {
                start,
                terminator,
                lines,
            } => self.replace_block(start, terminator, lines),
            LineEdit::OverwriteRange { start, lines } => self.overwrite_range(*start, lines),
        }
    }

    pub fn apply_all(&mut self, edits: &[LineEdit]) -> Result<()> {
        for edit in edits {
            self.apply(edit)?;
        }
        Ok(())
    }
}
