use crate::utils::error::Result;

/// Whole-file text access used by the patch runner.
pub trait TextStore {
    /// Reads the file, replacing invalid UTF-8 with U+FFFD.
    fn read_text(&self, path: &str) -> Result<String>;

    /// Overwrites the file with `text`.
    fn write_text(&self, path: &str, text: &str) -> Result<()>;
}
