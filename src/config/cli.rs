use crate::core::TextStore;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Files on local disk, relative to a project root.
#[derive(Debug, Clone)]
pub struct LocalFiles {
    base_path: PathBuf,
}

impl LocalFiles {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Rooted at the current working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl TextStore for LocalFiles {
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);
        let data = fs::read(full_path)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    fn write_text(&self, path: &str, text: &str) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(full_path, text)?;
        Ok(())
    }
}
