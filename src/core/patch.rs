use crate::core::editor::LineBuffer;
use crate::domain::model::{Patch, PatchOutcome};
use crate::domain::ports::TextStore;
use crate::utils::error::Result;

pub struct PatchRunner<S: TextStore> {
    store: S,
    dry_run: bool,
}

impl<S: TextStore> PatchRunner<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    pub fn new_with_dry_run(store: S, dry_run: bool) -> Self {
        Self { store, dry_run }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read, apply every edit, write back. Nothing is written if any edit fails.
    pub fn run(&self, patch: &Patch) -> Result<PatchOutcome> {
        tracing::info!("Patching {} ({})", patch.path, patch.name);

        let original = self.store.read_text(&patch.path)?;
        let mut buffer = LineBuffer::from_text(&original);
        let lines_before = buffer.len();

        buffer.apply_all(&patch.edits)?;

        let updated = buffer.to_text();
        let changed = updated != original;

        let written = if self.dry_run {
            tracing::info!("Dry run: leaving {} untouched", patch.path);
            false
        } else {
            self.store.write_text(&patch.path, &updated)?;
            true
        };

        tracing::debug!(
            "{}: {} -> {} lines, changed: {}",
            patch.name,
            lines_before,
            buffer.len(),
            changed
        );

        Ok(PatchOutcome {
            name: patch.name.clone(),
            path: patch.path.clone(),
            changed,
            lines_before,
            lines_after: buffer.len(),
            written,
            patched_at: chrono::Utc::now(),
        })
    }

    /// Runs patches in order, stopping at the first failure.
    pub fn run_all(&self, patches: &[Patch]) -> Result<Vec<PatchOutcome>> {
        let mut outcomes = Vec::with_capacity(patches.len());
        for patch in patches {
            outcomes.push(self.run(patch)?);
        }
        Ok(outcomes)
    }
}
