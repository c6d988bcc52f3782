pub mod editor;
pub mod patch;

pub use crate::domain::model::{BlockStart, LineEdit, Patch, PatchOutcome};
pub use crate::domain::ports::TextStore;
pub use crate::utils::error::Result;
