pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::patches::{builtin_patch, builtin_patches};
pub use config::{cli::LocalFiles, plan_config::PlanConfig};
pub use core::{editor::LineBuffer, patch::PatchRunner};
pub use domain::model::{BlockStart, LineEdit, Patch, PatchOutcome};
pub use utils::error::{PatchError, Result};
