pub mod cli;
pub mod plan_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tracker-patch")]
#[command(about = "Rewrites the tracker option lists in place")]
pub struct CliConfig {
    /// Project root the patch paths are relative to
    #[arg(long, default_value = ".")]
    pub root: String,

    /// TOML plan file to use instead of the built-in patches
    #[arg(long)]
    pub plan: Option<String>,

    /// Only run these patches (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Apply edits in memory but do not write any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report instead of confirmation lines
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root", &self.root)?;
        if let Some(plan) = &self.plan {
            validation::validate_path("plan", plan)?;
        }
        for name in &self.only {
            validation::validate_non_empty_string("only", name)?;
        }
        Ok(())
    }
}
