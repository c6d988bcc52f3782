use clap::Parser;
use tracker_patch::app::patches;
use tracker_patch::utils::{logger, validation::Validate};
use tracker_patch::{CliConfig, LocalFiles, Patch, PatchError, PatchRunner, PlanConfig};

fn load_patches(config: &CliConfig) -> Result<Vec<Patch>, PatchError> {
    let available = match &config.plan {
        Some(plan_path) => {
            tracing::info!("📁 Loading plan from: {}", plan_path);
            PlanConfig::from_file(plan_path)?.to_patches()?
        }
        None => patches::builtin_patches(),
    };

    patches::select(available, &config.only)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tracker-patch");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let selected = match load_patches(&config) {
        Ok(selected) => selected,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no file will be written");
    }

    let runner = PatchRunner::new_with_dry_run(LocalFiles::new(&config.root), config.dry_run);
    let mut outcomes = Vec::with_capacity(selected.len());

    for patch in &selected {
        match runner.run(patch) {
            Ok(outcome) => {
                if !config.json {
                    println!("{}", patch.confirmation);
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                tracing::error!("❌ Patch '{}' failed: {}", patch.name, e);
                eprintln!("❌ {}: {}", patch.path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    tracing::info!("✅ Applied {} patch(es)", outcomes.len());
    Ok(())
}
