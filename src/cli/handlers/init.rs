//! Handler for the `init` command

use crate::cli::output::OutputFormatter;
use crate::cli::utils::PROJECT_DIR;
use crate::config::ProjectConfig;
use crate::error::{HelpDeskError, Result};
use crate::storage::FileStorage;
use std::env;
use std::path::PathBuf;

/// Create the `.helpdesk` directory layout and default configuration
///
/// Fails when a project already exists unless `force` is set; existing
/// tickets survive a forced reinitialization, only the config is rewritten.
pub fn handle_init(
    name: Option<&str>,
    force: bool,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let root = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };
    let helpdesk_dir = root.join(PROJECT_DIR);
    let storage = FileStorage::new(&helpdesk_dir);

    if storage.is_initialized() && !force {
        return Err(HelpDeskError::custom(
            "Project already initialized. Use --force to reinitialize",
        ));
    }

    storage.initialize()?;

    let mut config = ProjectConfig::default();
    if let Some(name) = name {
        config.project.name = name.to_string();
    }
    config.save(&helpdesk_dir)?;

    formatter.success(&format!(
        "Initialized helpdesk project '{}' in {}",
        config.project.name,
        helpdesk_dir.display()
    ));
    formatter.info("Add categories and employees before creating tickets:");
    formatter.info("  helpdesk category add <name>");
    formatter.info("  helpdesk employee add <name>");

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "success",
            "project": config.project.name,
            "path": helpdesk_dir.display().to_string(),
        }))?;
    }
    Ok(())
}
