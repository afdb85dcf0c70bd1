//! Handlers for the `delete` and `clear` commands

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::{HelpDeskError, Result};
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Delete one ticket after the optimistic-concurrency re-check
///
/// Prompts for confirmation unless `--yes` is given or `confirm_delete` is
/// off in the project configuration. A ticket that vanished from the
/// authoritative store since the last refresh is reported as concurrently
/// deleted and nothing is removed locally.
pub fn handle_delete_command(
    ticket: u64,
    yes: bool,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let mut service = ctx.service();
    service.refresh()?;

    let id = TicketId::new(ticket);
    let ticket = service
        .store()
        .find_by_id(id)
        .ok_or(HelpDeskError::TicketNotFound { id })?
        .clone();

    let needs_prompt = ctx.config.ui.confirm_delete && !yes && !formatter.is_json();
    if needs_prompt
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete ticket #{} '{}'?",
                ticket.id, ticket.issue_title
            ))
            .default(false)
            .interact()?
    {
        formatter.info("Delete cancelled");
        return Ok(());
    }

    service.delete(id)?;
    formatter.success(&format!("Deleted ticket #{id}"));

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "success",
            "deleted": id,
        }))?;
    }
    Ok(())
}

/// Delete every ticket in the current view, stopping at the first failure
///
/// Always prompts unless `--yes` is given. Tickets removed before a failure
/// stay removed; the error names the ticket that stopped the run.
pub fn handle_clear_command(
    yes: bool,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let mut service = ctx.service();
    service.refresh()?;

    let count = service.store().len();
    if count == 0 {
        formatter.info("No tickets to delete");
        return Ok(());
    }

    if !yes
        && !formatter.is_json()
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete ALL {count} ticket(s)? This cannot be undone"
            ))
            .default(false)
            .interact()?
    {
        formatter.info("Clear cancelled");
        return Ok(());
    }

    let removed = service.delete_all()?;
    formatter.success(&format!("Deleted {removed} ticket(s)"));

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "success",
            "deleted_count": removed,
        }))?;
    }
    Ok(())
}
