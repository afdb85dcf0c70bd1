//! Handler for the `update` command

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::parse_date;
use crate::core::{CategoryId, DirtyTracker, EmployeeId, Status, TicketEdit, TicketId};
use crate::error::{HelpDeskError, Result};
use chrono::Utc;

/// Parameters for editing a ticket
pub struct UpdateParams {
    pub ticket: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<u32>,
    pub employee: Option<u32>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created: Option<String>,
    pub project_dir: Option<String>,
}

/// Apply field edits to a ticket through an edit session
///
/// Each provided flag becomes one edit on the session; supplying values
/// identical to the stored ones leaves the session clean and nothing is
/// written. Resolution rules run when the resulting status is Resolved or
/// Closed, and a validation failure leaves the ticket untouched.
pub fn handle_update_command(params: UpdateParams, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(params.project_dir.as_deref())?;
    let mut service = ctx.service();
    service.refresh()?;

    let id = TicketId::new(params.ticket);
    let ticket = service
        .store()
        .find_by_id(id)
        .ok_or(HelpDeskError::TicketNotFound { id })?
        .clone();

    let mut tracker = DirtyTracker::new();
    tracker.select(&ticket);

    if let Some(title) = params.title {
        tracker.apply(TicketEdit::IssueTitle(title))?;
    }
    if let Some(description) = params.description {
        tracker.apply(TicketEdit::Description(description))?;
    }
    if let Some(category_id) = params.category {
        let name = category_name(&ctx, CategoryId::new(category_id))?;
        tracker.apply(TicketEdit::Category(name))?;
    }
    if let Some(employee_id) = params.employee {
        let name = employee_name(&ctx, EmployeeId::new(employee_id))?;
        tracker.apply(TicketEdit::AssignedEmployee(name))?;
    }
    if let Some(status) = params.status {
        let status: Status = status.parse()?;
        tracker.apply(TicketEdit::Status(status))?;
    }
    if let Some(notes) = params.notes {
        tracker.apply(TicketEdit::ResolutionNotes(notes))?;
    }
    if let Some(created) = params.created {
        tracker.apply(TicketEdit::DateCreated(parse_date(&created)?))?;
    }

    if !tracker.has_unsaved_changes() {
        formatter.warning("No changes to save");
        return Ok(());
    }

    let session = tracker
        .session_mut()
        .ok_or(HelpDeskError::NoTicketSelected)?;
    let updated = service.update(session, Utc::now)?;
    ctx.storage.save_ticket(&updated)?;

    formatter.success(&format!(
        "Updated ticket #{}: {} [{}]",
        updated.id, updated.issue_title, updated.status
    ));

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "success",
            "ticket": updated,
        }))?;
    }
    Ok(())
}

fn category_name(ctx: &HandlerContext, id: CategoryId) -> Result<String> {
    ctx.storage
        .load_categories()?
        .into_iter()
        .find(|c| c.id == id)
        .map(|c| c.name)
        .ok_or(HelpDeskError::CategoryNotFound { id })
}

fn employee_name(ctx: &HandlerContext, id: EmployeeId) -> Result<String> {
    ctx.storage
        .load_employees()?
        .into_iter()
        .find(|e| e.id == id)
        .map(|e| e.full_name)
        .ok_or(HelpDeskError::EmployeeNotFound { id })
}
