//! Handler for the `new` command

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{CategoryId, EmployeeId, Status, TicketBuilder};
use crate::error::Result;

/// Parameters for creating a ticket
pub struct NewParams {
    pub title: String,
    pub description: String,
    pub category: u32,
    pub employee: u32,
    pub status: String,
    pub notes: Option<String>,
    pub project_dir: Option<String>,
}

/// Create a ticket through the lifecycle service
///
/// Category and employee are given by id and must exist in the directory;
/// the service resolves them to display names. A ticket may be created
/// directly in Resolved or Closed as long as notes are supplied.
pub fn handle_new_command(params: NewParams, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(params.project_dir.as_deref())?;
    let mut service = ctx.service();

    let status: Status = params.status.parse()?;
    let mut builder = TicketBuilder::new()
        .issue_title(params.title)
        .description(params.description)
        .category(CategoryId::new(params.category))
        .assigned_employee(EmployeeId::new(params.employee))
        .status(status);
    if let Some(notes) = params.notes {
        builder = builder.resolution_notes(notes);
    }

    let ticket = service.create(builder.build())?;

    formatter.success(&format!(
        "Created ticket #{}: {} [{}]",
        ticket.id, ticket.issue_title, ticket.status
    ));

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    }
    Ok(())
}
