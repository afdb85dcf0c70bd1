//! Handler for the `list` command

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::format_date;
use crate::core::{CategoryId, Status, Ticket};
use crate::error::Result;

/// List tickets, applying the optional status/category filters
///
/// Absent filters and the literal sentinel "all" both mean no constraint.
/// The result replaces the working set rather than narrowing the previous
/// view, so running `list` with no flags is the reset path.
pub fn handle_list_command(
    status: Option<String>,
    category: Option<String>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let mut service = ctx.service();

    let status_filter = parse_status_filter(status.as_deref())?;
    let category_filter = parse_category_filter(category.as_deref())?;

    let tickets = service.apply_filter(status_filter, category_filter)?.to_vec();

    if formatter.is_json() {
        return formatter.json(&tickets);
    }

    if tickets.is_empty() {
        formatter.info("No tickets found");
        return Ok(());
    }

    print_ticket_table(&tickets, formatter);
    formatter.info(&format!("\n{} ticket(s)", tickets.len()));
    Ok(())
}

/// Map the status argument to a filter; "all" clears the constraint
fn parse_status_filter(input: Option<&str>) -> Result<Option<Status>> {
    match input {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}

/// Map the category argument to a filter; "all" clears the constraint
fn parse_category_filter(input: Option<&str>) -> Result<Option<CategoryId>> {
    match input {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}

fn print_ticket_table(tickets: &[Ticket], formatter: &OutputFormatter) {
    formatter.line(&format!(
        "{:>4}  {:<24}  {:<12}  {:<16}  {:<11}  {:<16}  {:<16}",
        "ID", "TITLE", "CATEGORY", "ASSIGNEE", "STATUS", "CREATED", "RESOLVED"
    ));
    for ticket in tickets {
        let resolved = ticket
            .date_resolved
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        formatter.line(&format!(
            "{:>4}  {:<24}  {:<12}  {:<16}  {:<11}  {:<16}  {:<16}",
            ticket.id.to_string(),
            truncate(&ticket.issue_title, 24),
            truncate(&ticket.category, 12),
            truncate(&ticket.assigned_employee, 16),
            ticket.status.to_string(),
            format_date(ticket.date_created),
            resolved,
        ));
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_sentinel() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_status_filter(Some("All")).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("resolved")).unwrap(),
            Some(Status::Resolved)
        );
        assert!(parse_status_filter(Some("bogus")).is_err());
    }

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!(parse_category_filter(None).unwrap(), None);
        assert_eq!(parse_category_filter(Some("ALL")).unwrap(), None);
        assert_eq!(
            parse_category_filter(Some("3")).unwrap(),
            Some(CategoryId::new(3))
        );
        assert!(parse_category_filter(Some("hardware")).is_err());
    }

    #[test]
    fn test_truncate_long_titles() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("a very long ticket title indeed", 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
