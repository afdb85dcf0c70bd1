use super::{CategoryId, EmployeeId, NewTicket, Status};

/// Builder for creating [`NewTicket`] inputs
#[derive(Default)]
pub struct TicketBuilder {
    issue_title: Option<String>,
    description: Option<String>,
    category_id: Option<CategoryId>,
    assigned_employee_id: Option<EmployeeId>,
    status: Option<Status>,
    resolution_notes: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issue title
    #[must_use]
    pub fn issue_title(mut self, issue_title: impl Into<String>) -> Self {
        self.issue_title = Some(issue_title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category id
    #[must_use]
    pub const fn category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Set the assigned employee id
    #[must_use]
    pub const fn assigned_employee(mut self, id: EmployeeId) -> Self {
        self.assigned_employee_id = Some(id);
        self
    }

    /// Set the initial status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set resolution notes supplied up front
    #[must_use]
    pub fn resolution_notes(mut self, notes: impl Into<String>) -> Self {
        self.resolution_notes = Some(notes.into());
        self
    }

    /// Build the creation input
    pub fn build(self) -> NewTicket {
        NewTicket {
            issue_title: self.issue_title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
            assigned_employee_id: self.assigned_employee_id.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            resolution_notes: self.resolution_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let input = TicketBuilder::new()
            .issue_title("Printer jam")
            .description("Paper stuck in tray 2")
            .category(CategoryId::new(1))
            .assigned_employee(EmployeeId::new(2))
            .build();

        assert_eq!(input.issue_title, "Printer jam");
        assert_eq!(input.description, "Paper stuck in tray 2");
        assert_eq!(input.category_id, CategoryId::new(1));
        assert_eq!(input.assigned_employee_id, EmployeeId::new(2));
        assert_eq!(input.status, Status::New);
        assert_eq!(input.resolution_notes, None);
    }

    #[test]
    fn test_ticket_builder_with_initial_resolution() {
        let input = TicketBuilder::new()
            .issue_title("Printer jam")
            .description("Paper stuck in tray 2")
            .status(Status::Resolved)
            .resolution_notes("cleared on first visit")
            .build();

        assert_eq!(input.status, Status::Resolved);
        assert_eq!(
            input.resolution_notes.as_deref(),
            Some("cleared on first visit")
        );
    }
}
