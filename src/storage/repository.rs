//! Collaborator contracts for persistence and directory lookups
//!
//! The lifecycle service is generic over these traits so tests can swap in
//! mocks and library consumers can bring their own backends. Two
//! implementations ship with the crate: [`FileStorage`](super::FileStorage)
//! and [`MemoryStorage`](super::MemoryStorage).

use crate::core::{Category, CategoryId, Employee, EmployeeId, Status, Ticket, TicketId};
use crate::error::Result;

/// Filter criteria for querying tickets from the authoritative store
///
/// `None` in any position means no constraint on that field. Category and
/// assignee match the display names tickets carry, by exact equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketQuery {
    pub status: Option<Status>,
    pub category: Option<String>,
    pub assigned_employee: Option<String>,
}

impl TicketQuery {
    /// A query matching every ticket
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Constrain to a status
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Constrain to a category name
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Constrain to an assigned employee name
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_employee = Some(assignee.into());
        self
    }

    /// Whether a ticket satisfies every constraint
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.is_none_or(|s| ticket.status == s)
            && self
                .category
                .as_ref()
                .is_none_or(|c| &ticket.category == c)
            && self
                .assigned_employee
                .as_ref()
                .is_none_or(|a| &ticket.assigned_employee == a)
    }
}

/// Authoritative ticket storage
///
/// `add` owns id assignment: the stored copy comes back with its id filled
/// in. `get_all` returns tickets in ascending id order, which equals
/// insertion order.
#[cfg_attr(test, mockall::automock)]
pub trait TicketPersistence: Send + Sync {
    /// Fetch all tickets matching the query
    fn get_all(&self, query: &TicketQuery) -> Result<Vec<Ticket>>;

    /// Persist a new ticket, assigning its id
    fn add(&self, ticket: Ticket) -> Result<Ticket>;

    /// Remove a ticket by id
    fn delete(&self, id: TicketId) -> Result<()>;
}

/// Read access to the category directory
#[cfg_attr(test, mockall::automock)]
pub trait CategoryLookup: Send + Sync {
    /// Fetch all known categories
    fn get_all(&self) -> Result<Vec<Category>>;

    /// Look up a single category by id
    fn find(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.get_all()?.into_iter().find(|c| c.id == id))
    }
}

/// Read access to the employee directory
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeLookup: Send + Sync {
    /// Fetch all known employees
    fn get_all(&self) -> Result<Vec<Employee>>;

    /// Look up a single employee by id
    fn find(&self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.get_all()?.into_iter().find(|e| e.id == id))
    }
}

/// Everything the lifecycle service needs from one backend
pub trait Backend: TicketPersistence + CategoryLookup + EmployeeLookup {}

impl<T> Backend for T where T: TicketPersistence + CategoryLookup + EmployeeLookup {}

use super::file::FileStorage;

impl TicketPersistence for FileStorage {
    fn get_all(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        self.load_tickets(query)
    }

    fn add(&self, ticket: Ticket) -> Result<Ticket> {
        self.add_ticket(ticket)
    }

    fn delete(&self, id: TicketId) -> Result<()> {
        self.delete_ticket(id)
    }
}

impl CategoryLookup for FileStorage {
    fn get_all(&self) -> Result<Vec<Category>> {
        self.load_categories()
    }
}

impl EmployeeLookup for FileStorage {
    fn get_all(&self) -> Result<Vec<Employee>> {
        self.load_employees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".helpdesk"));
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn ticket(title: &str) -> Ticket {
        Ticket::new(title, "description", "Hardware", "Sam Porter")
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_dir, storage) = storage();

        let first = TicketPersistence::add(&storage, ticket("first")).unwrap();
        let second = TicketPersistence::add(&storage, ticket("second")).unwrap();

        assert_eq!(first.id, TicketId::new(1));
        assert_eq!(second.id, TicketId::new(2));
    }

    #[test]
    fn test_get_all_returns_insertion_order() {
        let (_dir, storage) = storage();
        for title in ["a", "b", "c"] {
            TicketPersistence::add(&storage, ticket(title)).unwrap();
        }

        let all = TicketPersistence::get_all(&storage, &TicketQuery::unfiltered()).unwrap();
        let titles: Vec<&str> = all.iter().map(|t| t.issue_title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_all_applies_query() {
        let (_dir, storage) = storage();
        let mut other = ticket("networking");
        other.category = "Network".to_string();
        TicketPersistence::add(&storage, ticket("hw")).unwrap();
        TicketPersistence::add(&storage, other).unwrap();

        let query = TicketQuery::unfiltered().with_category("Network");
        let hits = TicketPersistence::get_all(&storage, &query).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].issue_title, "networking");
    }

    #[test]
    fn test_delete_removes_from_authoritative_store() {
        let (_dir, storage) = storage();
        let saved = TicketPersistence::add(&storage, ticket("gone soon")).unwrap();

        TicketPersistence::delete(&storage, saved.id).unwrap();
        let all = TicketPersistence::get_all(&storage, &TicketQuery::unfiltered()).unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_lookup_find_scans_get_all() {
        let (_dir, storage) = storage();
        let hardware = storage.add_category("Hardware").unwrap();

        let found = CategoryLookup::find(&storage, hardware.id).unwrap();
        assert_eq!(found.unwrap().name, "Hardware");
        assert!(
            CategoryLookup::find(&storage, CategoryId::new(999))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_query_matches() {
        let mut t = ticket("sample");
        t.status = Status::InProgress;

        assert!(TicketQuery::unfiltered().matches(&t));
        assert!(TicketQuery::unfiltered().with_status(Status::InProgress).matches(&t));
        assert!(!TicketQuery::unfiltered().with_status(Status::Closed).matches(&t));
        assert!(TicketQuery::unfiltered().with_assignee("Sam Porter").matches(&t));
        assert!(!TicketQuery::unfiltered().with_assignee("sam porter").matches(&t));
    }
}
