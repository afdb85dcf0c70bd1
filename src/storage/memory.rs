//! In-memory storage backend
//!
//! Backs unit tests and ephemeral sessions that have no project directory.
//! Ids are assigned from internal counters exactly like the file backend so
//! the two are interchangeable behind the collaborator traits.

use crate::core::{Category, CategoryId, Employee, EmployeeId, Ticket, TicketId};
use crate::error::{HelpDeskError, Result};
use crate::storage::repository::{CategoryLookup, EmployeeLookup, TicketPersistence, TicketQuery};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    next_ticket_id: u64,
    tickets: Vec<Ticket>,
    next_category_id: u32,
    categories: Vec<Category>,
    next_employee_id: u32,
    employees: Vec<Employee>,
}

/// Storage that lives and dies with the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, assigning the next category id
    pub fn add_category(&self, name: impl Into<String>) -> Category {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.next_category_id += 1;
        let category = Category::new(CategoryId::new(inner.next_category_id), name);
        inner.categories.push(category.clone());
        category
    }

    /// Add an employee, assigning the next employee id
    pub fn add_employee(&self, full_name: impl Into<String>) -> Employee {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.next_employee_id += 1;
        let employee = Employee::new(EmployeeId::new(inner.next_employee_id), full_name);
        inner.employees.push(employee.clone());
        employee
    }

    /// Number of tickets currently stored
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").tickets.len()
    }
}

impl TicketPersistence for MemoryStorage {
    fn get_all(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .tickets
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }

    fn add(&self, mut ticket: Ticket) -> Result<Ticket> {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.next_ticket_id += 1;
        ticket.id = TicketId::new(inner.next_ticket_id);
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    fn delete(&self, id: TicketId) -> Result<()> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let index = inner
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(HelpDeskError::TicketNotFound { id })?;
        inner.tickets.remove(index);
        Ok(())
    }
}

impl CategoryLookup for MemoryStorage {
    fn get_all(&self) -> Result<Vec<Category>> {
        Ok(self.inner.read().expect("lock poisoned").categories.clone())
    }
}

impl EmployeeLookup for MemoryStorage {
    fn get_all(&self) -> Result<Vec<Employee>> {
        Ok(self.inner.read().expect("lock poisoned").employees.clone())
    }
}
