//! In-memory working set of tickets
//!
//! The store is the caller's current view of the ticket list, loaded from the
//! persistence collaborator and kept in insertion order. It is synchronous,
//! single-threaded and never talks to storage itself; the lifecycle service
//! decides when it gets reloaded or mutated.

use crate::core::ticket::{Ticket, TicketId};

/// Ordered working set of tickets
#[derive(Debug, Default, Clone)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire working set with a fresh load
    ///
    /// This is the filter/refresh contract: the previous contents are
    /// discarded wholesale, never merged.
    pub fn load(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    /// Append a ticket to the end of the working set
    pub fn add(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Remove a ticket by id, returning it if present
    pub fn remove(&mut self, id: TicketId) -> Option<Ticket> {
        let index = self.tickets.iter().position(|t| t.id == id)?;
        Some(self.tickets.remove(index))
    }

    /// Look up a ticket by id
    #[must_use]
    pub fn find_by_id(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Overwrite the stored record with the same id
    ///
    /// Returns `false` when no ticket with that id exists; position in the
    /// working set is preserved on success.
    pub fn replace(&mut self, ticket: Ticket) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(slot) => {
                *slot = ticket;
                true
            },
            None => false,
        }
    }

    /// All tickets in insertion order
    #[must_use]
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Ids of all tickets in insertion order
    #[must_use]
    pub fn ids(&self) -> Vec<TicketId> {
        self.tickets.iter().map(|t| t.id).collect()
    }

    /// Tickets matching a predicate, order preserved
    pub fn filter<F>(&self, predicate: F) -> Vec<&Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.tickets.iter().filter(|t| predicate(t)).collect()
    }

    /// Number of tickets in the working set
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the working set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ticket::Status;

    fn ticket(id: u64, title: &str) -> Ticket {
        let mut t = Ticket::new(title, "desc", "Hardware", "Sam");
        t.id = TicketId::new(id);
        t
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = TicketStore::new();
        store.add(ticket(1, "first"));
        store.add(ticket(2, "second"));
        store.add(ticket(3, "third"));

        let titles: Vec<&str> = store.all().iter().map(|t| t.issue_title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_load_replaces_not_merges() {
        let mut store = TicketStore::new();
        store.add(ticket(1, "old"));
        store.load(vec![ticket(2, "fresh")]);

        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(TicketId::new(1)).is_none());
        assert!(store.find_by_id(TicketId::new(2)).is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let store = TicketStore::new();
        assert!(store.find_by_id(TicketId::new(99)).is_none());
    }

    #[test]
    fn test_remove_returns_the_ticket() {
        let mut store = TicketStore::new();
        store.add(ticket(1, "keep"));
        store.add(ticket(2, "drop"));

        let removed = store.remove(TicketId::new(2)).unwrap();
        assert_eq!(removed.issue_title, "drop");
        assert_eq!(store.len(), 1);
        assert!(store.remove(TicketId::new(2)).is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = TicketStore::new();
        store.add(ticket(1, "a"));
        store.add(ticket(2, "b"));

        let mut updated = ticket(1, "a2");
        updated.status = Status::InProgress;
        assert!(store.replace(updated));

        assert_eq!(store.all()[0].issue_title, "a2");
        assert_eq!(store.all()[0].status, Status::InProgress);
        assert!(!store.replace(ticket(9, "nope")));
    }

    #[test]
    fn test_filter_by_predicate() {
        let mut store = TicketStore::new();
        let mut resolved = ticket(1, "done");
        resolved.status = Status::Resolved;
        store.add(resolved);
        store.add(ticket(2, "open"));

        let hits = store.filter(|t| t.status == Status::Resolved);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].issue_title, "done");
    }
}
