//! Ticket lifecycle orchestration
//!
//! [`TicketService`] owns the working set and drives every mutation through
//! the transition validator and the collaborator contracts. It is generic
//! over the three collaborators so tests can inject mocks and callers can
//! pick a backend.
//!
//! The status state machine is free: any of the four statuses may move to
//! any other. The only gate is the validator's resolution rules when a
//! ticket enters Resolved or Closed.

use crate::core::directory::CategoryId;
use crate::core::session::EditSession;
use crate::core::store::TicketStore;
use crate::core::ticket::{NewTicket, Status, Ticket, TicketDraft, TicketId};
use crate::core::transition;
use crate::error::{HelpDeskError, Result};
use crate::storage::repository::{CategoryLookup, EmployeeLookup, TicketPersistence, TicketQuery};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Orchestrates create/update/delete against the working set
pub struct TicketService<P, C, E> {
    persistence: P,
    categories: C,
    employees: E,
    store: TicketStore,
}

impl<P, C, E> TicketService<P, C, E>
where
    P: TicketPersistence,
    C: CategoryLookup,
    E: EmployeeLookup,
{
    /// Create a service with an empty working set
    pub fn new(persistence: P, categories: C, employees: E) -> Self {
        Self {
            persistence,
            categories,
            employees,
            store: TicketStore::new(),
        }
    }

    /// The current working set
    #[must_use]
    pub const fn store(&self) -> &TicketStore {
        &self.store
    }

    /// The persistence collaborator
    #[must_use]
    pub const fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Reload the working set from the authoritative store, unfiltered
    pub fn refresh(&mut self) -> Result<&[Ticket]> {
        let tickets = self.persistence.get_all(&TicketQuery::unfiltered())?;
        debug!(count = tickets.len(), "working set refreshed");
        self.store.load(tickets);
        Ok(self.store.all())
    }

    /// Query the authoritative store and replace the working set
    ///
    /// `None` means no constraint on that field. The category filter takes
    /// an id and is translated to the stored display name before querying.
    pub fn apply_filter(
        &mut self,
        status: Option<Status>,
        category: Option<CategoryId>,
    ) -> Result<&[Ticket]> {
        let mut query = TicketQuery::unfiltered();
        if let Some(status) = status {
            query = query.with_status(status);
        }
        if let Some(id) = category {
            let category = self
                .categories
                .find(id)?
                .ok_or(HelpDeskError::CategoryNotFound { id })?;
            query = query.with_category(category.name);
        }

        let tickets = self.persistence.get_all(&query)?;
        debug!(count = tickets.len(), "filter applied");
        self.store.load(tickets);
        Ok(self.store.all())
    }

    /// Create a ticket and append it to the working set
    ///
    /// Title and description must be non-blank; category and employee ids
    /// must resolve through the lookups. Blank resolution notes are
    /// normalized to absent. The transition validator runs against the
    /// initial status, so a ticket born Resolved or Closed comes out with
    /// its resolution fields set or is rejected outright.
    pub fn create(&mut self, input: NewTicket) -> Result<Ticket> {
        if input.issue_title.trim().is_empty() {
            return Err(HelpDeskError::MissingTitle);
        }
        if input.description.trim().is_empty() {
            return Err(HelpDeskError::MissingDescription);
        }

        let category = self
            .categories
            .find(input.category_id)?
            .ok_or(HelpDeskError::CategoryNotFound {
                id: input.category_id,
            })?;
        let employee = self
            .employees
            .find(input.assigned_employee_id)?
            .ok_or(HelpDeskError::EmployeeNotFound {
                id: input.assigned_employee_id,
            })?;

        let now = Utc::now();
        let draft = TicketDraft {
            issue_title: input.issue_title,
            description: input.description,
            category: category.name,
            assigned_employee: employee.full_name,
            status: input.status,
            date_created: now,
            resolution_notes: input.resolution_notes.unwrap_or_default(),
        };
        let effects = transition::validate(&draft, draft.status, || now)?;

        let ticket = Ticket {
            id: TicketId::default(),
            issue_title: draft.issue_title,
            description: draft.description,
            category: draft.category,
            assigned_employee: draft.assigned_employee,
            status: draft.status,
            date_created: draft.date_created,
            date_resolved: effects.date_resolved,
            resolution_notes: effects.resolution_notes,
        };

        let persisted = self.persistence.add(ticket)?;
        info!(id = %persisted.id, status = %persisted.status, "ticket created");
        self.store.add(persisted.clone());
        Ok(persisted)
    }

    /// Save the session's edits onto the stored ticket
    ///
    /// A clean session is a no-op returning the stored record untouched.
    /// A validator failure comes back without any mutation; on success the
    /// stored ticket is replaced atomically and the session is rebased so
    /// it reads as clean.
    pub fn update<F>(&mut self, session: &mut EditSession, now_fn: F) -> Result<Ticket>
    where
        F: FnOnce() -> DateTime<Utc>,
    {
        let id = session.ticket_id();
        let Some(stored) = self.store.find_by_id(id) else {
            return Err(HelpDeskError::TicketNotFound { id });
        };

        if !session.is_dirty() {
            debug!(%id, "update skipped, no changes");
            return Ok(stored.clone());
        }

        let draft = session.current();
        let effects = transition::validate(draft, draft.status, now_fn)?;

        let mut updated = stored.clone();
        updated.apply_draft(draft, effects);
        self.store.replace(updated.clone());
        session.rebase();
        info!(%id, status = %updated.status, "ticket updated");
        Ok(updated)
    }

    /// Delete a ticket after re-checking the authoritative store
    ///
    /// A ticket missing from the working set is `TicketNotFound`. A ticket
    /// present locally but gone from the authoritative store was removed by
    /// another actor: `ConcurrentlyDeleted`, and the caller should refresh.
    pub fn delete(&mut self, id: TicketId) -> Result<()> {
        if self.store.find_by_id(id).is_none() {
            return Err(HelpDeskError::TicketNotFound { id });
        }

        let authoritative = self.persistence.get_all(&TicketQuery::unfiltered())?;
        if !authoritative.iter().any(|t| t.id == id) {
            return Err(HelpDeskError::ConcurrentlyDeleted { id });
        }

        self.persistence.delete(id)?;
        self.store.remove(id);
        info!(%id, "ticket deleted");
        Ok(())
    }

    /// Delete every ticket in the working set, stopping at the first failure
    ///
    /// Already-deleted tickets stay deleted; the remainder is untouched and
    /// the error names the offending id plus how many were removed before
    /// it. Returns the number of tickets removed on full success.
    pub fn delete_all(&mut self) -> Result<usize> {
        let mut removed = 0usize;
        for id in self.store.ids() {
            if let Err(err) = self.persistence.delete(id) {
                return Err(HelpDeskError::ClearAllStopped {
                    id,
                    removed,
                    reason: err.user_message(),
                });
            }
            self.store.remove(id);
            removed += 1;
        }
        info!(count = removed, "working set cleared");
        Ok(removed)
    }
}
