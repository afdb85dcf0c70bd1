//! Edit sessions and dirty tracking
//!
//! Selecting a ticket opens an [`EditSession`]: a baseline snapshot of the
//! editable fields plus a current snapshot that edits are applied to. The
//! session is dirty exactly when the two differ field-wise, so reverting an
//! edit by hand makes the session clean again.
//!
//! [`DirtyTracker`] owns the optional session and implements the selection
//! rules: re-selecting the selected ticket deselects it, and selecting a
//! different ticket replaces the session outright. Unsaved edits are
//! discarded silently in both cases; the returned [`Selection`] says whether
//! that happened so a caller can warn first if it wants to.

use crate::core::ticket::{Status, Ticket, TicketDraft, TicketId};
use crate::error::{HelpDeskError, Result};
use chrono::{DateTime, Utc};

/// A single field edit applied to the current snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum TicketEdit {
    IssueTitle(String),
    Description(String),
    Category(String),
    AssignedEmployee(String),
    Status(Status),
    DateCreated(DateTime<Utc>),
    /// Notes text as typed; an empty string means no notes
    ResolutionNotes(String),
}

/// Editing state for one selected ticket
#[derive(Debug, Clone)]
pub struct EditSession {
    ticket_id: TicketId,
    baseline: TicketDraft,
    current: TicketDraft,
}

impl EditSession {
    /// Open a session with the ticket's fields as the baseline
    #[must_use]
    pub fn begin(ticket: &Ticket) -> Self {
        let snapshot = ticket.draft();
        Self {
            ticket_id: ticket.id,
            baseline: snapshot.clone(),
            current: snapshot,
        }
    }

    /// Id of the ticket being edited
    #[must_use]
    pub const fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    /// The snapshot taken when the ticket was selected
    #[must_use]
    pub const fn baseline(&self) -> &TicketDraft {
        &self.baseline
    }

    /// The snapshot with all edits applied
    #[must_use]
    pub const fn current(&self) -> &TicketDraft {
        &self.current
    }

    /// Apply one field edit to the current snapshot
    ///
    /// String fields compare exactly against the baseline, so applying the
    /// old value back makes the session clean again.
    pub fn apply(&mut self, edit: TicketEdit) {
        match edit {
            TicketEdit::IssueTitle(value) => self.current.issue_title = value,
            TicketEdit::Description(value) => self.current.description = value,
            TicketEdit::Category(value) => self.current.category = value,
            TicketEdit::AssignedEmployee(value) => self.current.assigned_employee = value,
            TicketEdit::Status(value) => self.current.status = value,
            TicketEdit::DateCreated(value) => self.current.date_created = value,
            TicketEdit::ResolutionNotes(value) => self.current.resolution_notes = value,
        }
    }

    /// Whether any field differs from the baseline
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    /// Make the current snapshot the new baseline after a successful save
    pub fn rebase(&mut self) {
        self.baseline = self.current.clone();
    }
}

/// Outcome of a selection call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A session is now open on the given ticket
    Selected {
        id: TicketId,
        /// `true` when opening this session threw away unsaved edits
        discarded_unsaved: bool,
    },
    /// The selected ticket was clicked again; no session remains
    Deselected {
        /// `true` when closing the session threw away unsaved edits
        discarded_unsaved: bool,
    },
}

impl Selection {
    /// Whether a session is open after the call
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }

    /// Whether the call discarded unsaved edits
    #[must_use]
    pub const fn discarded_unsaved(&self) -> bool {
        match self {
            Self::Selected {
                discarded_unsaved, ..
            }
            | Self::Deselected { discarded_unsaved } => *discarded_unsaved,
        }
    }
}

/// Owns the optional edit session and the selection rules
#[derive(Debug, Default, Clone)]
pub struct DirtyTracker {
    session: Option<EditSession>,
}

impl DirtyTracker {
    /// Create a tracker with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a ticket, or deselect it if it is already selected
    ///
    /// Unsaved edits on the previous session are discarded without
    /// confirmation; the returned [`Selection`] reports whether that
    /// happened.
    pub fn select(&mut self, ticket: &Ticket) -> Selection {
        let was_dirty = self.has_unsaved_changes();

        if let Some(session) = &self.session {
            if session.ticket_id() == ticket.id {
                self.session = None;
                return Selection::Deselected {
                    discarded_unsaved: was_dirty,
                };
            }
        }

        self.session = Some(EditSession::begin(ticket));
        Selection::Selected {
            id: ticket.id,
            discarded_unsaved: was_dirty,
        }
    }

    /// Drop the session, if any, discarding unsaved edits
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// Id of the currently selected ticket
    #[must_use]
    pub fn selected_id(&self) -> Option<TicketId> {
        self.session.as_ref().map(EditSession::ticket_id)
    }

    /// The open session, if any
    #[must_use]
    pub const fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Mutable access to the open session, if any
    pub const fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Apply a field edit to the open session
    pub fn apply(&mut self, edit: TicketEdit) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or(HelpDeskError::NoTicketSelected)?;
        session.apply(edit);
        Ok(())
    }

    /// Whether the open session has edits that differ from its baseline
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.session.as_ref().is_some_and(EditSession::is_dirty)
    }
}
