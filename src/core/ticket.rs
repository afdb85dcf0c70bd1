//! Ticket data model
//!
//! A [`Ticket`] carries the resolution invariant: `date_resolved` and
//! `resolution_notes` are both present exactly when the status is Resolved or
//! Closed. The lifecycle service rejects any mutation that would break this
//! before touching the record, so a stored ticket is always consistent.

use crate::core::directory::{CategoryId, EmployeeId};
use crate::core::transition::TransitionEffects;
use crate::error::HelpDeskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a ticket
///
/// Ids are assigned by the persistence collaborator when a ticket is first
/// added; `0` marks a draft that has never been persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether persistence has assigned this id yet
    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = HelpDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| HelpDeskError::InvalidInput(format!("invalid ticket id: '{s}'")))
    }
}

/// Lifecycle status of a ticket
///
/// The set is closed: parsing rejects anything outside these four values
/// instead of falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Freshly reported, nobody is working on it yet
    #[default]
    New,
    /// Being worked on
    InProgress,
    /// Fixed, waiting for confirmation
    Resolved,
    /// Done, no further action
    Closed,
}

impl Status {
    /// All statuses in lifecycle order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::New, Self::InProgress, Self::Resolved, Self::Closed]
    }

    /// Whether this status requires the resolution fields to be set
    #[must_use]
    pub const fn requires_resolution(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Kebab-case name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = HelpDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(HelpDeskError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A support ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Persistent identifier, immutable once assigned
    pub id: TicketId,
    /// Short summary of the issue
    pub issue_title: String,
    /// Full description
    pub description: String,
    /// Display name of the category the ticket belongs to
    pub category: String,
    /// Display name of the employee working the ticket
    pub assigned_employee: String,
    /// Current lifecycle status
    pub status: Status,
    /// When the ticket was created; editable after the fact
    pub date_created: DateTime<Utc>,
    /// When the ticket entered Resolved/Closed, absent otherwise
    #[serde(default)]
    pub date_resolved: Option<DateTime<Utc>>,
    /// How the issue was fixed, absent until resolved
    #[serde(default)]
    pub resolution_notes: Option<String>,
}

impl Ticket {
    /// Create a new unpersisted ticket with status [`Status::New`]
    #[must_use]
    pub fn new(
        issue_title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        assigned_employee: impl Into<String>,
    ) -> Self {
        Self {
            id: TicketId::default(),
            issue_title: issue_title.into(),
            description: description.into(),
            category: category.into(),
            assigned_employee: assigned_employee.into(),
            status: Status::New,
            date_created: Utc::now(),
            date_resolved: None,
            resolution_notes: None,
        }
    }

    /// Snapshot the editable fields for an edit session
    #[must_use]
    pub fn draft(&self) -> TicketDraft {
        TicketDraft {
            issue_title: self.issue_title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            assigned_employee: self.assigned_employee.clone(),
            status: self.status,
            date_created: self.date_created,
            resolution_notes: self.resolution_notes.clone().unwrap_or_default(),
        }
    }

    /// Overwrite the editable fields from a draft plus validated effects
    ///
    /// The id is untouched. Resolution fields come exclusively from the
    /// effects so the resolution invariant cannot be half-applied.
    pub fn apply_draft(&mut self, draft: &TicketDraft, effects: TransitionEffects) {
        self.issue_title = draft.issue_title.clone();
        self.description = draft.description.clone();
        self.category = draft.category.clone();
        self.assigned_employee = draft.assigned_employee.clone();
        self.status = draft.status;
        self.date_created = draft.date_created;
        self.date_resolved = effects.date_resolved;
        self.resolution_notes = effects.resolution_notes;
    }

    /// Whether the resolution fields agree with the status
    #[must_use]
    pub fn resolution_is_consistent(&self) -> bool {
        if self.status.requires_resolution() {
            self.date_resolved.is_some() && self.resolution_notes.is_some()
        } else {
            self.date_resolved.is_none() && self.resolution_notes.is_none()
        }
    }
}

/// Input for creating a ticket
///
/// Category and employee are referenced by id here; the lifecycle service
/// resolves both to display names before the ticket is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub issue_title: String,
    pub description: String,
    pub category_id: CategoryId,
    pub assigned_employee_id: EmployeeId,
    /// Initial status, [`Status::New`] unless the caller says otherwise
    #[serde(default)]
    pub status: Status,
    /// Notes supplied up front; blank input is treated as absent
    #[serde(default)]
    pub resolution_notes: Option<String>,
}

/// Snapshot of a ticket's editable fields
///
/// Two drafts compare field-wise: string fields by exact match (no trimming,
/// case-sensitive), the date by instant. `resolution_notes` is a plain string
/// with `""` standing for absent so that typing and erasing a character
/// compares equal to the baseline again.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDraft {
    pub issue_title: String,
    pub description: String,
    pub category: String,
    pub assigned_employee: String,
    pub status: Status,
    pub date_created: DateTime<Utc>,
    pub resolution_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticket() -> Ticket {
        Ticket::new("Printer jam", "Paper stuck in tray 2", "Hardware", "Dana Scully")
    }

    #[test]
    fn test_status_parses_known_values() {
        assert_eq!("new".parse::<Status>().unwrap(), Status::New);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("Resolved".parse::<Status>().unwrap(), Status::Resolved);
        assert_eq!("  closed ".parse::<Status>().unwrap(), Status::Closed);
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        let err = "reopened".parse::<Status>().unwrap_err();
        assert!(matches!(err, HelpDeskError::UnknownStatus { value } if value == "reopened"));
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in Status::all() {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_new_ticket_is_consistent() {
        let ticket = sample_ticket();
        assert_eq!(ticket.status, Status::New);
        assert!(ticket.id.is_unassigned());
        assert!(ticket.resolution_is_consistent());
    }

    #[test]
    fn test_half_applied_resolution_is_inconsistent() {
        let mut ticket = sample_ticket();
        ticket.status = Status::Resolved;
        ticket.date_resolved = Some(Utc::now());
        assert!(!ticket.resolution_is_consistent());

        ticket.resolution_notes = Some("Cleared the jam".to_string());
        assert!(ticket.resolution_is_consistent());
    }

    #[test]
    fn test_lingering_resolution_fields_are_inconsistent() {
        let mut ticket = sample_ticket();
        ticket.date_resolved = Some(Utc::now());
        assert!(!ticket.resolution_is_consistent());
    }

    #[test]
    fn test_draft_snapshot_matches_ticket() {
        let ticket = sample_ticket();
        let draft = ticket.draft();
        assert_eq!(draft.issue_title, ticket.issue_title);
        assert_eq!(draft.status, ticket.status);
        assert_eq!(draft.resolution_notes, "");
        assert_eq!(draft, ticket.draft());
    }

    #[test]
    fn test_apply_draft_takes_resolution_from_effects() {
        let mut ticket = sample_ticket();
        let mut draft = ticket.draft();
        draft.status = Status::Resolved;
        draft.resolution_notes = "Cleared the jam".to_string();

        let resolved_at = Utc::now();
        ticket.apply_draft(
            &draft,
            TransitionEffects {
                date_resolved: Some(resolved_at),
                resolution_notes: Some("Cleared the jam".to_string()),
            },
        );

        assert_eq!(ticket.status, Status::Resolved);
        assert_eq!(ticket.date_resolved, Some(resolved_at));
        assert!(ticket.resolution_is_consistent());
    }

    #[test]
    fn test_ticket_id_parse() {
        assert_eq!("42".parse::<TicketId>().unwrap(), TicketId::new(42));
        assert!("abc".parse::<TicketId>().is_err());
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let yaml = serde_yaml::to_string(&Status::InProgress).unwrap();
        assert_eq!(yaml.trim(), "in-progress");
        let back: Status = serde_yaml::from_str("in-progress").unwrap();
        assert_eq!(back, Status::InProgress);
    }
}
