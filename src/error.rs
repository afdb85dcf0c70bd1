//! Error types for the helpdesk crate
//!
//! Every expected business-rule violation is a recoverable [`HelpDeskError`]
//! value; operations never panic for conditions a caller can anticipate.

use crate::core::{CategoryId, EmployeeId, TicketId};
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpDeskError>;

/// All errors produced by the helpdesk core, storage and CLI layers
#[derive(Debug, Error)]
pub enum HelpDeskError {
    /// A ticket cannot enter Resolved/Closed without an assigned employee
    #[error("Assigned employee is required to resolve a ticket")]
    MissingAssignee,

    /// A ticket cannot enter Resolved/Closed without resolution notes
    #[error("Resolution notes must not be empty")]
    MissingResolutionNotes,

    /// The resolution timestamp would precede the ticket's creation date
    #[error("Date resolved cannot be earlier than date created")]
    ResolvedBeforeCreated,

    /// The ticket id is not present in the working set
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    /// Another actor removed the ticket from the authoritative store after it
    /// was loaded locally
    #[error("Ticket {id} was already deleted by another operation")]
    ConcurrentlyDeleted { id: TicketId },

    /// The category id does not resolve to a known category
    #[error("Category {id} does not exist")]
    CategoryNotFound { id: CategoryId },

    /// The employee id does not resolve to a known employee
    #[error("Employee {id} does not exist")]
    EmployeeNotFound { id: EmployeeId },

    /// An external persistence collaborator reported a failure
    #[error("Persistence operation failed: {message}")]
    PersistenceFailed { message: String },

    /// Bulk deletion stopped at the first failing ticket
    #[error("Failed to delete ticket {id} after {removed} deletion(s): {reason}")]
    ClearAllStopped {
        id: TicketId,
        removed: usize,
        reason: String,
    },

    /// A status string from outside the crate did not match any known status
    #[error("Unknown status: '{value}'. Valid values: new, in-progress, resolved, closed")]
    UnknownStatus { value: String },

    /// An update was requested while no edit session is active
    #[error("No ticket is selected")]
    NoTicketSelected,

    /// Creation requires a non-blank issue title
    #[error("Issue title must not be empty")]
    MissingTitle,

    /// Creation requires a non-blank description
    #[error("Description must not be empty")]
    MissingDescription,

    /// No `.helpdesk` directory was found for the current project
    #[error("Project not initialized. Run 'helpdesk init' first")]
    ProjectNotInitialized,

    /// Free-form input that could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O failure from the file-backed storage layer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failure
    #[error("Dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),

    /// Configuration loading failure
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Catch-all for errors that do not deserve their own variant
    #[error("{0}")]
    Custom(String),
}

impl HelpDeskError {
    /// Build a [`HelpDeskError::Custom`] from anything displayable
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Message shown to the user, without internal detail
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Follow-up actions worth suggesting for this error, if any
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingAssignee => {
                vec!["Assign an employee before resolving or closing the ticket".to_string()]
            },
            Self::MissingResolutionNotes => {
                vec!["Add resolution notes describing how the issue was fixed".to_string()]
            },
            Self::ConcurrentlyDeleted { .. } => {
                vec!["Refresh the ticket list with 'helpdesk list' to see the current state".to_string()]
            },
            Self::TicketNotFound { .. } => {
                vec!["Run 'helpdesk list' to see the available tickets".to_string()]
            },
            Self::CategoryNotFound { .. } => {
                vec!["Run 'helpdesk category list' to see the known categories".to_string()]
            },
            Self::EmployeeNotFound { .. } => {
                vec!["Run 'helpdesk employee list' to see the known employees".to_string()]
            },
            Self::NoTicketSelected => {
                vec!["Select a ticket before saving changes".to_string()]
            },
            Self::ProjectNotInitialized => {
                vec!["Run 'helpdesk init' to set up a project in this directory".to_string()]
            },
            Self::ClearAllStopped { .. } => {
                vec!["Run 'helpdesk list' to see which tickets remain".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the caller can reasonably retry or correct the operation
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialization(_) | Self::Json(_))
    }

    /// Whether this error originates in configuration handling
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
