//! Status transition validation
//!
//! The lifecycle state machine is free: any status may move to any other.
//! The only guarded edge is entering Resolved or Closed, which demands an
//! assignee, resolution notes and a resolution instant no earlier than the
//! creation date. Validation is pure; the returned [`TransitionEffects`] say
//! what the resolution fields must become and the caller applies them
//! atomically with the rest of the edit.

use crate::core::ticket::{Status, TicketDraft};
use crate::error::{HelpDeskError, Result};
use chrono::{DateTime, Utc};

/// Resolution field values derived by a successful validation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionEffects {
    pub date_resolved: Option<DateTime<Utc>>,
    pub resolution_notes: Option<String>,
}

impl TransitionEffects {
    /// Effects for a non-resolution target: both fields cleared
    ///
    /// Moving a resolved ticket back to New or InProgress drops whatever
    /// resolution data it had; it is not preserved for a later re-resolve.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            date_resolved: None,
            resolution_notes: None,
        }
    }
}

/// Validate a move to `target` and derive the resolution effects
///
/// Rules run in order and the first failure wins:
/// 1. a blank (empty or whitespace-only) assignee blocks Resolved/Closed;
/// 2. blank resolution notes block Resolved/Closed;
/// 3. the resolution instant, taken from `now_fn`, must not precede the
///    draft's creation date.
///
/// `now_fn` is consulted only on the resolution path, exactly once. Notes
/// are carried into the effects verbatim; blankness is checked on the
/// trimmed text but the stored value keeps its whitespace.
pub fn validate<F>(fields: &TicketDraft, target: Status, now_fn: F) -> Result<TransitionEffects>
where
    F: FnOnce() -> DateTime<Utc>,
{
    if !target.requires_resolution() {
        return Ok(TransitionEffects::cleared());
    }

    if fields.assigned_employee.trim().is_empty() {
        return Err(HelpDeskError::MissingAssignee);
    }
    if fields.resolution_notes.trim().is_empty() {
        return Err(HelpDeskError::MissingResolutionNotes);
    }

    let resolved_at = now_fn();
    if resolved_at < fields.date_created {
        return Err(HelpDeskError::ResolvedBeforeCreated);
    }

    Ok(TransitionEffects {
        date_resolved: Some(resolved_at),
        resolution_notes: Some(fields.resolution_notes.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> TicketDraft {
        TicketDraft {
            issue_title: "Printer jam".to_string(),
            description: "Paper stuck in tray 2".to_string(),
            category: "Hardware".to_string(),
            assigned_employee: "Dana Scully".to_string(),
            status: Status::InProgress,
            date_created: Utc::now() - Duration::hours(1),
            resolution_notes: "Cleared the jam".to_string(),
        }
    }

    #[test]
    fn test_blank_assignee_blocks_resolution() {
        for assignee in ["", "   ", "\t"] {
            let mut fields = draft();
            fields.assigned_employee = assignee.to_string();
            let err = validate(&fields, Status::Resolved, Utc::now).unwrap_err();
            assert!(matches!(err, HelpDeskError::MissingAssignee));
        }
    }

    #[test]
    fn test_assignee_checked_before_notes() {
        let mut fields = draft();
        fields.assigned_employee = String::new();
        fields.resolution_notes = String::new();
        let err = validate(&fields, Status::Closed, Utc::now).unwrap_err();
        assert!(matches!(err, HelpDeskError::MissingAssignee));
    }

    #[test]
    fn test_blank_notes_block_resolution() {
        let mut fields = draft();
        fields.resolution_notes = "   ".to_string();
        let err = validate(&fields, Status::Resolved, Utc::now).unwrap_err();
        assert!(matches!(err, HelpDeskError::MissingResolutionNotes));
    }

    #[test]
    fn test_resolution_before_creation_rejected() {
        let fields = draft();
        let too_early = fields.date_created - Duration::minutes(5);
        let err = validate(&fields, Status::Resolved, || too_early).unwrap_err();
        assert!(matches!(err, HelpDeskError::ResolvedBeforeCreated));
    }

    #[test]
    fn test_resolution_at_creation_instant_allowed() {
        let fields = draft();
        let effects = validate(&fields, Status::Resolved, || fields.date_created).unwrap();
        assert_eq!(effects.date_resolved, Some(fields.date_created));
    }

    #[test]
    fn test_success_carries_notes_verbatim() {
        let mut fields = draft();
        fields.resolution_notes = "  padded notes  ".to_string();
        let resolved_at = Utc::now();
        let effects = validate(&fields, Status::Closed, || resolved_at).unwrap();

        assert_eq!(effects.date_resolved, Some(resolved_at));
        assert_eq!(effects.resolution_notes.as_deref(), Some("  padded notes  "));
    }

    #[test]
    fn test_non_resolution_target_clears_effects() {
        let fields = draft();
        let effects = validate(&fields, Status::InProgress, Utc::now).unwrap();
        assert_eq!(effects, TransitionEffects::cleared());
    }

    #[test]
    fn test_clock_untouched_off_the_resolution_path() {
        let mut fields = draft();
        fields.assigned_employee = String::new();

        let mut called = false;
        let effects = validate(&fields, Status::New, || {
            called = true;
            Utc::now()
        })
        .unwrap();
        assert!(!called);
        assert_eq!(effects, TransitionEffects::cleared());
    }

    #[test]
    fn test_validation_skipped_entirely_for_open_statuses() {
        // Blank assignee and notes are fine as long as the target is not
        // Resolved or Closed.
        let mut fields = draft();
        fields.assigned_employee = String::new();
        fields.resolution_notes = String::new();
        assert!(validate(&fields, Status::New, Utc::now).is_ok());
        assert!(validate(&fields, Status::InProgress, Utc::now).is_ok());
    }
}
