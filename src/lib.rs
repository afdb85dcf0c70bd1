//! helpdesk - a support ticket tracker with lifecycle validation
//!
//! This crate manages support tickets through their whole lifecycle:
//! - an ordered in-memory working set ([`core::TicketStore`])
//! - edit sessions with field-wise dirty tracking ([`core::DirtyTracker`])
//! - status transition rules for entering Resolved/Closed
//!   ([`core::transition`])
//! - an orchestrating service with optimistic-concurrency delete detection
//!   ([`core::TicketService`])
//!
//! Storage backends live behind the collaborator traits in
//! [`storage::repository`]; the crate ships a file-backed and an in-memory
//! implementation.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]

//! # Example
//!
//! ```rust,ignore
//! use helpdesk::core::{CategoryId, EmployeeId, TicketBuilder, TicketService};
//! use helpdesk::storage::MemoryStorage;
//!
//! let categories = MemoryStorage::new();
//! let category = categories.add_category("Hardware");
//! let employees = MemoryStorage::new();
//! let employee = employees.add_employee("Dana Scully");
//!
//! let mut service = TicketService::new(MemoryStorage::new(), categories, employees);
//! let ticket = service.create(
//!     TicketBuilder::new()
//!         .issue_title("Printer jam")
//!         .description("Paper stuck in tray 2")
//!         .category(category.id)
//!         .assigned_employee(employee.id)
//!         .build(),
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use error::{HelpDeskError, Result};
