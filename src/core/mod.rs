//! Core domain model and lifecycle engine
//!
//! This module contains the working-set store, the edit-session tracker, the
//! transition validator and the lifecycle service that ties them together,
//! plus the `Ticket` data model they all share.

pub mod builders;
pub mod directory;
pub mod service;
pub mod session;
pub mod store;
pub mod ticket;
pub mod transition;

pub use builders::TicketBuilder;
pub use directory::{Category, CategoryId, Employee, EmployeeId};
pub use service::TicketService;
pub use session::{DirtyTracker, EditSession, Selection, TicketEdit};
pub use store::TicketStore;
pub use ticket::{NewTicket, Status, Ticket, TicketDraft, TicketId};
pub use transition::TransitionEffects;
