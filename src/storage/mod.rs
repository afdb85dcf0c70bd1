//! Storage backends and collaborator contracts
//!
//! [`FileStorage`] keeps the project state under a `.helpdesk` directory;
//! [`MemoryStorage`] keeps everything in memory for tests and ephemeral
//! sessions. Both implement the contracts in [`repository`].

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use repository::{Backend, CategoryLookup, EmployeeLookup, TicketPersistence, TicketQuery};
