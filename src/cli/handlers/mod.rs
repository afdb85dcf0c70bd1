//! Command handlers
//!
//! One module per command family; each exposes a `handle_*` function taking
//! the parsed arguments plus the shared [`OutputFormatter`].
//!
//! [`OutputFormatter`]: crate::cli::output::OutputFormatter

pub mod common;
pub mod delete;
pub mod directory;
pub mod init;
pub mod list;
pub mod new;
pub mod update;

pub use common::{FileBackedService, HandlerContext};
pub use delete::{handle_clear_command, handle_delete_command};
pub use directory::{handle_category_command, handle_employee_command};
pub use init::handle_init;
pub use list::handle_list_command;
pub use new::{NewParams, handle_new_command};
pub use update::{UpdateParams, handle_update_command};
