//! Command-line interface
//!
//! The CLI is the presentation layer over the lifecycle engine: every
//! subcommand maps onto one core operation. Parsing is clap-derive; output
//! goes through [`OutputFormatter`].

pub mod handlers;
pub mod output;
pub mod utils;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// Support ticket tracker with lifecycle validation
#[derive(Parser)]
#[command(name = "helpdesk", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to searching upward from the current one)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a helpdesk project in the current directory
    Init {
        /// Project display name
        #[arg(long)]
        name: Option<String>,

        /// Reinitialize even if a project already exists
        #[arg(long)]
        force: bool,
    },

    /// Create a new ticket
    New {
        /// Issue title
        title: String,

        /// Full description of the problem
        #[arg(short, long)]
        description: String,

        /// Category id (see `helpdesk category list`)
        #[arg(short, long)]
        category: u32,

        /// Assigned employee id (see `helpdesk employee list`)
        #[arg(short, long)]
        employee: u32,

        /// Initial status
        #[arg(short, long, default_value = "new")]
        status: String,

        /// Resolution notes, for tickets created already resolved
        #[arg(long)]
        notes: Option<String>,
    },

    /// List tickets, optionally filtered
    List {
        /// Filter by status; "all" clears the constraint
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by category id; "all" clears the constraint
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit fields of an existing ticket
    Update {
        /// Ticket id
        ticket: u64,

        /// New issue title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category id
        #[arg(long)]
        category: Option<u32>,

        /// New assigned employee id
        #[arg(long)]
        employee: Option<u32>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// New resolution notes (required when resolving or closing)
        #[arg(long)]
        notes: Option<String>,

        /// New creation date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        created: Option<String>,
    },

    /// Delete a ticket
    Delete {
        /// Ticket id
        ticket: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every ticket in the current view
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage ticket categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Manage assignable employees
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
}

/// Category directory subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// List known categories
    List,
}

/// Employee directory subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Add an employee
    Add {
        /// Employee full name
        name: String,
    },
    /// List known employees
    List,
}
