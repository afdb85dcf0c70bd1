//! helpdesk - support ticket tracker
//!
//! This is the main entry point for the helpdesk CLI. It parses the
//! command-line arguments and dispatches to the command handlers.

use clap::Parser;
use helpdesk::cli::{
    Cli, Commands, OutputFormatter,
    handlers::{
        NewParams, UpdateParams, handle_category_command, handle_clear_command,
        handle_delete_command, handle_employee_command, handle_init, handle_list_command,
        handle_new_command, handle_update_command,
    },
};
use helpdesk::error::Result;
use std::process;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Dispatch the parsed command to its handler
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let project = cli.project;
    match cli.command {
        Commands::Init { name, force } => {
            handle_init(name.as_deref(), force, project.as_deref(), formatter)
        },
        Commands::New {
            title,
            description,
            category,
            employee,
            status,
            notes,
        } => handle_new_command(
            NewParams {
                title,
                description,
                category,
                employee,
                status,
                notes,
                project_dir: project,
            },
            formatter,
        ),
        Commands::List { status, category } => {
            handle_list_command(status, category, project.as_deref(), formatter)
        },
        Commands::Update {
            ticket,
            title,
            description,
            category,
            employee,
            status,
            notes,
            created,
        } => handle_update_command(
            UpdateParams {
                ticket,
                title,
                description,
                category,
                employee,
                status,
                notes,
                created,
                project_dir: project,
            },
            formatter,
        ),
        Commands::Delete { ticket, yes } => {
            handle_delete_command(ticket, yes, project.as_deref(), formatter)
        },
        Commands::Clear { yes } => handle_clear_command(yes, project.as_deref(), formatter),
        Commands::Category { command } => {
            handle_category_command(command, project.as_deref(), formatter)
        },
        Commands::Employee { command } => {
            handle_employee_command(command, project.as_deref(), formatter)
        },
    }
}

/// Display an error with its suggestions and exit context
fn handle_error(error: &helpdesk::error::HelpDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let _cli = Cli::parse_from(["helpdesk", "init"]);
        let _cli = Cli::parse_from(["helpdesk", "list", "--status", "all"]);
        let _cli = Cli::parse_from([
            "helpdesk",
            "new",
            "Printer jam",
            "-d",
            "Paper stuck in tray 2",
            "-c",
            "1",
            "-e",
            "1",
        ]);
        let _cli = Cli::parse_from(["helpdesk", "update", "3", "--status", "resolved"]);
        let _cli = Cli::parse_from(["helpdesk", "category", "add", "Hardware"]);
    }
}
