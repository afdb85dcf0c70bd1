//! Handlers for the `category` and `employee` directory commands

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::{CategoryCommands, EmployeeCommands};
use crate::error::Result;

/// Manage the category directory
pub fn handle_category_command(
    command: CategoryCommands,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    match command {
        CategoryCommands::Add { name } => {
            let category = ctx.storage.add_category(name)?;
            formatter.success(&format!(
                "Added category #{}: {}",
                category.id, category.name
            ));
            if formatter.is_json() {
                formatter.json(&category)?;
            }
        },
        CategoryCommands::List => {
            let categories = ctx.storage.load_categories()?;
            if formatter.is_json() {
                return formatter.json(&categories);
            }
            if categories.is_empty() {
                formatter.info("No categories defined");
                return Ok(());
            }
            for category in categories {
                formatter.line(&format!("{:>4}  {}", category.id, category.name));
            }
        },
    }
    Ok(())
}

/// Manage the employee directory
pub fn handle_employee_command(
    command: EmployeeCommands,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    match command {
        EmployeeCommands::Add { name } => {
            let employee = ctx.storage.add_employee(name)?;
            formatter.success(&format!(
                "Added employee #{}: {}",
                employee.id, employee.full_name
            ));
            if formatter.is_json() {
                formatter.json(&employee)?;
            }
        },
        EmployeeCommands::List => {
            let employees = ctx.storage.load_employees()?;
            if formatter.is_json() {
                return formatter.json(&employees);
            }
            if employees.is_empty() {
                formatter.info("No employees defined");
                return Ok(());
            }
            for employee in employees {
                formatter.line(&format!("{:>4}  {}", employee.id, employee.full_name));
            }
        },
    }
    Ok(())
}
