//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::employee_display::TABLE_WIDTH;
use crate::presentation::{employee_row, print_separator, table_header};

/// Execute the list command.
///
/// Prints every stored employee in ID order.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let employees = ctx.employees().list_all().await.map_err(CliError::from)?;

    if employees.is_empty() {
        println!(
            "No employees found in the database at {}.",
            ctx.database_path().display()
        );
        println!("Use 'roster add --name <NAME> --email <EMAIL> --role <ROLE>' to add one.");
        return Ok(());
    }

    println!("Found {} employee(s):\n", employees.len());
    println!("{}", table_header());
    print_separator(TABLE_WIDTH);

    for employee in &employees {
        println!("{}", employee_row(employee));
    }

    Ok(())
}
