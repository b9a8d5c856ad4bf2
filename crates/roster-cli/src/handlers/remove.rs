//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_employee_summary;
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the employee and asks for confirmation unless `force` is set.
/// A missing ID is reported as not found in both modes.
pub async fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    if !force {
        let employee = ctx
            .employees()
            .find_by_id(id)
            .await
            .map_err(CliError::from)?;

        display_employee_summary(&employee);
        println!();

        let confirm = input::prompt_confirmation("Are you sure you want to remove this employee?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.employees().delete(id).await.map_err(CliError::from)?;

    println!("Employee deleted successfully");
    Ok(())
}
