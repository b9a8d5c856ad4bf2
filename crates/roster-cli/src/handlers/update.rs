//! Update command handler.

use anyhow::Result;
use roster_core::EmployeeUpdate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_employee_summary;

/// Execute the update command.
///
/// Name, email and role are all overwritten; the ID is kept.
pub async fn execute(
    ctx: &CliContext,
    id: i64,
    name: String,
    email: String,
    role: String,
) -> Result<()> {
    let updated = ctx
        .employees()
        .update(EmployeeUpdate { name, email, role }, id)
        .await
        .map_err(CliError::from)?;

    println!("Employee {} updated:", updated.id);
    display_employee_summary(&updated);
    Ok(())
}
