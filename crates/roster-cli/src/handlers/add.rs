//! Add command handler.

use anyhow::Result;
use roster_core::NewEmployee;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the add command and print the assigned ID.
pub async fn execute(ctx: &CliContext, name: String, email: String, role: String) -> Result<()> {
    let created = ctx
        .employees()
        .create(NewEmployee { name, email, role })
        .await
        .map_err(CliError::from)?;

    println!("Employee '{}' added with ID {}.", created.name, created.id);
    Ok(())
}
