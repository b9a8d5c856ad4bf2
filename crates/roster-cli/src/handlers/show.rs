//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_employee_summary;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let employee = ctx
        .employees()
        .find_by_id(id)
        .await
        .map_err(CliError::from)?;

    display_employee_summary(&employee);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;

    #[tokio::test]
    async fn test_show_missing_is_not_found() {
        let ctx = context().await;

        let err = execute(&ctx, 999).await.unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();

        assert!(matches!(cli_err, CliError::NotFound(_)));
        assert_eq!(cli_err.to_string(), "Employee not found with Id: '999'");
    }
}
