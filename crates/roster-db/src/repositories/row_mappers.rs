//! Row mapping helpers for `SQLite` queries.

use roster_core::{Employee, RepositoryError};
use sqlx::Row;
use sqlx::error::ErrorKind;

/// Shared SELECT column list for employee queries.
pub const EMPLOYEE_SELECT_COLUMNS: &str = "id, name, email, role";

/// Parse a database row into an Employee.
pub fn row_to_employee(row: &sqlx::sqlite::SqliteRow) -> Result<Employee, RepositoryError> {
    Ok(Employee {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        email: row.try_get("email").map_err(storage_error)?,
        role: row.try_get("role").map_err(storage_error)?,
    })
}

/// Map an `sqlx` error onto the port's error type.
///
/// Constraint violations reported by the database become
/// `RepositoryError::Constraint`; everything else is `Storage`.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return RepositoryError::Constraint(db_err.message().to_string());
            }
            _ => {}
        }
    }
    RepositoryError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_not_null_violation_maps_to_constraint() {
        let pool = setup_test_database().await.unwrap();

        let err = sqlx::query("INSERT INTO employees (name, email, role) VALUES (NULL, ?, ?)")
            .bind("ravi@gmail.com")
            .bind("Developer")
            .execute(&pool)
            .await
            .unwrap_err();

        match storage_error(err) {
            RepositoryError::Constraint(msg) => assert!(msg.contains("NOT NULL")),
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_table_maps_to_storage() {
        let pool = setup_test_database().await.unwrap();

        let err = sqlx::query("SELECT id FROM no_such_table")
            .fetch_all(&pool)
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(storage_error(err), RepositoryError::Storage(_)));
    }

    #[tokio::test]
    async fn test_row_to_employee_reads_all_columns() {
        let pool = setup_test_database().await.unwrap();
        sqlx::query("INSERT INTO employees (name, email, role) VALUES (?, ?, ?)")
            .bind("Arun")
            .bind("arun@gmail.com")
            .bind("Tester")
            .execute(&pool)
            .await
            .unwrap();

        let query = format!("SELECT {EMPLOYEE_SELECT_COLUMNS} FROM employees");
        let row = sqlx::query(&query).fetch_one(&pool).await.unwrap();

        let employee = row_to_employee(&row).unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.name, "Arun");
        assert_eq!(employee.role, "Tester");
    }
}
