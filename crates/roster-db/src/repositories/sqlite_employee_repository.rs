//! `SQLite` implementation of the `EmployeeRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use roster_core::{Employee, EmployeeRepository, NewEmployee, RepositoryError};

use super::row_mappers::{EMPLOYEE_SELECT_COLUMNS, row_to_employee, storage_error};

/// `SQLite` implementation of the `EmployeeRepository` trait.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new `SQLite` employee repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        let query = format!("SELECT {EMPLOYEE_SELECT_COLUMNS} FROM employees ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_employee).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let query = format!("SELECT {EMPLOYEE_SELECT_COLUMNS} FROM employees WHERE id = ?");

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .as_ref()
            .map(row_to_employee)
            .transpose()
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, RepositoryError> {
        let result = sqlx::query("INSERT INTO employees (name, email, role) VALUES (?, ?, ?)")
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.role)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            role: employee.role.clone(),
        })
    }

    async fn save(&self, employee: &Employee) -> Result<Option<Employee>, RepositoryError> {
        let result = sqlx::query("UPDATE employees SET name = ?, email = ?, role = ? WHERE id = ?")
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.role)
            .bind(employee.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(employee.clone()))
    }

    async fn delete(&self, employee: &Employee) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(employee.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(employee_id = employee.id, "Delete matched no rows");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteEmployeeRepository {
        SqliteEmployeeRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;

        let first = repo
            .insert(&NewEmployee::new("Ravi", "ravi@gmail.com", "Developer"))
            .await
            .unwrap();
        let second = repo
            .insert(&NewEmployee::new("Arun", "arun@gmail.com", "Tester"))
            .await
            .unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Ravi");
        assert_eq!(second.role, "Tester");
    }

    #[tokio::test]
    async fn test_find_by_id_round_trips_insert() {
        let repo = repo().await;
        let created = repo
            .insert(&NewEmployee::new("Ravi", "ravi@gmail.com", "Developer"))
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = repo().await;
        repo.insert(&NewEmployee::new("Ravi", "ravi@gmail.com", "Developer"))
            .await
            .unwrap();
        repo.insert(&NewEmployee::new("Arun", "arun@gmail.com", "Tester"))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ravi", "Arun"]);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_row() {
        let repo = repo().await;
        let mut employee = repo
            .insert(&NewEmployee::new("Old", "old@example.com", "User"))
            .await
            .unwrap();

        employee.name = "New".to_string();
        employee.role = "Admin".to_string();
        let saved = repo.save(&employee).await.unwrap();
        assert_eq!(saved, Some(employee.clone()));

        let stored = repo.find_by_id(employee.id).await.unwrap().unwrap();
        assert_eq!(stored, employee);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_after_delete_does_not_recreate_row() {
        let repo = repo().await;
        let mut employee = repo
            .insert(&NewEmployee::new("Old", "old@example.com", "User"))
            .await
            .unwrap();
        repo.delete(&employee).await.unwrap();

        employee.name = "Late".to_string();
        assert_eq!(repo.save(&employee).await.unwrap(), None);
        assert_eq!(repo.find_by_id(employee.id).await.unwrap(), None);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let employee = repo
            .insert(&NewEmployee::new("Gone", "gone@example.com", "User"))
            .await
            .unwrap();

        repo.delete(&employee).await.unwrap();
        assert_eq!(repo.find_by_id(employee.id).await.unwrap(), None);

        // Deleting an absent row is not a storage error
        repo.delete(&employee).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo
            .insert(&NewEmployee::new("A", "a@example.com", "User"))
            .await
            .unwrap();
        repo.delete(&first).await.unwrap();

        let second = repo
            .insert(&NewEmployee::new("B", "b@example.com", "User"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
    }
}
