//! Employee service - orchestrates employee CRUD operations.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Employee, EmployeeUpdate, NewEmployee};
use crate::error::{CoreError, ResourceNotFound};
use crate::ports::EmployeeRepository;

const RESOURCE_KIND: &str = "Employee";
const ID_FIELD: &str = "Id";

/// Service for employee operations.
///
/// Delegates persistence to the injected `EmployeeRepository` and owns the
/// existence check: every path that needs a stored record goes through
/// [`EmployeeService::find_by_id`], so a miss always surfaces as the same
/// `ResourceNotFound` regardless of the entry point.
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service with the given repository.
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Store a new employee. The repository assigns the ID.
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, CoreError> {
        let created = self.repo.insert(&employee).await?;
        info!(
            employee_id = created.id,
            name = %created.name,
            email = %created.email,
            "Created employee"
        );
        Ok(created)
    }

    /// List all employees in repository order.
    pub async fn list_all(&self) -> Result<Vec<Employee>, CoreError> {
        let employees = self.repo.list().await?;
        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Get an employee by ID.
    ///
    /// Fails with `CoreError::NotFound` when no employee has that ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Employee, CoreError> {
        match self.repo.find_by_id(id).await? {
            Some(employee) => {
                debug!(employee_id = id, "Found employee");
                Ok(employee)
            }
            None => {
                warn!(employee_id = id, "Employee lookup missed");
                Err(ResourceNotFound::new(RESOURCE_KIND, ID_FIELD, id).into())
            }
        }
    }

    /// Overwrite name, email and role of the employee with the given ID.
    ///
    /// The ID in storage is never changed. Nothing is written on a miss.
    pub async fn update(&self, update: EmployeeUpdate, id: i64) -> Result<Employee, CoreError> {
        let mut existing = self.find_by_id(id).await?;
        existing.apply(update);
        let Some(saved) = self.repo.save(&existing).await? else {
            warn!(employee_id = id, "Employee removed before update was saved");
            return Err(ResourceNotFound::new(RESOURCE_KIND, ID_FIELD, id).into());
        };
        info!(
            employee_id = saved.id,
            name = %saved.name,
            email = %saved.email,
            "Updated employee"
        );
        Ok(saved)
    }

    /// Delete the employee with the given ID.
    ///
    /// Deleting an ID twice fails the second time with `CoreError::NotFound`.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        let existing = self.find_by_id(id).await?;
        self.repo.delete(&existing).await?;
        info!(employee_id = id, "Deleted employee");
        Ok(())
    }
}
