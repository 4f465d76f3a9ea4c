use shared::models::Employee;
use shared::utils::generate_employee_id;
use shared::EmployeeStore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ServiceError;

pub const EMPTY_ID_MESSAGE: &str = "employee id is empty";

/// Rejects an empty business identifier.
pub fn require_employee_id(employee_id: &str) -> Result<(), ServiceError> {
    if employee_id.is_empty() {
        return Err(ServiceError::InvalidInput(EMPTY_ID_MESSAGE.to_string()));
    }
    Ok(())
}

fn require_storable(employee: &Employee) -> Result<(), ServiceError> {
    match employee.field_with_nul() {
        Some(field) => Err(ServiceError::InvalidInput(format!(
            "{} must not contain NUL characters",
            field
        ))),
        None => Ok(()),
    }
}

/// The six employee operations, one per route.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Assigns a fresh business identifier, ignoring any the caller sent,
    /// and returns it.
    pub async fn create_employee(&self, mut employee: Employee) -> Result<String, ServiceError> {
        require_storable(&employee)?;
        employee.employee_id = generate_employee_id();

        let storage_id = self.store.insert(&employee).await?;
        info!(
            employee_id = %employee.employee_id,
            storage_id = %storage_id,
            "Employee created"
        );

        Ok(employee.employee_id)
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ServiceError> {
        debug!("Fetching employee {}", employee_id);
        Ok(self.store.find_by_employee_id(employee_id).await?)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        let employees = self.store.find_all().await?;
        debug!("Fetched {} employees", employees.len());
        Ok(employees)
    }

    /// Full replace of `name` and `department`. The path identifier wins over
    /// any identifier in the body. Returns the modified count.
    pub async fn update_employee(
        &self,
        employee_id: &str,
        mut employee: Employee,
    ) -> Result<u64, ServiceError> {
        require_employee_id(employee_id)?;
        require_storable(&employee)?;
        employee.employee_id = employee_id.to_string();

        let modified = self
            .store
            .update_by_employee_id(employee_id, &employee)
            .await?;
        info!("Updated employee {} (modified={})", employee_id, modified);

        Ok(modified)
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<u64, ServiceError> {
        require_employee_id(employee_id)?;

        let deleted = self.store.delete_by_employee_id(employee_id).await?;
        info!("Deleted employee {} (deleted={})", employee_id, deleted);

        Ok(deleted)
    }

    pub async fn delete_all_employees(&self) -> Result<u64, ServiceError> {
        let deleted = self.store.delete_all().await?;
        info!("Deleted all employees (deleted={})", deleted);
        Ok(deleted)
    }
}
