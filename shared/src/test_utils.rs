//! Substitute [`EmployeeStore`] implementations for tests that should not
//! need a database.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::db::error::DatabaseError;
use crate::models::Employee;
use crate::traits::EmployeeStore;
use crate::utils;

/// Keeps records in insertion order, paired with their storage-level id.
/// Mirrors the Postgres repository: first match wins, unchanged updates
/// count as 0.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    records: Mutex<Vec<(String, Employee)>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage-level ids currently held, in insertion order.
    pub fn storage_ids(&self) -> Vec<String> {
        self.lock().iter().map(|(id, _)| id.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, Employee)>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<String, DatabaseError> {
        let id = utils::generate_ulid();
        self.lock().push((id.clone(), employee.clone()));
        Ok(id)
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Employee, DatabaseError> {
        self.lock()
            .iter()
            .find(|(_, e)| e.employee_id == employee_id)
            .map(|(_, e)| e.clone())
            .ok_or_else(|| DatabaseError::NotFound(format!("employee {}", employee_id)))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError> {
        Ok(self.lock().iter().map(|(_, e)| e.clone()).collect())
    }

    async fn update_by_employee_id(
        &self,
        employee_id: &str,
        employee: &Employee,
    ) -> Result<u64, DatabaseError> {
        let mut records = self.lock();
        let Some((_, existing)) = records.iter_mut().find(|(_, e)| e.employee_id == employee_id)
        else {
            return Ok(0);
        };

        if existing.name == employee.name && existing.department == employee.department {
            return Ok(0);
        }

        existing.name = employee.name.clone();
        existing.department = employee.department.clone();
        Ok(1)
    }

    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<u64, DatabaseError> {
        let mut records = self.lock();
        match records.iter().position(|(_, e)| e.employee_id == employee_id) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let mut records = self.lock();
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }
}

/// Fails every call with the given message, as an unreachable database would.
pub struct FailingEmployeeStore {
    message: String,
}

impl FailingEmployeeStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> DatabaseError {
        DatabaseError::ConnectionFailed(self.message.clone())
    }
}

#[async_trait]
impl EmployeeStore for FailingEmployeeStore {
    async fn insert(&self, _employee: &Employee) -> Result<String, DatabaseError> {
        Err(self.error())
    }

    async fn find_by_employee_id(&self, _employee_id: &str) -> Result<Employee, DatabaseError> {
        Err(self.error())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError> {
        Err(self.error())
    }

    async fn update_by_employee_id(
        &self,
        _employee_id: &str,
        _employee: &Employee,
    ) -> Result<u64, DatabaseError> {
        Err(self.error())
    }

    async fn delete_by_employee_id(&self, _employee_id: &str) -> Result<u64, DatabaseError> {
        Err(self.error())
    }

    async fn delete_all(&self) -> Result<u64, DatabaseError> {
        Err(self.error())
    }
}
