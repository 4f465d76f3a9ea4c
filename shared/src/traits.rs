use async_trait::async_trait;

use crate::db::error::DatabaseError;
use crate::models::Employee;

/// Persistence contract for employee records.
///
/// Every lookup and mutation is keyed on the business identifier
/// (`Employee::employee_id`). The storage-level id only ever leaves an
/// implementation as the return value of [`EmployeeStore::insert`].
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Stores the record and returns its storage-level id.
    async fn insert(&self, employee: &Employee) -> Result<String, DatabaseError>;

    /// Returns [`DatabaseError::NotFound`] when no record matches.
    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Employee, DatabaseError>;

    /// All records, in no particular order.
    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError>;

    /// Replaces `name` and `department` of the first matching record.
    /// Returns 1 if the record changed, 0 if it was missing or already held
    /// these values.
    async fn update_by_employee_id(
        &self,
        employee_id: &str,
        employee: &Employee,
    ) -> Result<u64, DatabaseError>;

    /// Returns the number of records removed, 0 or 1.
    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<u64, DatabaseError>;

    async fn delete_all(&self) -> Result<u64, DatabaseError>;
}
