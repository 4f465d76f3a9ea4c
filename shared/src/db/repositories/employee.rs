use crate::{db::error::DatabaseError, models::Employee, traits::EmployeeStore, utils};
use async_trait::async_trait;
use sqlx::PgPool;

/// TEXT columns cannot hold NUL, so no stored row can match such an id.
fn storable(employee_id: &str) -> bool {
    !employee_id.contains('\0')
}

fn not_found(employee_id: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("employee {}", employee_id))
}

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: &PgPool) -> Self {
        Self { pool: pool.clone() }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<String, DatabaseError> {
        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO employees (id, employee_id, name, department)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(utils::generate_ulid())
        .bind(&employee.employee_id)
        .bind(&employee.name)
        .bind(&employee.department)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Employee, DatabaseError> {
        if !storable(employee_id) {
            return Err(not_found(employee_id));
        }

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_id, name, department
            FROM employees
            WHERE employee_id = $1
            LIMIT 1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        employee.ok_or_else(|| not_found(employee_id))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_id, name, department
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn update_by_employee_id(
        &self,
        employee_id: &str,
        employee: &Employee,
    ) -> Result<u64, DatabaseError> {
        if !storable(employee_id) {
            return Ok(0);
        }

        // A row that already holds these values is matched but not counted.
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2::text, department = $3::text, updated_at = CURRENT_TIMESTAMP
            WHERE id = (SELECT id FROM employees WHERE employee_id = $1 LIMIT 1)
              AND (name, department) IS DISTINCT FROM ($2::text, $3::text)
            "#,
        )
        .bind(employee_id)
        .bind(&employee.name)
        .bind(&employee.department)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<u64, DatabaseError> {
        if !storable(employee_id) {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = (SELECT id FROM employees WHERE employee_id = $1 LIMIT 1)
            "#,
        )
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM employees")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
