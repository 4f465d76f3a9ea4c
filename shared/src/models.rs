use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// An employee record as exchanged over the API and stored in `employees`.
///
/// Missing or `null` fields decode as empty strings, and empty strings are
/// left out when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub employee_id: String,
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub department: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            employee_id: String::new(),
            name: name.into(),
            department: department.into(),
        }
    }

    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = employee_id.into();
        self
    }

    /// Name of the first stored field holding a NUL character, which the
    /// `employees` table cannot store.
    pub fn field_with_nul(&self) -> Option<&'static str> {
        if self.name.contains('\0') {
            Some("name")
        } else if self.department.contains('\0') {
            Some("department")
        } else {
            None
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_fields_are_omitted() {
        let employee = Employee::new("John Doe", "");
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value, json!({"name": "John Doe"}));
    }

    #[test]
    fn test_uses_camel_case_keys() {
        let employee = Employee::new("John Doe", "IT").with_employee_id("abc");
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({"employeeId": "abc", "name": "John Doe", "department": "IT"})
        );
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let employee: Employee = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(employee, Employee::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let employee: Employee =
            serde_json::from_value(json!({"name": "Jane", "salary": 100})).unwrap();
        assert_eq!(employee.name, "Jane");
    }

    #[test]
    fn test_field_with_nul() {
        assert_eq!(Employee::new("John Doe", "IT").field_with_nul(), None);
        assert_eq!(Employee::new("John\0Doe", "IT").field_with_nul(), Some("name"));
        assert_eq!(Employee::new("John", "I\0T").field_with_nul(), Some("department"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_value::<Employee>(json!({"name": 42}));
        assert!(result.is_err());
    }
}
