use ulid::Ulid;
use uuid::Uuid;

pub fn generate_ulid() -> String {
    Ulid::new().to_string()
}

/// Business identifier for a new employee: a random (v4) UUID.
pub fn generate_employee_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_employee_id_is_a_v4_uuid() {
        let id = generate_employee_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_employee_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_employee_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ulid_is_distinct_from_employee_id_format() {
        let ulid = generate_ulid();
        assert_eq!(ulid.len(), 26);
        assert!(Uuid::parse_str(&ulid).is_err());
    }
}
