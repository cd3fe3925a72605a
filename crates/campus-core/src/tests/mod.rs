mod api_error;

use crate::RoleAssignment;

pub(crate) fn role(name: &str, school_id: Option<&str>) -> RoleAssignment {
    RoleAssignment {
        role_id: format!("role-{name}"),
        role_name: name.to_string(),
        school_id: school_id.map(String::from),
        school_name: school_id.map(|id| format!("School {id}")),
    }
}
