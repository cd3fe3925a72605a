use serde::{Deserialize, Serialize};

/// One role held by a user, optionally scoped to a single school.
///
/// A `school_id` of `None` means the role is global (e.g. super admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role_id: String,
    pub role_name: String,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
}
