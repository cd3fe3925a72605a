use crate::{RoleAssignment, SUPER_ADMIN_ROLE, School};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the authenticated user, as returned by the backend.
///
/// Never persisted; re-fetched after every process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl UserProfile {
    /// Distinct schools across role assignments, in first-seen order.
    pub fn schools(&self) -> Vec<School> {
        let mut seen = HashSet::new();
        let mut schools = Vec::new();

        for role in &self.roles {
            if let Some(ref school_id) = role.school_id
                && seen.insert(school_id.clone())
            {
                schools.push(School {
                    id: school_id.clone(),
                    name: role
                        .school_name
                        .clone()
                        .unwrap_or_else(|| school_id.clone()),
                });
            }
        }

        schools
    }

    /// True iff a global (school-less) role carries the super admin name.
    pub fn is_super_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r.school_id.is_none() && r.role_name == SUPER_ADMIN_ROLE)
    }

    /// True iff the user holds at least one of the required permissions,
    /// or is super admin.
    pub fn has_any_permission(&self, required: &HashSet<String>) -> bool {
        if self.is_super_admin() {
            return true;
        }
        required.iter().any(|p| self.permissions.contains(p))
    }

    /// Tenant membership check. Super admin passes for any school id.
    pub fn may_access_school(&self, school_id: &str) -> bool {
        if self.is_super_admin() {
            return true;
        }
        self.roles
            .iter()
            .any(|r| r.school_id.as_deref() == Some(school_id))
    }
}
