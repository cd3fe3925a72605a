pub mod api_error;
pub mod role_assignment;
pub mod school;
pub mod user_profile;

pub use api_error::ApiErrorBody;
pub use role_assignment::RoleAssignment;
pub use school::School;
pub use user_profile::UserProfile;

/// Role name granting implicit access to every tenant.
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

#[cfg(test)]
mod tests;
