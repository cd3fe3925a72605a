pub mod auth_guard;
pub mod guard;
pub mod guest_guard;
pub mod navigation_gate;
pub mod permission_guard;
pub mod route;
pub mod router;
pub mod tenant_guard;
pub mod tenant_resolver;

pub use auth_guard::AuthGuard;
pub use guard::{Guard, GuardOutcome};
pub use guest_guard::GuestGuard;
pub use navigation_gate::NavigationGate;
pub use permission_guard::PermissionGuard;
pub use route::Route;
pub use router::Router;
pub use tenant_guard::TenantGuard;
pub use tenant_resolver::TenantResolver;

#[cfg(test)]
mod tests;
