pub mod auth_api;
pub mod credential_store;
pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod session_store;

pub use auth_api::{AuthApi, LoginResponse, RefreshResponse};
pub use credential_store::{
    ACCESS_TOKEN_KEY, CredentialStore, LANGUAGE_KEY, REFRESH_TOKEN_KEY, THEME_KEY,
};
pub use error::{SessionError, SessionResult};
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;
pub use session_store::SessionStore;
