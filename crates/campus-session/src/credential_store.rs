/// Durable storage key for the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Durable storage key for the renewal credential.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// UI preference keys sharing the same store; not read by the pipeline.
pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Persistent client-side key/value store for credentials.
///
/// Mutations are infallible by contract: implementations must apply the
/// in-memory change unconditionally and log (not raise) persistence
/// failures, so `clear_session` can never fail.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
