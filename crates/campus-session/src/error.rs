use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the session store and its auth endpoints
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Not authenticated: no access token in durable storage {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("No refresh token in durable storage {location}")]
    NoRefreshToken { location: ErrorLocation },

    #[error("Credential store error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SessionError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, code: String, message: String) -> Self {
        SessionError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        SessionError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_refresh_token() -> Self {
        SessionError::NoRefreshToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the failed call, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SessionError::Api { status, .. } => Some(*status),
            SessionError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for a definitive 401 from the backend.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SessionError::from_reqwest(err)
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
