// Shared-secret gate for the status endpoint.
// Hard-failure lane: a rejection here aborts the request before any probe runs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No secret in config and debug is off. A status endpoint with no secret
    /// is considered misconfigured for exposure, not open.
    #[error("no secret provided in config")]
    MissingSecret,
    #[error("bad access token")]
    BadToken,
}

/// Pure predicate over the configured secret, the debug flag, and the
/// request-supplied token.
///
/// Plain string comparison; a timing-safe compare is a hardening opportunity
/// left to the outer deployment.
#[derive(Debug, Clone)]
pub struct AuthGate {
    secret: String,
    debug: bool,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>, debug: bool) -> Self {
        Self {
            secret: secret.into(),
            debug,
        }
    }

    /// A missing token is treated as the empty string, so a configured secret
    /// can never be matched by simply omitting the parameter.
    pub fn authorize(&self, supplied: Option<&str>) -> Result<(), AuthError> {
        if self.secret.is_empty() && !self.debug {
            return Err(AuthError::MissingSecret);
        }
        if !self.secret.is_empty() && supplied.unwrap_or("") != self.secret {
            return Err(AuthError::BadToken);
        }
        Ok(())
    }
}
