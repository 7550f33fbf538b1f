//! Credential check for validated login submissions.

use crate::domain::{CredentialPair, Credentials, LoginOutcome};

/// Decides whether validated credentials grant access.
///
/// Holds the accepted pair by value; the service has no mutable state and is
/// shared across requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LoginService {
    accepted: CredentialPair,
}

impl LoginService {
    /// Creates a service accepting only `accepted`.
    pub fn new(accepted: CredentialPair) -> Self {
        Self { accepted }
    }

    /// Compares `credentials` with the accepted pair.
    ///
    /// Logs the outcome with the submitted email. The password is never logged.
    pub fn authenticate(&self, credentials: &Credentials) -> LoginOutcome {
        if self.accepted.matches(credentials) {
            tracing::info!(email = %credentials.email, "Login granted");
            LoginOutcome::Granted
        } else {
            tracing::info!(email = %credentials.email, "Login denied");
            LoginOutcome::Denied
        }
    }
}
