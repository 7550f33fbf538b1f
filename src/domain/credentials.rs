//! Login submission and credential types.

use std::fmt;

/// An email/password pair that passed form validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// The single credential pair accepted by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPair {
    pub email: &'static str,
    pub password: &'static str,
}

impl CredentialPair {
    /// The hardcoded demo account.
    pub const DEMO: Self = Self {
        email: "rick0142@gmail.com",
        password: "L6h3d4drae",
    };

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, credentials: &Credentials) -> bool {
        credentials.email == self.email && credentials.password == self.password
    }
}

impl Default for CredentialPair {
    fn default() -> Self {
        Self::DEMO
    }
}

/// Result of comparing validated credentials against the demo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// Does not say which field was wrong.
    Denied,
}
