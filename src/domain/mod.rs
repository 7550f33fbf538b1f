//! Core login types.
//!
//! Nothing here is persisted: a submission lives for the duration of one request.

pub mod credentials;

pub use credentials::{CredentialPair, Credentials, LoginOutcome};
