//! Credential mapping and the identity-provider boundary.
//!
//! The identity service only understands email-shaped identifiers, so a
//! human-chosen username is mapped onto a synthetic `name@goals.local`
//! login. Uniqueness is the provider's problem, not ours.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Account;

pub const LOGIN_DOMAIN: &str = "goals.local";

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must not contain '@'")]
    InvalidUsername,
    #[error("that username is already taken")]
    DuplicateIdentifier,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakCredential,
    #[error("wrong username or password")]
    InvalidCredentials,
    #[error("identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Maps a username to the login identifier the identity service expects.
/// The username is treated as an opaque local part, so it must not contain
/// the separator itself.
pub fn to_login_identifier(username: &str) -> Result<String, AuthError> {
    let name = username.trim();
    if name.is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    if name.contains('@') {
        return Err(AuthError::InvalidUsername);
    }
    Ok(format!("{name}@{LOGIN_DOMAIN}"))
}

/// Strips the synthetic domain back off for display. Malformed input comes
/// back unchanged rather than failing.
pub fn to_display_handle(login: &str) -> &str {
    match login.find('@') {
        Some(at) => &login[..at],
        None => login,
    }
}

pub fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn check_password_strength(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakCredential);
    }
    Ok(())
}

/// The external identity service, reduced to the calls this app makes.
/// Sign-out does not appear here: dropping the session is the session
/// holder's job and involves no provider round trip.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, login: &str, password: &str) -> Result<Account, AuthError>;
    async fn sign_in(&self, login: &str, password: &str) -> Result<Account, AuthError>;
    async fn update_password(&self, account_id: Uuid, new_password: &str)
        -> Result<(), AuthError>;
    async fn update_email(&self, account_id: Uuid, email: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_identifier_appends_fixed_domain() {
        assert_eq!(to_login_identifier("alice").unwrap(), "alice@goals.local");
        assert_eq!(to_login_identifier("  bob  ").unwrap(), "bob@goals.local");
    }

    #[test]
    fn empty_and_separator_usernames_are_rejected() {
        assert_eq!(to_login_identifier(""), Err(AuthError::EmptyUsername));
        assert_eq!(to_login_identifier("   "), Err(AuthError::EmptyUsername));
        assert_eq!(
            to_login_identifier("eve@evil.example"),
            Err(AuthError::InvalidUsername)
        );
    }

    #[test]
    fn display_handle_round_trips_the_username() {
        for name in ["alice", "bob-2026", "x"] {
            let login = to_login_identifier(name).unwrap();
            assert_eq!(to_display_handle(&login), name);
        }
    }

    #[test]
    fn display_handle_passes_malformed_input_through() {
        assert_eq!(to_display_handle("no-separator"), "no-separator");
        assert_eq!(to_display_handle(""), "");
    }

    #[test]
    fn digest_depends_on_salt_and_password() {
        let a = digest_password("salt-1", "hunter22");
        assert_eq!(a, digest_password("salt-1", "hunter22"));
        assert_ne!(a, digest_password("salt-2", "hunter22"));
        assert_ne!(a, digest_password("salt-1", "hunter23"));
    }

    #[test]
    fn short_passwords_are_weak() {
        assert_eq!(check_password_strength("12345"), Err(AuthError::WeakCredential));
        assert!(check_password_strength("123456").is_ok());
    }
}
