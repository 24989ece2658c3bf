//! Credential verification and the session value passed to every command.
//!
//! Verification sits behind a trait so the YAML file store can be replaced by
//! a real secret backend without touching the rest of the system. Failure is
//! a single opaque error: callers never learn whether the username existed.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub trait CredentialStore {
    fn verify(&self, username: &str, secret: &str) -> bool;
}

/// In-memory credential table, used by tests and as a fallback.
pub struct StaticCredentials {
    users: BTreeMap<String, String>,
}

impl StaticCredentials {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            users: pairs
                .iter()
                .map(|(u, p)| (u.to_string(), p.to_string()))
                .collect(),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, username: &str, secret: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == secret)
    }
}

/// Credentials loaded from the YAML map named in the config
/// (`username: password`, plaintext by design).
#[derive(Debug)]
pub struct YamlCredentials {
    users: BTreeMap<String, String>,
}

impl YamlCredentials {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "credentials file not found: {} (run `prodtrack init`)",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let users: BTreeMap<String, String> = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid credentials file: {e}")))?;
        Ok(Self { users })
    }
}

impl CredentialStore for YamlCredentials {
    fn verify(&self, username: &str, secret: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == secret)
    }
}

/// Authenticated user identity, passed explicitly to every operation.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
}

pub fn authenticate(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> AppResult<Session> {
    if store.verify(username, password) {
        Ok(Session {
            username: username.to_string(),
        })
    } else {
        Err(AppError::Auth)
    }
}
