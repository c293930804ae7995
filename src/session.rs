//! the mock authentication session store.
//!
//! Holds a seed list of credentials (simulating a backend user table)
//! and at most one authenticated user, mirrored to durable storage so a
//! session survives restarts. Signups land in the seed list only, which
//! is deliberately not persisted.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io;
use std::thread;
use std::time::Duration;

use crate::consts::{DEFAULT_LATENCY_MS, USER_STORAGE_KEY};
use crate::data::{Credential, User};
use crate::error::{AuthError, Result};
use crate::storage::Storage;

/// Seed data and timing, passed at construction rather than baked in.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub seed: Vec<Credential>,
    /// Artificial delay applied to login and signup, mimicking a
    /// network round-trip. There is no cancellation; a call sleeps for
    /// the full duration.
    pub latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        StoreConfig {
            seed: vec![Credential::fixture()],
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

pub struct SessionStore<S> {
    /// Keyed by email, so the signup uniqueness check and the insert
    /// are a single map operation.
    users: BTreeMap<String, Credential>,
    next_id: usize,
    current: Option<User>,
    storage: S,
    latency: Duration,
}

impl<S: Storage> SessionStore<S> {
    /// Build a store, restoring any persisted session. Malformed
    /// persisted data is discarded and treated as "no session".
    pub fn new(mut storage: S, config: StoreConfig) -> SessionStore<S> {
        let current = match storage.get(USER_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::info!("restored session for '{}'", user.email);
                    Some(user)
                }
                Err(e) => {
                    log::warn!("discarding malformed stored session: '{}'", e);
                    storage.remove(USER_STORAGE_KEY);
                    None
                }
            },
            None => None,
        };

        let mut users = BTreeMap::new();
        for credential in config.seed {
            users.insert(credential.email.clone(), credential);
        }
        let next_id = users.len() + 1;

        SessionStore {
            users,
            next_id,
            current,
            storage,
            latency: config.latency,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Number of credentials in the seed list.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Authenticate against the seed list. On a mismatch the existing
    /// session, if any, is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        self.simulate_latency();
        let user = self
            .users
            .get(email)
            .filter(|c| c.password == password)
            .map(Credential::to_user)
            .ok_or(AuthError::InvalidCredentials)?;
        self.persist(&user)?;
        log::info!("logged in as '{}'", user.email);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Register a new credential and sign it in. Identifiers are
    /// assigned sequentially and never reused, so every signup is
    /// unique among all prior records even across logouts.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        self.simulate_latency();
        let credential = Credential::new(self.next_id.to_string(), name, email, password);
        let user = match self.users.entry(email.to_string()) {
            Entry::Occupied(_) => return Err(AuthError::EmailInUse),
            Entry::Vacant(slot) => slot.insert(credential).to_user(),
        };
        self.next_id += 1;
        self.persist(&user)?;
        log::info!("signed up '{}'", user.email);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the session from memory and storage. Idempotent; storage
    /// removal cannot fail.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            log::info!("logged out '{}'", user.email);
        }
        self.storage.remove(USER_STORAGE_KEY);
    }

    fn persist(&mut self, user: &User) -> io::Result<()> {
        let raw = serde_json::to_string(user).map_err(io::Error::from)?;
        self.storage.set(USER_STORAGE_KEY, &raw)
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}
