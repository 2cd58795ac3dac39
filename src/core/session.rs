//! Simulated sign-in.
//!
//! There is no real authentication. Signing in only validates the shape of the
//! credentials and remembers the email with a timestamp, independently of the cart.

use crate::core::error::{NexbuyError, Result};
use crate::core::store::{KeyValueStore, SESSION_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    #[serde(rename = "loggedAt", with = "chrono::serde::ts_milliseconds")]
    pub logged_at: DateTime<Utc>,
}

impl UserSession {
    /// The part of the email before `@`, used for greetings.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

pub struct SessionManager<S: KeyValueStore> {
    store: S,
    current: Option<UserSession>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Restore the session. Anything unreadable counts as signed out.
    pub fn open(store: S) -> Self {
        let current = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Option<UserSession>>(&raw) {
                Ok(session) => session,
                Err(e) => {
                    log::warn!("Ignoring malformed session data: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Session load failed (treating as signed out): {e}");
                None
            }
        };

        Self { store, current }
    }

    pub fn current(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&UserSession> {
        let email = email.trim();
        if email.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            return Err(NexbuyError::InvalidCredentials);
        }

        let session = UserSession {
            email: email.to_string(),
            logged_at: Utc::now(),
        };
        self.save(Some(&session))?;
        log::info!("Signed in as {}", session.email);

        Ok(&*self.current.insert(session))
    }

    pub fn sign_out(&mut self) -> Result<Option<UserSession>> {
        self.save(None)?;
        Ok(self.current.take())
    }

    fn save(&mut self, session: Option<&UserSession>) -> Result<()> {
        let json = serde_json::to_string(&session)?;
        self.store.set(SESSION_KEY, &json)
    }
}
