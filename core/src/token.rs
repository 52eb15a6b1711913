use crate::utils::Redact;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

/// AccessToken holds the bearer credential attached to every call.
///
/// Clones share the same slot: hand a clone to the refresh task and keep
/// issuing requests with the client, every call picks up the value that was
/// set last. Reads and writes are serialized, so `get` never observes a
/// half-written token.
///
/// The holder performs no validation; the invocation pipeline rejects an
/// empty token before any network I/O.
#[derive(Clone, Default)]
pub struct AccessToken {
    inner: Arc<RwLock<String>>,
}

impl AccessToken {
    /// Create a new holder with the initial token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Get the current token.
    pub fn get(&self) -> String {
        // Poisoning never leaves a partially assigned string behind.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current token.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Check whether no token has been set yet.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = self.get();
        f.debug_tuple("AccessToken")
            .field(&Redact::from(&token))
            .finish()
    }
}
