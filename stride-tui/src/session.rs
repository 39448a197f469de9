//! Sign-in state from the external identity provider.
//!
//! Authentication itself is out of scope: an external provider owns the
//! session and this module only models the boolean signed-in signal. The
//! planner observes it through a subscription backed by a watch channel;
//! dropping the subscription releases it.

use tokio::sync::watch;

/// Source of the signed-in signal.
pub trait IdentityProvider {
    fn subscribe(&self) -> AuthSubscription;
}

/// Live view of the signed-in state. Dropping it unsubscribes.
#[derive(Debug, Clone)]
pub struct AuthSubscription {
    rx: watch::Receiver<bool>,
}

impl AuthSubscription {
    pub fn is_authenticated(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the next state change. Returns the new value, or `None`
    /// once the provider is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        match self.rx.changed().await {
            Ok(()) => Some(*self.rx.borrow()),
            Err(_) => None,
        }
    }
}

/// Identity provider backed by the presence of a session token.
///
/// A real deployment would wire the provider's own change notifications
/// into [`TokenIdentity::set_signed_in`]; the subscription contract is the
/// same either way.
#[derive(Debug)]
pub struct TokenIdentity {
    tx: watch::Sender<bool>,
}

impl TokenIdentity {
    pub fn new(signed_in: bool) -> Self {
        let (tx, _rx) = watch::channel(signed_in);
        Self { tx }
    }

    pub fn from_session_token(token: Option<&str>) -> Self {
        Self::new(token.is_some_and(|t| !t.trim().is_empty()))
    }

    /// Push a sign-in/sign-out transition to all subscribers.
    pub fn set_signed_in(&self, signed_in: bool) {
        // send_replace never fails; it works even with zero subscribers.
        self.tx.send_replace(signed_in);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl IdentityProvider for TokenIdentity {
    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            rx: self.tx.subscribe(),
        }
    }
}
