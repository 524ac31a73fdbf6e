//! In-process session table. Tokens live only as long as the process;
//! every new server session starts with a fresh login.

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub account_id: Uuid,
    pub login: String,
}

#[derive(Debug, Default)]
pub struct Sessions {
    active: HashMap<String, SessionIdentity>,
}

impl Sessions {
    /// Registers an authenticated identity and hands back its bearer token.
    pub fn establish(&mut self, identity: SessionIdentity) -> String {
        let token = Uuid::new_v4().to_string();
        self.active.insert(token.clone(), identity);
        token
    }

    pub fn current(&self, token: &str) -> Option<&SessionIdentity> {
        self.active.get(token)
    }

    pub fn clear(&mut self, token: &str) {
        self.active.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            account_id: Uuid::new_v4(),
            login: "alice@goals.local".to_string(),
        }
    }

    #[test]
    fn establish_then_current_returns_the_identity() {
        let mut sessions = Sessions::default();
        let id = identity();
        let token = sessions.establish(id.clone());
        assert_eq!(sessions.current(&token), Some(&id));
    }

    #[test]
    fn unknown_token_has_no_identity() {
        let sessions = Sessions::default();
        assert_eq!(sessions.current("nope"), None);
    }

    #[test]
    fn clear_drops_only_that_session() {
        let mut sessions = Sessions::default();
        let first = sessions.establish(identity());
        let second = sessions.establish(identity());

        sessions.clear(&first);
        assert_eq!(sessions.current(&first), None);
        assert!(sessions.current(&second).is_some());
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let mut sessions = Sessions::default();
        let id = identity();
        let a = sessions.establish(id.clone());
        let b = sessions.establish(id);
        assert_ne!(a, b);
    }
}
