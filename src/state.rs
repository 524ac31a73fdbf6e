use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auth::IdentityProvider;
use crate::session::Sessions;
use crate::store::GoalStore;

#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<dyn GoalStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: Arc<Mutex<Sessions>>,
}

impl AppState {
    pub fn new(goals: Arc<dyn GoalStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            goals,
            identity,
            sessions: Arc::new(Mutex::new(Sessions::default())),
        }
    }
}
