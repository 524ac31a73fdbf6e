//! Goal store gateway. Handlers only ever see the traits; the file-backed
//! implementation below stands in for the hosted store and keeps owner
//! scoping on the server side of the boundary.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::{self, AuthError, IdentityProvider};
use crate::models::{Account, AppData, Category, Goal, TrackingMode};
use crate::progress::{self, ProgressOutcome};
use crate::storage;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Also covers goals that exist but belong to someone else; scoping
    /// hides their existence.
    #[error("goal not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub owner_id: Uuid,
    pub title: String,
    pub category: Option<Category>,
    pub mode: TrackingMode,
    /// Must already be fixed via `progress::fixed_target`.
    pub target: f64,
}

#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn create(&self, new_goal: NewGoal) -> Result<Goal, StoreError>;
    /// Goals for one owner, oldest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Goal>, StoreError>;
    async fn get(&self, owner_id: Uuid, goal_id: Uuid) -> Result<Goal, StoreError>;
    /// Writes `current` and the recomputed completion flag as one update.
    async fn update_progress(
        &self,
        owner_id: Uuid,
        goal_id: Uuid,
        value: f64,
    ) -> Result<ProgressOutcome, StoreError>;
    async fn delete(&self, owner_id: Uuid, goal_id: Uuid) -> Result<(), StoreError>;
}

/// JSON-file store. One mutex guards the data; every mutation is staged on
/// a copy, flushed to disk, and only then made visible, so a failed write
/// leaves nothing half-applied and a completed flush is immediately
/// readable (read-your-own-write).
pub struct FileStore {
    path: PathBuf,
    data: Arc<Mutex<AppData>>,
}

impl FileStore {
    pub fn new(path: PathBuf, data: AppData) -> Self {
        Self {
            path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    async fn commit<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut AppData) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut data = self.data.lock().await;
        let mut staged = data.clone();
        let out = mutate(&mut staged)?;
        storage::persist_data(&self.path, &staged)
            .await
            .map_err(|err| E::from(StoreError::Unavailable(err.to_string())))?;
        *data = staged;
        Ok(out)
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AuthError::InvalidCredentials,
            StoreError::Unavailable(msg) => AuthError::ServiceUnavailable(msg),
        }
    }
}

#[async_trait]
impl GoalStore for FileStore {
    async fn create(&self, new_goal: NewGoal) -> Result<Goal, StoreError> {
        let goal = Goal {
            id: Uuid::new_v4(),
            owner_id: new_goal.owner_id,
            title: new_goal.title,
            category: new_goal.category,
            mode: new_goal.mode,
            current: 0.0,
            target: new_goal.target,
            completed: false,
            created_at: Utc::now(),
        };

        let stored = goal.clone();
        self.commit(move |data| -> Result<(), StoreError> {
            data.goals.push(stored);
            Ok(())
        })
        .await?;
        Ok(goal)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Goal>, StoreError> {
        let data = self.data.lock().await;
        let mut goals: Vec<Goal> = data
            .goals
            .iter()
            .filter(|goal| goal.owner_id == owner_id)
            .cloned()
            .collect();
        goals.sort_by_key(|goal| goal.created_at);
        Ok(goals)
    }

    async fn get(&self, owner_id: Uuid, goal_id: Uuid) -> Result<Goal, StoreError> {
        let data = self.data.lock().await;
        data.goals
            .iter()
            .find(|goal| goal.id == goal_id && goal.owner_id == owner_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_progress(
        &self,
        owner_id: Uuid,
        goal_id: Uuid,
        value: f64,
    ) -> Result<ProgressOutcome, StoreError> {
        self.commit(move |data| {
            let goal = data
                .goals
                .iter_mut()
                .find(|goal| goal.id == goal_id && goal.owner_id == owner_id)
                .ok_or(StoreError::NotFound)?;

            let outcome = progress::apply_update(goal, value);
            *goal = outcome.goal.clone();
            Ok(outcome)
        })
        .await
    }

    async fn delete(&self, owner_id: Uuid, goal_id: Uuid) -> Result<(), StoreError> {
        self.commit(move |data| {
            let before = data.goals.len();
            data.goals
                .retain(|goal| !(goal.id == goal_id && goal.owner_id == owner_id));
            if data.goals.len() == before {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl IdentityProvider for FileStore {
    async fn sign_up(&self, login: &str, password: &str) -> Result<Account, AuthError> {
        auth::check_password_strength(password)?;

        let login = login.to_string();
        let salt = Uuid::new_v4().to_string();
        let account = Account {
            id: Uuid::new_v4(),
            login: login.clone(),
            email: None,
            password_digest: auth::digest_password(&salt, password),
            salt,
        };

        let stored = account.clone();
        self.commit(move |data| {
            if data.accounts.iter().any(|existing| existing.login == login) {
                return Err(AuthError::DuplicateIdentifier);
            }
            data.accounts.push(stored);
            Ok(())
        })
        .await?;
        Ok(account)
    }

    async fn sign_in(&self, login: &str, password: &str) -> Result<Account, AuthError> {
        let data = self.data.lock().await;
        let account = data
            .accounts
            .iter()
            .find(|account| account.login == login)
            .ok_or(AuthError::InvalidCredentials)?;

        if auth::digest_password(&account.salt, password) != account.password_digest {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(account.clone())
    }

    async fn update_password(
        &self,
        account_id: Uuid,
        new_password: &str,
    ) -> Result<(), AuthError> {
        auth::check_password_strength(new_password)?;

        let salt = Uuid::new_v4().to_string();
        let digest = auth::digest_password(&salt, new_password);
        self.commit(move |data| {
            let account = data
                .accounts
                .iter_mut()
                .find(|account| account.id == account_id)
                .ok_or(AuthError::InvalidCredentials)?;
            account.salt = salt;
            account.password_digest = digest;
            Ok(())
        })
        .await
    }

    async fn update_email(&self, account_id: Uuid, email: &str) -> Result<(), AuthError> {
        let email = email.to_string();
        self.commit(move |data| {
            let account = data
                .accounts
                .iter_mut()
                .find(|account| account.id == account_id)
                .ok_or(AuthError::InvalidCredentials)?;
            account.email = Some(email);
            Ok(())
        })
        .await
    }
}
