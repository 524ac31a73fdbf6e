use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progress::Transition;

/// How progress against a goal is interpreted. Binary and Percentage are
/// Numeric with a fixed target (1 and 100), so the completion check is the
/// same comparison for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingMode {
    Binary,
    Numeric,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Health,
    Finance,
    Learning,
    Personal,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub category: Option<Category>,
    pub mode: TrackingMode,
    pub current: f64,
    /// Always > 0. Fixed at creation: 1 for Binary, 100 for Percentage,
    /// user-supplied for Numeric.
    pub target: f64,
    /// Denormalized `current >= target`, rewritten together with `current`
    /// on every update.
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Account record kept by the identity provider. The password is stored only
/// as a salted digest; nothing outside `auth` looks at those fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub login: String,
    pub email: Option<String>,
    pub password_digest: String,
    pub salt: String,
}

/// Everything that goes into the JSON state file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub accounts: Vec<Account>,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub account_id: Uuid,
    pub handle: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account_id: Uuid,
    pub handle: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub category: Option<Category>,
    pub mode: TrackingMode,
    /// Only read for Numeric goals; Binary and Percentage targets are fixed.
    pub target: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    pub id: Uuid,
    pub title: String,
    pub category: Option<Category>,
    pub mode: TrackingMode,
    pub current: f64,
    pub target: f64,
    pub completed: bool,
    pub fraction: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalView>,
    pub done: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct GoalUpdateResponse {
    pub goal: GoalView,
    pub transition: Transition,
}
