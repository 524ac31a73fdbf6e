use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Html,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::errors::AppError;
use crate::models::{
    CreateGoalRequest, EmailRequest, Goal, GoalListResponse, GoalUpdateResponse, GoalView,
    LoginRequest, LoginResponse, PasswordRequest, ProgressRequest, SignUpRequest, SignUpResponse,
    TrackingMode,
};
use crate::progress;
use crate::session::SessionIdentity;
use crate::state::AppState;
use crate::store::NewGoal;
use crate::ui;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), AppError> {
    let login = auth::to_login_identifier(&payload.username)?;
    let account = state.identity.sign_up(&login, &payload.password).await?;

    info!("registered account for {}", auth::to_display_handle(&account.login));
    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            account_id: account.id,
            handle: auth::to_display_handle(&account.login).to_string(),
        }),
    ))
}

pub async fn log_in(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let login = auth::to_login_identifier(&payload.username)?;
    let account = state.identity.sign_in(&login, &payload.password).await?;

    let token = state.sessions.lock().await.establish(SessionIdentity {
        account_id: account.id,
        login: account.login.clone(),
    });

    Ok(Json(LoginResponse {
        token,
        account_id: account.id,
        handle: auth::to_display_handle(&account.login).to_string(),
    }))
}

pub async fn log_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers).ok_or_else(|| AppError::unauthorized("not signed in"))?;
    state.sessions.lock().await.clear(token);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_goals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GoalListResponse>, AppError> {
    let identity = require_session(&state, &headers).await?;
    let goals = state.goals.list_by_owner(identity.account_id).await?;

    let done = goals.iter().filter(|goal| goal.completed).count();
    let total = goals.len();
    Ok(Json(GoalListResponse {
        goals: goals.iter().map(view).collect(),
        done,
        total,
    }))
}

pub async fn create_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<GoalView>), AppError> {
    let identity = require_session(&state, &headers).await?;

    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::unprocessable("title must not be empty"));
    }
    let target = progress::fixed_target(payload.mode, payload.target)?;

    let goal = state
        .goals
        .create(NewGoal {
            owner_id: identity.account_id,
            title,
            category: payload.category,
            mode: payload.mode,
            target,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(&goal))))
}

pub async fn update_progress(
    State(state): State<AppState>,
    Path(goal_id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<ProgressRequest>,
) -> Result<Json<GoalUpdateResponse>, AppError> {
    let identity = require_session(&state, &headers).await?;

    // JSON has no NaN literal, but overlong numbers parse to infinity.
    if !payload.value.is_finite() {
        return Err(AppError::unprocessable("value must be a finite number"));
    }

    let outcome = state
        .goals
        .update_progress(identity.account_id, goal_id, payload.value)
        .await?;

    Ok(Json(GoalUpdateResponse {
        goal: view(&outcome.goal),
        transition: outcome.transition,
    }))
}

pub async fn complete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<GoalUpdateResponse>, AppError> {
    let identity = require_session(&state, &headers).await?;

    let goal = state.goals.get(identity.account_id, goal_id).await?;
    if goal.mode != TrackingMode::Binary {
        return Err(AppError::unprocessable(
            "only binary goals can be completed in one step",
        ));
    }

    let outcome = state
        .goals
        .update_progress(identity.account_id, goal_id, goal.target)
        .await?;

    Ok(Json(GoalUpdateResponse {
        goal: view(&outcome.goal),
        transition: outcome.transition,
    }))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let identity = require_session(&state, &headers).await?;
    state.goals.delete(identity.account_id, goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PasswordRequest>,
) -> Result<StatusCode, AppError> {
    let identity = require_session(&state, &headers).await?;
    state
        .identity
        .update_password(identity.account_id, &payload.password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EmailRequest>,
) -> Result<StatusCode, AppError> {
    let identity = require_session(&state, &headers).await?;

    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::unprocessable("email must contain '@'"));
    }
    state.identity.update_email(identity.account_id, email).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<SessionIdentity, AppError> {
    let token = bearer_token(headers).ok_or_else(|| AppError::unauthorized("not signed in"))?;
    state
        .sessions
        .lock()
        .await
        .current(token)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("session expired, sign in again"))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn view(goal: &Goal) -> GoalView {
    GoalView {
        id: goal.id,
        title: goal.title.clone(),
        category: goal.category,
        mode: goal.mode,
        current: goal.current,
        target: goal.target,
        completed: goal.completed,
        fraction: progress::progress_fraction(goal),
        created_at: goal.created_at,
    }
}
