//! Completion logic for goals. The predicate is the same for every tracking
//! mode because Binary and Percentage targets are fixed at creation; the
//! interesting part is reporting the before/after edge so the UI can fire
//! its celebration exactly once.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Goal, TrackingMode};

/// What a progress write did to the completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Flag did not move (incomplete stays incomplete, done stays done).
    Unchanged,
    /// Crossed the target: the one-shot celebration edge.
    Completed,
    /// Dropped back below the target.
    Reopened,
}

#[derive(Debug, Clone)]
pub struct ProgressOutcome {
    pub goal: Goal,
    pub transition: Transition,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("numeric goals need a target value")]
    Missing,
    #[error("target must be a positive number")]
    NotPositive,
}

pub fn compute_completion(current: f64, target: f64) -> bool {
    current >= target
}

/// Returns a copy of `goal` with the new value and a freshly recomputed
/// completion flag. The two fields are never updated separately; callers
/// persist the returned record as one write.
///
/// Any finite value is accepted, including negative and over-target numbers.
/// That permissiveness is deliberate: targets bound completion, not input.
pub fn apply_update(goal: &Goal, new_value: f64) -> ProgressOutcome {
    let was_completed = goal.completed;
    let mut updated = goal.clone();
    updated.current = new_value;
    updated.completed = compute_completion(new_value, updated.target);

    let transition = match (was_completed, updated.completed) {
        (false, true) => Transition::Completed,
        (true, false) => Transition::Reopened,
        _ => Transition::Unchanged,
    };

    ProgressOutcome {
        goal: updated,
        transition,
    }
}

/// Binary goals have no numeric input; completion is a single action that
/// jumps straight to the target.
pub fn mark_binary_complete(goal: &Goal) -> ProgressOutcome {
    apply_update(goal, goal.target)
}

/// Display fraction in [0, 1]. A non-positive target cannot occur for a
/// stored goal, but a bad record reads as fully complete instead of
/// dividing by zero.
pub fn progress_fraction(goal: &Goal) -> f64 {
    if goal.target <= 0.0 {
        return 1.0;
    }
    (goal.current / goal.target).clamp(0.0, 1.0)
}

/// Fixes the target at creation time. Binary and Percentage ignore any
/// requested value; Numeric requires a finite positive one.
pub fn fixed_target(mode: TrackingMode, requested: Option<f64>) -> Result<f64, TargetError> {
    match mode {
        TrackingMode::Binary => Ok(1.0),
        TrackingMode::Percentage => Ok(100.0),
        TrackingMode::Numeric => match requested {
            None => Err(TargetError::Missing),
            Some(value) if value.is_finite() && value > 0.0 => Ok(value),
            Some(_) => Err(TargetError::NotPositive),
        },
    }
}
