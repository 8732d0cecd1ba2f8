//! REST endpoint handlers organized by resource.

pub mod system;
pub mod weather;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(system::routes()).merge(weather::routes())
}
