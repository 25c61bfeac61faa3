use std::sync::Arc;

use crate::similarity::RecommendEngine;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The engine is fully built before the listener binds and immutable after
/// that, so cloning the state per request is an `Arc` bump, nothing more.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendEngine>,
}
