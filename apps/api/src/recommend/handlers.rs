use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::recommend::models::{RecommendRequest, RecommendResponse};
use crate::state::AppState;

/// POST /api/v1/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    req.validate()?;

    let rec = state.engine.recommend(&req.interest, &req.skills)?;
    Ok(Json(RecommendResponse {
        career: rec.career,
        score: rec.score,
        index: rec.index,
    }))
}
