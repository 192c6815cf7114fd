use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, response::ApiResponse, state::AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    pub data: HealthData,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthBody),
        (status = 500, description = "Database unreachable"),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<ApiResponse<HealthBody>> {
    state.orm.ping().await?;

    let data = HealthData {
        status: "ok".to_string(),
    };

    Ok(ApiResponse::ok(HealthBody { data }).with_message("Health check"))
}
