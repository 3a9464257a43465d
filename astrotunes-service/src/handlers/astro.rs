use axum::Json;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::dtos::{ChartRequest, ChartResponse};
use crate::services::{compose_from_chart, record_composition};

#[tracing::instrument(skip(request), fields(planets = request.output.len()))]
pub async fn generate_from_chart(
    ValidatedJson(request): ValidatedJson<ChartRequest>,
) -> Result<Json<ChartResponse>, AppError> {
    let music = compose_from_chart(&request.output).map_err(|e| {
        record_composition("astro", "error");
        AppError::InternalError(
            anyhow::Error::new(e).context("Failed to process astrological data"),
        )
    })?;

    record_composition("astro", "success");
    tracing::info!(
        key = %music.key,
        mode = %music.mode,
        tempo = music.tempo,
        "Chart music generated"
    );

    Ok(Json(ChartResponse {
        success: true,
        music,
    }))
}
