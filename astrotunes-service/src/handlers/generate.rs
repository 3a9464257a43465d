use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::dtos::{AstroInput, MusicOutput};
use crate::services::record_composition;
use crate::startup::AppState;

#[tracing::instrument(skip(state, input), fields(planets = input.planets.len()))]
pub async fn generate_music(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AstroInput>,
) -> Result<Json<MusicOutput>, AppError> {
    let music = state.composer.compose(&input).await.map_err(|e| {
        record_composition("generate", "error");
        tracing::error!(composer = state.composer.name(), error = %e, "Composition failed");
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    record_composition("generate", "success");
    tracing::info!(
        composer = state.composer.name(),
        key = %music.key,
        tempo = music.tempo,
        "Music generated"
    );

    Ok(Json(MusicOutput::success(music)))
}
