use axum::extract::State;
use axum::Json;
use pulling_core::datasheet::Datasheet;

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/program: datasheet JSON in, work program out.
///
/// The body is parsed here rather than through the `Json` extractor so that a
/// malformed datasheet is reported as a validation failure (400).
pub async fn generate(
    State(app): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config.clone();
    let program = tokio::task::spawn_blocking(move || {
        let sheet = Datasheet::from_json(&body)?;
        pulling_core::generate_program(&sheet, &config.vocabulary)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "program": program })))
}

/// POST /api/modules: which modules a datasheet activates.
pub async fn modules(
    State(app): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config.clone();
    let activations = tokio::task::spawn_blocking(move || {
        let sheet = Datasheet::from_json(&body)?;
        Ok::<_, pulling_core::PullingError>(pulling_core::active_modules(
            &sheet,
            &config.vocabulary,
        ))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "modules": activations })))
}
