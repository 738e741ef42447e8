use axum::extract::State;
use axum::Json;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::models::Estadisticas;
use crate::state::SharedState;

pub async fn resumen(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Estadisticas>, AppError> {
    let stats = db::estadisticas::resumen(&state.pool).await?;
    Ok(Json(stats))
}
