use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, LogDetalle};
use crate::state::SharedState;

const EXPORT_LIMIT: i64 = 500;

#[derive(Deserialize)]
pub struct ListParams {
    pub limite: Option<i64>,
}

#[derive(Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

pub async fn list(
    auth: CurrentUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<LogDetalle>>, AppError> {
    auth.require_staff()?;

    let limite = params.limite.unwrap_or(EXPORT_LIMIT).clamp(1, EXPORT_LIMIT);
    let logs = db::audit::list(&state.pool, limite).await?;
    Ok(Json(logs))
}

/// Download the newest 500 log entries. The download itself leaves an
/// EXPORT entry behind, so pulling the log is also on the log.
pub async fn export(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_admin()?;

    let logs = db::audit::list(&state.pool, EXPORT_LIMIT).await?;

    let format = params.format.as_deref().unwrap_or("csv");

    audit::log_event(
        &state.pool,
        auth.user_id,
        AccionLog::Export,
        "log_actividades",
        None,
        Some(&format!(
            "Exportación de logs a {}",
            format.to_uppercase()
        )),
        Some(ip.as_str()),
    )
    .await;

    match format {
        "json" => Ok(Json(logs).into_response()),
        _ => {
            let csv = export_csv(&logs);
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"logs.csv\"",
                    ),
                ],
                csv,
            )
                .into_response())
        }
    }
}

fn export_csv(logs: &[LogDetalle]) -> String {
    use std::fmt::Write;
    let mut csv = String::new();

    let _ = writeln!(csv, "id,fecha_hora,username,accion,tabla_afectada,detalles,ip_address");

    for log in logs {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            log.id,
            log.fecha_hora.to_rfc3339(),
            csv_escape(&log.username),
            log.accion.as_str(),
            csv_escape(&log.tabla_afectada),
            csv_escape(log.detalles.as_deref().unwrap_or("-")),
            csv_escape(log.ip_address.as_deref().unwrap_or("-")),
        );
    }

    csv
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
