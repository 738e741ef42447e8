pub mod asistencias;
pub mod auth;
pub mod clases;
pub mod estadisticas;
pub mod logs;
pub mod membresias;
pub mod miembros;
pub mod pagos;
pub mod planes;
pub mod usuarios;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        // Miembros
        .route(
            "/api/v1/miembros",
            get(miembros::list).post(miembros::create),
        )
        .route(
            "/api/v1/miembros/{id}",
            get(miembros::get)
                .put(miembros::update)
                .delete(miembros::delete),
        )
        .route("/api/v1/miembros/{id}/pagos", get(miembros::pagos))
        // Planes
        .route("/api/v1/planes", get(planes::list).post(planes::create))
        // Membresías
        .route(
            "/api/v1/membresias",
            get(membresias::list_activas).post(membresias::asignar),
        )
        // Asistencias
        .route(
            "/api/v1/asistencias",
            get(asistencias::list).post(asistencias::registrar),
        )
        .route("/api/v1/asistencias/hoy", get(asistencias::hoy))
        // Clases
        .route("/api/v1/clases", get(clases::list).post(clases::create))
        .route(
            "/api/v1/clases/{id}",
            get(clases::get)
                .put(clases::update)
                .delete(clases::deactivate),
        )
        .route(
            "/api/v1/clases/{id}/inscripciones",
            get(clases::inscripciones),
        )
        .route("/api/v1/clases/inscribir", post(clases::inscribir))
        // Pagos
        .route("/api/v1/pagos", get(pagos::list).post(pagos::registrar))
        .route("/api/v1/pagos/ingresos", get(pagos::ingresos))
        // Usuarios del sistema
        .route(
            "/api/v1/usuarios",
            get(usuarios::list).post(usuarios::create),
        )
        // Estadísticas
        .route("/api/v1/estadisticas", get(estadisticas::resumen))
        // Log de actividades
        .route("/api/v1/logs", get(logs::list))
        .route("/api/v1/logs/export", get(logs::export))
}
