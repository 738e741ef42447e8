use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Clase, ClaseResumen, InscripcionClase, InscripcionDetalle};

pub async fn list_activas(pool: &PgPool) -> Result<Vec<ClaseResumen>, sqlx::Error> {
    sqlx::query_as::<_, ClaseResumen>(
        "SELECT c.id, c.nombre, c.descripcion, c.instructor, c.duracion_minutos,
                c.cupo_maximo, c.horario, c.dias_semana, c.activo,
                COUNT(ic.id) AS inscritos
         FROM clases c
         LEFT JOIN inscripciones_clases ic ON ic.clase_id = c.id AND ic.estado = 'activa'
         WHERE c.activo
         GROUP BY c.id
         ORDER BY c.nombre",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Clase>, sqlx::Error> {
    sqlx::query_as::<_, Clase>("SELECT * FROM clases WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    nombre: &str,
    descripcion: Option<&str>,
    instructor: &str,
    duracion_minutos: i32,
    cupo_maximo: i32,
    horario: &str,
    dias_semana: &str,
) -> Result<Clase, sqlx::Error> {
    sqlx::query_as::<_, Clase>(
        "INSERT INTO clases (nombre, descripcion, instructor, duracion_minutos, cupo_maximo, horario, dias_semana)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(nombre)
    .bind(descripcion)
    .bind(instructor)
    .bind(duracion_minutos)
    .bind(cupo_maximo)
    .bind(horario)
    .bind(dias_semana)
    .fetch_one(executor)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    nombre: &str,
    descripcion: Option<&str>,
    instructor: &str,
    duracion_minutos: i32,
    cupo_maximo: i32,
    horario: &str,
    dias_semana: &str,
) -> Result<Option<Clase>, sqlx::Error> {
    sqlx::query_as::<_, Clase>(
        "UPDATE clases
         SET nombre = $2, descripcion = $3, instructor = $4, duracion_minutos = $5,
             cupo_maximo = $6, horario = $7, dias_semana = $8
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(nombre)
    .bind(descripcion)
    .bind(instructor)
    .bind(duracion_minutos)
    .bind(cupo_maximo)
    .bind(horario)
    .bind(dias_semana)
    .fetch_optional(executor)
    .await
}

/// Soft delete: the class stops listing but enrollments stay on record.
pub async fn deactivate<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
) -> Result<Option<Clase>, sqlx::Error> {
    sqlx::query_as::<_, Clase>("UPDATE clases SET activo = FALSE WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn enroll<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    miembro_id: Uuid,
    clase_id: Uuid,
) -> Result<InscripcionClase, sqlx::Error> {
    sqlx::query_as::<_, InscripcionClase>(
        "INSERT INTO inscripciones_clases (miembro_id, clase_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(miembro_id)
    .bind(clase_id)
    .fetch_one(executor)
    .await
}

pub async fn list_inscripciones(
    pool: &PgPool,
    clase_id: Uuid,
) -> Result<Vec<InscripcionDetalle>, sqlx::Error> {
    sqlx::query_as::<_, InscripcionDetalle>(
        "SELECT ic.id, ic.miembro_id, ic.clase_id, ic.estado, ic.fecha_inscripcion,
                m.nombre, m.apellido
         FROM inscripciones_clases ic
         JOIN miembros m ON m.id = ic.miembro_id
         WHERE ic.clase_id = $1 AND ic.estado = 'activa'
         ORDER BY ic.fecha_inscripcion",
    )
    .bind(clase_id)
    .fetch_all(pool)
    .await
}
