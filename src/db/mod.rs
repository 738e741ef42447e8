pub mod asistencias;
pub mod audit;
pub mod clases;
pub mod estadisticas;
pub mod membresias;
pub mod miembros;
pub mod pagos;
pub mod planes;
pub mod sesiones;
pub mod usuarios;
