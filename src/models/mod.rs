pub mod asistencia;
pub mod clase;
pub mod estadisticas;
pub mod log_actividad;
pub mod membresia;
pub mod miembro;
pub mod pago;
pub mod plan;
pub mod sesion;
pub mod usuario;

pub use asistencia::{Asistencia, AsistenciaDetalle};
pub use clase::{Clase, ClaseResumen, InscripcionClase, InscripcionDetalle};
pub use estadisticas::{Estadisticas, IngresosTotales};
pub use log_actividad::{AccionLog, LogActividad, LogDetalle};
pub use membresia::{Membresia, MembresiaDetalle};
pub use miembro::{Miembro, MiembroResumen};
pub use pago::{Pago, PagoDetalle};
pub use plan::Plan;
pub use sesion::SesionRefresco;
pub use usuario::{Rol, Usuario};
