// errores fatales tipados del semaforo

use thiserror::Error;

/// Condiciones que el llamador debe poder distinguir en vez de
/// terminar el proceso sin diagnóstico.
#[derive(Debug, Error)]
pub enum LightError {
    /// simulate ya fue llamado sobre esta instancia
    #[error("el semaforo ya esta corriendo")]
    AlreadyRunning,

    /// fallo la creacion del hilo de fondo
    #[error("no se pudo crear el hilo del semaforo: {0}")]
    Spawn(#[from] std::io::Error),
}
