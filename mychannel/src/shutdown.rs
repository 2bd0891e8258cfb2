// mychannel/src/shutdown.rs
// senal de apagado de un solo disparo con espera temporizada

use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Bandera de terminación para trabajadores de fondo.
///
/// La espera temporizada sirve como sueño interrumpible: el trabajador
/// duerme su ciclo completo y despierta de inmediato si alguien dispara
/// la señal, sin sondeos intermedios.
pub struct ShutdownSignal {
    fired: Mutex<bool>,
    cond: Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            fired: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Dispara la señal y despierta a todos los que esperan.
    ///
    /// Disparar más de una vez no tiene efecto adicional.
    pub fn fire(&self) {
        let mut fired = self.fired.lock().unwrap();
        *fired = true;
        drop(fired);
        self.cond.notify_all();
    }

    pub fn is_fired(&self) -> bool {
        *self.fired.lock().unwrap()
    }

    /// Duerme hasta que la señal se dispare o venza el plazo, lo que
    /// ocurra primero. Devuelve true si la señal se disparó.
    ///
    /// Los despertares espurios se reabsorben dentro de la espera.
    pub fn wait_timeout(&self, dur: Duration) -> bool {
        let fired = self.fired.lock().unwrap();
        let (fired, _timeout) = self
            .cond
            .wait_timeout_while(fired, dur, |f| !*f)
            .unwrap();
        *fired
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unfired() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_fired());
    }

    #[test]
    fn test_fire_is_sticky() {
        let signal = ShutdownSignal::new();
        signal.fire();
        signal.fire();
        assert!(signal.is_fired());

        // con la senal ya disparada la espera retorna de inmediato
        assert!(signal.wait_timeout(Duration::from_secs(10)));
    }
}
