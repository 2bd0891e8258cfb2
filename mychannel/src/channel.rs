// mychannel/src/channel.rs
// canal de entrega entre hilos: envio sin bloqueo, recepcion bloqueante

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Buffer compartido sin límite de capacidad.
///
/// La entrega es del valor más reciente primero (extracción por el
/// final de la cola): los consumidores sincronizan sobre el estado
/// actual y no sobre el historial, así que el valor más fresco es el
/// que se entrega primero. Los valores viejos quedan en la cola para
/// los siguientes receptores.
pub struct HandoffChannel<T> {
    buffer: Mutex<VecDeque<T>>,
    ready: Condvar,
}

impl<T> HandoffChannel<T> {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        }
    }

    /// Agrega un valor y despierta a lo sumo un consumidor.
    ///
    /// Nunca bloquea: el buffer no tiene límite.
    pub fn send(&self, value: T) {
        let mut buffer = self.buffer.lock().unwrap();
        buffer.push_back(value);
        drop(buffer);
        self.ready.notify_one();
    }

    /// Espera hasta que haya un valor disponible y lo extrae.
    ///
    /// El predicado se reevalúa en cada despertar: un despertar espurio
    /// con el buffer vacío vuelve a dormir. Cada despertar exitoso
    /// extrae exactamente un elemento.
    pub fn recv(&self) -> T {
        let buffer = self.buffer.lock().unwrap();
        let mut buffer = self.ready.wait_while(buffer, |b| b.is_empty()).unwrap();
        buffer.pop_back().expect("buffer vacio tras la espera")
    }

    /// Variante sin bloqueo: extrae el valor más reciente si existe.
    pub fn try_recv(&self) -> Option<T> {
        self.buffer.lock().unwrap().pop_back()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().unwrap().is_empty()
    }
}

impl<T> Default for HandoffChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}
