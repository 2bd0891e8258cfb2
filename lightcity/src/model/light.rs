// lightcity/src/model/light.rs
// semaforo autonomo: un hilo de fondo alterna el color con un periodo
// aleatorio fijo y publica cada transicion en el canal de entrega

use crate::config::CycleRange;
use crate::error::LightError;
use crate::lc_log;
use crate::model::{Phase, PhaseCell};
use mychannel::{HandoffChannel, ShutdownSignal};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Estado compartido entre la entidad y su hilo de fondo.
struct LightCore {
    phase: PhaseCell,
    events: HandoffChannel<Phase>,
    shutdown: ShutdownSignal,
}

/// Semáforo con dos colores que alterna solo.
///
/// La entidad es dueña del hilo de fondo: guarda su JoinHandle y lo
/// reclama en stop(). Se comparte entre hilos con Arc; todas las
/// operaciones trabajan sobre &self.
pub struct TrafficLight {
    id: u32,
    cycle_range: CycleRange,
    core: Arc<LightCore>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl TrafficLight {
    /// Crea un semáforo en rojo, sin hilo de fondo todavía.
    pub fn new(id: u32) -> Self {
        Self::with_cycle_range(id, CycleRange::default())
    }

    pub fn with_cycle_range(id: u32, cycle_range: CycleRange) -> Self {
        Self {
            id,
            cycle_range,
            core: Arc::new(LightCore {
                phase: PhaseCell::new(Phase::Red),
                events: HandoffChannel::new(),
                shutdown: ShutdownSignal::new(),
            }),
            worker: Mutex::new(None),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Lectura instantánea del color actual. Nunca bloquea.
    pub fn current_phase(&self) -> Phase {
        self.core.phase.load()
    }

    /// Arranca el hilo de fondo que alterna el color.
    ///
    /// Llamarlo de nuevo sobre un semáforo ya arrancado falla con
    /// AlreadyRunning: un segundo hilo competiría con el primero y
    /// rompería el periodo.
    pub fn simulate(&self) -> Result<(), LightError> {
        let mut worker = self.worker.lock().unwrap();
        if worker.is_some() {
            return Err(LightError::AlreadyRunning);
        }

        let core = Arc::clone(&self.core);
        let id = self.id;
        let cycle_range = self.cycle_range;
        let handle = thread::Builder::new()
            .name(format!("Semaforo-{}", id))
            .spawn(move || cycle_loop(id, cycle_range, &core))?;

        *worker = Some(handle);
        Ok(())
    }

    /// Bloquea al que llama hasta la próxima transición a verde.
    ///
    /// Cada valor publicado llega a exactamente un consumidor: con
    /// varios hilos esperando a la vez, cada transición despierta a
    /// uno solo y los demás siguen esperando la suya. Mientras el
    /// semáforo corre, todo el que espere termina recibiendo un verde.
    pub fn wait_for_green(&self) {
        loop {
            if self.core.events.recv() == Phase::Green {
                return;
            }
        }
    }

    /// Dispara el apagado y espera a que el hilo de fondo termine.
    ///
    /// Idempotente. Un semáforo detenido no se puede rearrancar.
    pub fn stop(&self) {
        self.core.shutdown.fire();
        if let Some(handle) = self.worker.lock().unwrap().take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cuerpo del hilo de fondo.
///
/// El periodo se sortea una sola vez y gobierna todos los cambios de
/// esta instancia. La espera temporizada sobre la señal de apagado
/// reemplaza cualquier sondeo: dura un ciclo completo y termina antes
/// solo si alguien llamó stop().
fn cycle_loop(id: u32, cycle_range: CycleRange, core: &LightCore) {
    let cycle = cycle_range.draw();
    lc_log!("🚦 [Semaforo-{}] periodo sorteado: {:?}", id, cycle);

    loop {
        if core.shutdown.wait_timeout(cycle) {
            lc_log!("🛑 [Semaforo-{}] apagado", id);
            return;
        }

        let next = core.phase.load().toggled();
        core.phase.store(next);
        core.events.send(next);
        lc_log!("🚦 [Semaforo-{}] cambió a {:?}", id, next);
    }
}
