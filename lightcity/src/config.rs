use crate::lc_log;
use crate::model::TrafficLight;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Límites del periodo de alternancia, en milisegundos.
#[derive(Debug, Clone, Copy)]
pub struct CycleRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for CycleRange {
    fn default() -> Self {
        Self {
            min_ms: 4000,
            max_ms: 6000,
        }
    }
}

impl CycleRange {
    /// Sortea un periodo uniforme dentro de los límites (inclusivos).
    pub fn draw(&self) -> Duration {
        let mut rng = rand::rng();
        Duration::from_millis(rng.random_range(self.min_ms..=self.max_ms))
    }
}

/// Configuración de la simulación de demostración
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub lights: u32,
    pub cycle: CycleRange,
    pub steps: u32,
    pub step_ms: u64,
    pub car_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lights: 4,
            cycle: CycleRange::default(),
            steps: 60,
            step_ms: 500,
            car_rate: 0.3,
        }
    }
}

/// Crea los semáforos del cruce según la configuración
pub fn create_crossing(config: &SimConfig) -> Vec<Arc<TrafficLight>> {
    lc_log!("\n╔════════════════════════════════════════════════════════════╗");
    lc_log!("║              Creando el cruce                              ║");
    lc_log!("╚════════════════════════════════════════════════════════════╝");

    let mut lights = Vec::with_capacity(config.lights as usize);
    for id in 1..=config.lights {
        lights.push(Arc::new(TrafficLight::with_cycle_range(id, config.cycle)));
        lc_log!(
            "🚦 Semaforo {}: periodo entre {}ms y {}ms",
            id,
            config.cycle.min_ms,
            config.cycle.max_ms
        );
    }

    lc_log!("\n✅ Cruce configurado con {} semaforos\n", lights.len());
    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let range = CycleRange::default();
        assert_eq!(range.min_ms, 4000);
        assert_eq!(range.max_ms, 6000);
    }

    #[test]
    fn test_draw_stays_within_bounds() {
        let range = CycleRange {
            min_ms: 100,
            max_ms: 300,
        };
        for _ in 0..500 {
            let d = range.draw();
            assert!(d >= Duration::from_millis(100));
            assert!(d <= Duration::from_millis(300));
        }
    }
}
