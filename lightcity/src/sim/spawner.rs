// generacion aleatoria de carros que esperan el verde

use crate::lc_log;
use crate::model::TrafficLight;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

pub struct CarSpawner {
    rng: rand::rngs::ThreadRng,
    poisson: Poisson<f64>,
    pub cars_spawned: u32,
    next_car_id: u32,
}

impl CarSpawner {
    pub fn new(mean_arrival_rate: f64) -> Self {
        Self {
            rng: rand::rng(),
            poisson: Poisson::new(mean_arrival_rate).unwrap(),
            cars_spawned: 0,
            next_car_id: 1000,
        }
    }

    /// Decide si llega un carro en este paso
    pub fn should_spawn(&mut self) -> bool {
        let sample = self.poisson.sample(&mut self.rng);
        sample > 0.5
    }

    /// Elige un semáforo al azar y lanza el hilo del carro.
    ///
    /// El carro queda bloqueado en wait_for_green hasta su transición;
    /// el handle se devuelve para hacer join al final de la corrida.
    pub fn spawn_car(&mut self, lights: &[Arc<TrafficLight>]) -> JoinHandle<()> {
        let id = self.next_car_id;
        self.next_car_id += 1;
        self.cars_spawned += 1;

        let idx = self.rng.random_range(0..lights.len());
        let light = Arc::clone(&lights[idx]);

        lc_log!("🚗 Carro-{} llega al semaforo {}", id, light.id());

        thread::spawn(move || {
            lc_log!("🚗 [Carro-{}] esperando verde en semaforo {}", id, light.id());
            light.wait_for_green();
            lc_log!("✅ [Carro-{}] verde recibido, cruzando", id);
        })
    }
}
