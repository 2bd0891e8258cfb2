// bucle principal de la demostracion

use crate::config::{create_crossing, SimConfig};
use crate::lc_log;
use crate::sim::CarSpawner;
use std::thread;
use std::time::Duration;

/// Corre la demostración completa: arranca los semáforos, genera
/// carros que esperan el verde y consulta el estado periódicamente.
pub fn run_simulation(config: SimConfig) {
    lc_log!("\n╔════════════════════════════════════════════════════════════╗");
    lc_log!("║              LightCity - Simulación                        ║");
    lc_log!("╚════════════════════════════════════════════════════════════╝\n");

    let lights = create_crossing(&config);

    for light in &lights {
        if let Err(e) = light.simulate() {
            lc_log!("⚠️  No se pudo arrancar el semaforo {}: {}", light.id(), e);
            return;
        }
    }
    lc_log!("✅ {} semaforos corriendo\n", lights.len());

    let mut spawner = CarSpawner::new(config.car_rate);
    let mut cars = Vec::new();

    // --- BUCLE PRINCIPAL DE SIMULACIÓN ---
    for step in 0..config.steps {
        if spawner.should_spawn() {
            cars.push(spawner.spawn_car(&lights));
        }

        if step % 10 == 0 {
            let estados: Vec<String> = lights
                .iter()
                .map(|l| format!("{}:{:?}", l.id(), l.current_phase()))
                .collect();
            lc_log!("⏱️  Paso {}: {}", step, estados.join("  "));
        }

        thread::sleep(Duration::from_millis(config.step_ms));
    }

    // los semaforos siguen alternando durante el join, asi todo carro
    // pendiente recibe su verde antes del apagado
    lc_log!("\nEsperando a los carros pendientes...");
    for car in cars {
        let _ = car.join();
    }

    for light in &lights {
        light.stop();
    }

    lc_log!("\n╔════════════════════════════════════════════════════════════╗");
    lc_log!("║              Simulación Finalizada                         ║");
    lc_log!("╠════════════════════════════════════════════════════════════╣");
    lc_log!("║ Carros generados: {:>40} ║", spawner.cars_spawned);
    lc_log!("║ Semaforos detenidos: {:>37} ║", lights.len());
    lc_log!("╚════════════════════════════════════════════════════════════╝\n");
}
