// ============================================================================
// main.rs - LightCity: cruce de semaforos autonomos
// ============================================================================

use lightcity::{run_simulation, SimConfig};

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           LightCity con MyChannel                          ║");
    println!("║      Semaforos autonomos y carros que esperan verde        ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    run_simulation(SimConfig::default());
}
