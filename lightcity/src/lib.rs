// modulo raiz de lightcity
// organiza el modelo del semaforo y la simulacion de demostracion

pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod sim;

// reexports comodos
pub use config::{create_crossing, CycleRange, SimConfig};
pub use error::LightError;
pub use model::{Phase, TrafficLight};
pub use sim::run_simulation;
