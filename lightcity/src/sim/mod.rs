// simulacion de demostracion del cruce

mod simulation;
mod spawner;

pub use simulation::run_simulation;
pub use spawner::CarSpawner;
