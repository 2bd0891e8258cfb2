// reune las piezas del modelo

mod light;
mod phase;

pub use light::TrafficLight;
pub use phase::{Phase, PhaseCell};
