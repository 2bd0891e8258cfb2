// estados del semaforo y celda atomica de lectura instantanea

use std::sync::atomic::{AtomicU8, Ordering};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Red = 0,
    Green = 1,
}

impl Phase {
    /// El único cambio de estado posible: pasar al otro color.
    pub fn toggled(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    fn from_u8(v: u8) -> Phase {
        match v {
            0 => Phase::Red,
            _ => Phase::Green,
        }
    }
}

/// Instantánea del color actual: la escribe solo el hilo de fondo del
/// semáforo y la lee cualquier otro hilo sin bloquear.
pub struct PhaseCell(AtomicU8);

impl PhaseCell {
    pub fn new(phase: Phase) -> Self {
        Self(AtomicU8::new(phase as u8))
    }

    pub fn load(&self) -> Phase {
        Phase::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, phase: Phase) {
        self.0.store(phase as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Phase::Red.toggled(), Phase::Green);
        assert_eq!(Phase::Green.toggled(), Phase::Red);
        assert_eq!(Phase::Red.toggled().toggled(), Phase::Red);
    }

    #[test]
    fn test_cell_roundtrip() {
        let cell = PhaseCell::new(Phase::Red);
        assert_eq!(cell.load(), Phase::Red);

        cell.store(Phase::Green);
        assert_eq!(cell.load(), Phase::Green);
    }
}
