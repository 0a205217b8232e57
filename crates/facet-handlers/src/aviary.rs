//! Aviary residents
//!
//! Base operations read the same for every resident: a caller holding
//! `ResidentOps` cannot tell which bird it has. Flight is declared only by
//! the sparrow; the penguin simply never claims it, so no flight operation
//! can reach a penguin.

use facet_core::effects::{FlightOps, ResidentOps};
use facet_core::Receipt;

/// Resident that forages, preens, and flies
#[derive(Debug, Clone, Default)]
pub struct Sparrow;

impl Sparrow {
    /// Create a new sparrow
    pub fn new() -> Self {
        Self
    }
}

impl ResidentOps for Sparrow {
    fn forage(&self) -> Receipt {
        tracing::info!(resident = "sparrow", "foraging");
        Receipt::new("resident", "forage", "foraged from the seed tray")
    }

    fn preen(&self) -> Receipt {
        tracing::info!(resident = "sparrow", "preening");
        Receipt::new("resident", "preen", "feathers preened")
    }
}

impl FlightOps for Sparrow {
    fn fly(&self) -> Receipt {
        tracing::info!(resident = "sparrow", "flying");
        Receipt::new("sparrow", "fly", "completed a circuit of the aviary")
    }
}

/// Resident that forages and preens but does not fly
#[derive(Debug, Clone, Default)]
pub struct Penguin;

impl Penguin {
    /// Create a new penguin
    pub fn new() -> Self {
        Self
    }
}

impl ResidentOps for Penguin {
    fn forage(&self) -> Receipt {
        tracing::info!(resident = "penguin", "foraging");
        Receipt::new("resident", "forage", "foraged from the seed tray")
    }

    fn preen(&self) -> Receipt {
        tracing::info!(resident = "penguin", "preening");
        Receipt::new("resident", "preen", "feathers preened")
    }
}
