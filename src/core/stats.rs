/// Cumulative counters collected while the simulation runs
///
/// Purely informational; nothing in the pipeline reads them back.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimStats {
    /// Number of resolved contacts (not distance checks)
    pub total_collisions: u64,

    /// Number of bodies swallowed by black holes
    pub bodies_absorbed: u64,

    /// Number of supernova events
    pub supernovae: u64,

    /// Kinetic energy dissipated by inelastic contacts
    pub total_energy_lost: f32,
}

impl SimStats {
    /// Creates a zeroed stats block
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records one resolved contact and the energy it dissipated
    pub fn record_collision(&mut self, energy_lost: f32) {
        self.total_collisions += 1;
        if energy_lost.is_finite() && energy_lost > 0.0 {
            self.total_energy_lost += energy_lost;
        }
    }
}
