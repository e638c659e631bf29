use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Connection, Neuron};

/// Seeded when a seed is configured so layouts are reproducible.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn stamp_neuron_values<R: Rng>(neurons: &[Neuron], rng: &mut R) -> Vec<Neuron> {
    neurons
        .iter()
        .map(|n| Neuron {
            value: rng.gen_range(0.0..1.0),
            gradient: 0.0,
            is_active: false,
            ..n.clone()
        })
        .collect()
}

/// Stamps `value` in [0, 1) and the drawn `weight` in [-1, 1).
pub fn stamp_connection_values<R: Rng>(
    connections: &[Connection],
    rng: &mut R,
) -> Vec<Connection> {
    connections
        .iter()
        .map(|c| Connection {
            value: rng.gen_range(0.0..1.0),
            weight: rng.gen_range(-1.0..1.0),
            gradient: 0.0,
            is_active: false,
            ..c.clone()
        })
        .collect()
}
