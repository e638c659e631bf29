//! Neuron and connection records for one generation of the diagram.
//!
//! A [`Layout`] is rebuilt wholesale whenever the layer list or the container
//! changes. The only in-place edit is the `is_active` projection applied by
//! [`Layout::apply_frame`].

use std::collections::HashMap;

use rand::Rng;

use crate::animation::ActivityFrame;
use crate::geometry::{self, Size};
use crate::model::{Connection, ConnectionId, LayerSpec, Neuron, NeuronId, Point};
use crate::randomize;

pub const NEURON_RADIUS: f32 = 15.0;
/// Vertical pitch between neurons of one layer.
const NEURON_PITCH: f32 = NEURON_RADIUS * 3.0;

pub fn max_neurons(layers: &[LayerSpec]) -> usize {
    layers.iter().map(|l| l.neurons).max().unwrap_or(0)
}

/// Positions and full bipartite wiring, with placeholder values left at zero.
///
/// Expects a non-empty list with at least one neuron per layer.
pub fn build_structure(layers: &[LayerSpec], dimensions: Size) -> (Vec<Neuron>, Vec<Connection>) {
    let layer_spacing = dimensions.width / layers.len().saturating_sub(1).max(1) as f32;

    let mut neurons = Vec::with_capacity(layers.iter().map(|l| l.neurons).sum());
    let mut connections = Vec::with_capacity(
        layers
            .windows(2)
            .map(|pair| pair[0].neurons * pair[1].neurons)
            .sum(),
    );

    for (layer_idx, layer) in layers.iter().enumerate() {
        let layer_height = layer.neurons as f32 * NEURON_PITCH;
        let start_y = (dimensions.height - layer_height) / 2.0;
        let x = layer_idx as f32 * layer_spacing;
        let next = layers.get(layer_idx + 1);

        for i in 0..layer.neurons {
            let id = NeuronId::new(layer_idx, i);
            neurons.push(Neuron {
                id,
                layer_id: layer.id,
                position: Point::new(x, start_y + i as f32 * NEURON_PITCH),
                value: 0.0,
                gradient: 0.0,
                is_active: false,
            });

            if let Some(next) = next {
                for j in 0..next.neurons {
                    let to = NeuronId::new(layer_idx + 1, j);
                    connections.push(Connection {
                        id: ConnectionId { from: id, to },
                        from: id,
                        to,
                        weight: 0.0,
                        value: 0.0,
                        gradient: 0.0,
                        is_active: false,
                    });
                }
            }
        }
    }

    (neurons, connections)
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub generation: u64,
    pub dimensions: Size,
    pub neurons: Vec<Neuron>,
    pub connections: Vec<Connection>,
}

impl Layout {
    pub fn generate<R: Rng>(
        layers: &[LayerSpec],
        container: Size,
        generation: u64,
        rng: &mut R,
    ) -> Self {
        let dimensions =
            geometry::network_dimensions(layers.len(), max_neurons(layers), container);
        let (neurons, connections) = build_structure(layers, dimensions);
        log::debug!(
            "layout generation {generation}: {} neurons, {} connections, {:.0}x{:.0}",
            neurons.len(),
            connections.len(),
            dimensions.width,
            dimensions.height
        );
        Self {
            generation,
            dimensions,
            neurons: randomize::stamp_neuron_values(&neurons, rng),
            connections: randomize::stamp_connection_values(&connections, rng),
        }
    }

    /// Fresh placeholder values over the same structure.
    pub fn restamp<R: Rng>(&mut self, rng: &mut R) {
        self.neurons = randomize::stamp_neuron_values(&self.neurons, rng);
        self.connections = randomize::stamp_connection_values(&self.connections, rng);
    }

    /// Recolours neurons and connections from a single snapshot.
    pub fn apply_frame(&mut self, frame: ActivityFrame) {
        for neuron in &mut self.neurons {
            neuron.is_active = frame.neuron_active(neuron.id.layer);
        }
        for conn in &mut self.connections {
            conn.is_active = frame.connection_active(conn.from.layer, conn.to.layer);
        }
    }

    pub fn neuron_index(&self) -> HashMap<NeuronId, &Neuron> {
        self.neurons.iter().map(|n| (n.id, n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Phase;
    use crate::model::layers_from_counts;
    use crate::randomize::make_rng;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn layout(counts: &[usize]) -> Layout {
        let layers = layers_from_counts(counts);
        Layout::generate(&layers, Size::new(800.0, 600.0), 1, &mut make_rng(Some(7)))
    }

    #[test]
    fn counts_match_configuration() {
        let l = layout(&[2, 4, 3]);
        assert_eq!(l.neurons.len(), 9);
        assert_eq!(l.connections.len(), 2 * 4 + 4 * 3);
    }

    #[test]
    fn ids_are_unique_and_references_resolve() {
        let l = layout(&[3, 5, 5, 2]);
        let ids: HashSet<_> = l.neurons.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), l.neurons.len());
        for c in &l.connections {
            assert!(ids.contains(&c.from));
            assert!(ids.contains(&c.to));
            assert_eq!(c.to.layer, c.from.layer + 1);
        }
    }

    #[test]
    fn layers_are_spread_across_width() {
        let l = layout(&[2, 4, 3]);
        let xs: Vec<f32> = l
            .neurons
            .iter()
            .filter(|n| n.id.index == 0)
            .map(|n| n.position.x)
            .collect();
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], l.dimensions.width / 2.0);
        assert_relative_eq!(xs[2], l.dimensions.width);
    }

    #[test]
    fn layer_block_is_vertically_centered() {
        let l = layout(&[2, 4, 3]);
        let second: Vec<f32> = l
            .neurons
            .iter()
            .filter(|n| n.id.layer == 1)
            .map(|n| n.position.y)
            .collect();
        let start = (l.dimensions.height - 4.0 * NEURON_PITCH) / 2.0;
        assert_relative_eq!(second[0], start);
        assert_relative_eq!(second[3], start + 3.0 * NEURON_PITCH);
    }

    #[test]
    fn identical_topology_gives_identical_ids() {
        let a = layout(&[2, 3]);
        let b = layout(&[2, 3]);
        let ids_a: Vec<String> = a.connections.iter().map(|c| c.id.to_string()).collect();
        let ids_b: Vec<String> = b.connections.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a[0], "0-0-to-1-0");
    }

    #[test]
    fn frame_lights_one_layer_and_one_edge() {
        let mut l = layout(&[2, 4, 3]);
        l.apply_frame(ActivityFrame {
            phase: Phase::Forward,
            current_layer: 1,
            layer_count: 3,
        });
        assert_eq!(l.neurons.iter().filter(|n| n.is_active).count(), 4);
        assert_eq!(l.connections.iter().filter(|c| c.is_active).count(), 8);

        l.apply_frame(ActivityFrame {
            phase: Phase::Idle,
            current_layer: 0,
            layer_count: 3,
        });
        assert!(l.neurons.iter().all(|n| !n.is_active));
        assert!(l.connections.iter().all(|c| !c.is_active));
    }

    #[test]
    fn restamp_keeps_structure() {
        let mut l = layout(&[2, 2]);
        let positions: Vec<Point> = l.neurons.iter().map(|n| n.position).collect();
        let before: Vec<f32> = l.neurons.iter().map(|n| n.value).collect();
        l.restamp(&mut make_rng(Some(99)));
        let after: Vec<f32> = l.neurons.iter().map(|n| n.value).collect();
        assert_eq!(positions, l.neurons.iter().map(|n| n.position).collect::<Vec<_>>());
        assert_ne!(before, after);
    }
}
