use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque token identifying a layer across edits of the same draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub u64);

impl LayerId {
    pub fn fresh() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: LayerId,
    pub neurons: usize,
}

impl LayerSpec {
    pub fn new(neurons: usize) -> Self {
        Self {
            id: LayerId::fresh(),
            neurons,
        }
    }
}

/// Builds a layer list from plain neuron counts, one fresh id per layer.
pub fn layers_from_counts(counts: &[usize]) -> Vec<LayerSpec> {
    counts.iter().map(|&n| LayerSpec::new(n)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId {
    pub layer: usize,
    pub index: usize,
}

impl NeuronId {
    pub const fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.layer, self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId {
    pub from: NeuronId,
    pub to: NeuronId,
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-to-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub id: NeuronId,
    pub layer_id: LayerId,
    pub position: Point,
    pub value: f32,
    pub gradient: f32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NeuronId,
    pub to: NeuronId,
    pub weight: f32,
    pub value: f32,
    pub gradient: f32,
    pub is_active: bool,
}
