//! Draw list for one frame of the diagram, in layout space.
//!
//! Lengths that should stay the same size on screen (neuron radius, stroke
//! widths) are divided by the viewport scale here; the painter multiplies
//! them back when it applies the transform.

use egui::Color32;

use crate::animation::Phase;
use crate::layout::{Layout, NEURON_RADIUS};
use crate::model::{ConnectionId, NeuronId, Point};
use crate::viewport::Viewport;

const FORWARD_EDGE: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);
const BACKWARD_EDGE: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const IDLE_EDGE: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);

const FORWARD_FILL: Color32 = Color32::from_rgb(0xfe, 0xf0, 0x8a);
const BACKWARD_FILL: Color32 = Color32::from_rgb(0xfe, 0xe2, 0xe2);
const IDLE_FILL: Color32 = Color32::from_rgb(0x6d, 0xbe, 0xed);

const ACTIVE_STROKE: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5);
const IDLE_STROKE: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);

pub const ACTIVE_OPACITY: f32 = 0.8;
pub const IDLE_OPACITY: f32 = 0.4;
pub const ARROW_HEAD: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowShape {
    pub id: ConnectionId,
    pub from: Point,
    pub to: Point,
    pub color: Color32,
    pub opacity: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeuronShape {
    pub id: NeuronId,
    pub center: Point,
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

/// Arrows are drawn before neurons so edges sit underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub arrows: Vec<ArrowShape>,
    pub neurons: Vec<NeuronShape>,
    pub skipped: usize,
}

fn edge_color(active: bool, phase: Phase) -> Color32 {
    match (active, phase) {
        (true, Phase::Forward) => FORWARD_EDGE,
        (true, Phase::Backward) => BACKWARD_EDGE,
        _ => IDLE_EDGE,
    }
}

fn neuron_fill(active: bool, phase: Phase) -> Color32 {
    match (active, phase) {
        (true, Phase::Forward) => FORWARD_FILL,
        (true, Phase::Backward) => BACKWARD_FILL,
        _ => IDLE_FILL,
    }
}

impl Scene {
    pub fn build(layout: &Layout, viewport: Viewport, phase: Phase) -> Self {
        let index = layout.neuron_index();
        let mut skipped = 0;

        let arrows = layout
            .connections
            .iter()
            .filter_map(|conn| {
                let (Some(from), Some(to)) = (index.get(&conn.from), index.get(&conn.to)) else {
                    log::warn!(
                        "generation {}: connection {} references a missing neuron, skipping",
                        layout.generation,
                        conn.id
                    );
                    skipped += 1;
                    return None;
                };
                Some(ArrowShape {
                    id: conn.id,
                    from: from.position,
                    to: to.position,
                    color: edge_color(conn.is_active, phase),
                    opacity: if conn.is_active {
                        ACTIVE_OPACITY
                    } else {
                        IDLE_OPACITY
                    },
                    width: 1.0 + conn.weight.abs(),
                })
            })
            .collect();

        let neurons = layout
            .neurons
            .iter()
            .map(|n| NeuronShape {
                id: n.id,
                center: n.position,
                radius: NEURON_RADIUS / viewport.scale,
                fill: neuron_fill(n.is_active, phase),
                stroke: if n.is_active {
                    ACTIVE_STROKE
                } else {
                    IDLE_STROKE
                },
                stroke_width: 2.0 / viewport.scale,
            })
            .collect();

        Self {
            arrows,
            neurons,
            skipped,
        }
    }
}
