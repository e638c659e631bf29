//! Dataset picker and layer editor. The draft is edited freely; only
//! `generate` hands a layer list to the visualization.

use eframe::egui;
use serde::Serialize;

use crate::model::LayerSpec;

const DEFAULT_HIDDEN_NEURONS: usize = 4;
const MAX_HIDDEN_NEURONS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub name: &'static str,
    pub input_layer: usize,
    pub output_layer: usize,
}

pub const DATASETS: [Dataset; 4] = [
    Dataset {
        name: "spiral",
        input_layer: 2,
        output_layer: 3,
    },
    Dataset {
        name: "iris",
        input_layer: 4,
        output_layer: 1,
    },
    Dataset {
        name: "xor",
        input_layer: 2,
        output_layer: 1,
    },
    Dataset {
        name: "sin",
        input_layer: 1,
        output_layer: 1,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Generate,
    Train,
}

#[derive(Debug, Clone, Default)]
pub struct NetworkDraft {
    dataset: Option<Dataset>,
    layers: Vec<LayerSpec>,
    submitted: Option<Vec<LayerSpec>>,
}

impl NetworkDraft {
    pub fn dataset(&self) -> Option<Dataset> {
        self.dataset
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Layer list handed out by the last `generate`.
    pub fn submitted(&self) -> Option<&[LayerSpec]> {
        self.submitted.as_deref()
    }

    /// Input and output sizes come from the dataset, with one hidden layer.
    pub fn select_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.layers = vec![
            LayerSpec::new(dataset.input_layer),
            LayerSpec::new(DEFAULT_HIDDEN_NEURONS),
            LayerSpec::new(dataset.output_layer),
        ];
    }

    fn is_hidden(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.layers.len()
    }

    /// Inserts a one-neuron layer right before the output layer.
    pub fn add_hidden_layer(&mut self) -> bool {
        if self.dataset.is_none() || self.layers.len() < 2 {
            return false;
        }
        let at = self.layers.len() - 1;
        self.layers.insert(at, LayerSpec::new(1));
        true
    }

    pub fn remove_layer(&mut self, index: usize) -> bool {
        if self.layers.len() <= 2 || !self.is_hidden(index) {
            return false;
        }
        self.layers.remove(index);
        true
    }

    /// Input and output counts are fixed by the dataset.
    pub fn set_neurons(&mut self, index: usize, neurons: usize) -> bool {
        if !self.is_hidden(index) {
            return false;
        }
        self.layers[index].neurons = neurons.max(1);
        true
    }

    pub fn can_generate(&self) -> bool {
        self.dataset.is_some() && self.layers.len() >= 2
    }

    pub fn generate(&mut self) -> Option<Vec<LayerSpec>> {
        if !self.can_generate() {
            return None;
        }
        self.submitted = Some(self.layers.clone());
        self.submitted.clone()
    }

    pub fn can_train(&self) -> bool {
        self.submitted.is_some()
    }
}

pub fn layer_label(index: usize, count: usize) -> String {
    if index == 0 {
        "Input Layer".to_string()
    } else if index + 1 == count {
        "Output Layer".to_string()
    } else {
        format!("Hidden Layer {index}")
    }
}

pub fn dataset_form(ui: &mut egui::Ui, draft: &mut NetworkDraft) {
    ui.heading("Select Dataset");
    ui.horizontal(|ui| {
        for dataset in DATASETS {
            let selected = draft.dataset().map(|d| d.name) == Some(dataset.name);
            if ui.selectable_label(selected, dataset.name).clicked() {
                log::info!("dataset selected: {}", dataset.name);
                draft.select_dataset(dataset);
            }
        }
    });
}

pub fn network_form(ui: &mut egui::Ui, draft: &mut NetworkDraft) -> Option<FormAction> {
    ui.heading("Neural Network Configuration");
    let count = draft.layers().len();
    let mut remove = None;
    let mut edits = Vec::new();
    for (i, layer) in draft.layers().iter().enumerate() {
        let hidden = draft.is_hidden(i);
        ui.horizontal(|ui| {
            ui.label(layer_label(i, count));
            let mut neurons = layer.neurons;
            let changed = ui
                .add_enabled(
                    hidden,
                    egui::DragValue::new(&mut neurons).range(1..=MAX_HIDDEN_NEURONS),
                )
                .changed();
            if changed {
                edits.push((i, neurons));
            }
            ui.label("neurons");
            if hidden && count > 3 && ui.button("Remove").clicked() {
                remove = Some(i);
            }
        });
    }
    for (i, neurons) in edits {
        draft.set_neurons(i, neurons);
    }
    if let Some(i) = remove {
        draft.remove_layer(i);
    }

    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(draft.dataset().is_some(), egui::Button::new("Add Hidden Layer"))
            .clicked()
        {
            draft.add_hidden_layer();
        }
        if ui
            .add_enabled(draft.can_generate(), egui::Button::new("Generate Network"))
            .clicked()
        {
            action = Some(FormAction::Generate);
        }
        if ui
            .add_enabled(draft.can_train(), egui::Button::new("Train Network"))
            .clicked()
        {
            action = Some(FormAction::Train);
        }
    });
    action
}
